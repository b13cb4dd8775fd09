use std::env;
use std::str::FromStr;

use crate::options::ChatOption;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const CHAT_COMPLETION_URL_ENV: &str = "GROQ_CHAT_COMPLETION_URL";
pub const DEFAULT_CHAT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    // 认证信息，可以为空：由服务端拒绝请求
    pub api_key: String,

    // 接口地址
    pub chat_completion_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            chat_completion_url: DEFAULT_CHAT_COMPLETION_URL.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意查找函数读取配置，便于测试时不依赖进程环境变量
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();

        // 接口地址，默认为 Groq 官方地址
        let chat_completion_url = lookup(CHAT_COMPLETION_URL_ENV)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_COMPLETION_URL.to_string());

        Self {
            api_key,
            chat_completion_url,
        }
    }
}

/// 从环境变量读取 API key，未设置时返回空字符串
pub fn api_key_from_env() -> String {
    env::var(API_KEY_ENV).unwrap_or_default()
}

pub fn options_from_env() -> Vec<ChatOption> {
    options_from_lookup(|key| env::var(key).ok())
}

/// 读取可选的请求参数覆盖项
///
/// 只返回已设置的项；无法解析的值记录警告后跳过，保持默认值。
pub fn options_from_lookup<F>(lookup: F) -> Vec<ChatOption>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = Vec::new();

    if let Some(model) = lookup("GROQ_MODEL").filter(|m| !m.is_empty()) {
        options.push(ChatOption::Model(model));
    }
    if let Some(temperature) = parse_var(&lookup, "GROQ_TEMPERATURE") {
        options.push(ChatOption::Temperature(temperature));
    }
    if let Some(max_tokens) = parse_var(&lookup, "GROQ_MAX_TOKENS") {
        options.push(ChatOption::MaxTokens(max_tokens));
    }
    if let Some(top_p) = parse_var(&lookup, "GROQ_TOP_P") {
        options.push(ChatOption::TopP(top_p));
    }
    if let Some(stop) = lookup("GROQ_STOP").filter(|s| !s.is_empty()) {
        options.push(ChatOption::Stop(stop));
    }

    options
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}
