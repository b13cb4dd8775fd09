use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

/// 默认模型
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// 用户 / 系统 / 助手消息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String, // "user", "assistant", "system"，不做校验
    // tool_calls 结束时服务端会返回 null
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Chat completions 请求体 - 与 OpenAI API 兼容
///
/// 字段顺序即序列化顺序；`stop` 为空时不输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<Message>,
    pub model: String,
    #[serde(serialize_with = "finite_f64")]
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(serialize_with = "finite_f64")]
    pub top_p: f64,
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
}

impl ChatCompletionRequest {
    /// 使用默认参数构造请求，消息按调用方给出的顺序原样保存
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            max_tokens: 1024,
            top_p: 1.0,
            stream: false,
            stop: None,
        }
    }
}

/// Chat completions 响应体
///
/// 所有字段在反序列化时都是可选的，缺失字段不会导致失败。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub model: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    pub system_fingerprint: Option<String>,
    pub x_groq: Option<XGroq>,
}

impl ChatCompletionResponse {
    /// 第一个 choice 的消息内容
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub index: Option<usize>,
    pub message: Option<Message>,
    /// 结构未定义，原样透传
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: Option<String>,
}

/// token 用量及耗时统计（时间单位为秒）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub queue_time: Option<f64>,
    pub prompt_tokens: Option<u64>,
    pub prompt_time: Option<f64>,
    pub completion_tokens: Option<u64>,
    pub completion_time: Option<f64>,
    pub total_tokens: Option<u64>,
    pub total_time: Option<f64>,
}

/// Groq 附加的回显对象
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct XGroq {
    pub id: Option<String>,
}

/// null 与缺失同样处理，取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// NaN / Inf 不能表示为 JSON，序列化直接失败而不是输出 null
fn finite_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(ser::Error::custom(format!("non-finite float: {}", value)));
    }
    serializer.serialize_f64(*value)
}
