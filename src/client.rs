use reqwest::{header, Client, StatusCode};

use crate::config::{self, ClientConfig};
use crate::error::{Error, Result};
use crate::openai_types::{ChatCompletionRequest, ChatCompletionResponse, Message};
use crate::options::ChatOption;

/// Groq chat completions 客户端
///
/// 构造后状态只读，可在多个任务间共享。
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    chat_completion_url: String,
}

impl GroqClient {
    /// 创建客户端
    ///
    /// `http` 为空时使用默认的 `reqwest::Client`；`api_key` 为空时在此处读取
    /// `GROQ_API_KEY`。构造不会失败，空 key 只会在请求被服务端拒绝时暴露。
    pub fn new(http: Option<Client>, api_key: Option<String>) -> Self {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .unwrap_or_else(config::api_key_from_env);

        Self::with_config(http, ClientConfig::new(api_key))
    }

    /// 使用显式配置创建客户端，不读取环境变量
    pub fn with_config(http: Option<Client>, config: ClientConfig) -> Self {
        Self {
            http: http.unwrap_or_default(),
            api_key: config.api_key,
            chat_completion_url: config.chat_completion_url,
        }
    }

    /// 替换接口地址（测试时指向本地 mock 服务）
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.chat_completion_url = url.into();
        self
    }

    /// 当前接口地址
    pub fn endpoint(&self) -> &str {
        &self.chat_completion_url
    }

    /// 是否持有非空 API key（不校验有效性）
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// 发送一次 chat completion 请求
    ///
    /// 只在状态码为 200 时解析响应体，其余情况直接返回错误，不重试。
    pub async fn chat_completion<I>(
        &self,
        messages: Vec<Message>,
        options: I,
    ) -> Result<ChatCompletionResponse>
    where
        I: IntoIterator<Item = ChatOption>,
    {
        let body = build_request(messages, options);
        let payload = serde_json::to_vec(&body).map_err(Error::Serialize)?;

        tracing::debug!(
            "Sending chat completion request: model={}, messages={}",
            body.model,
            body.messages.len()
        );

        let resp = self
            .http
            .post(&self.chat_completion_url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!("Chat completion response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

/// 默认参数上依次应用覆盖项，得到最终请求体
pub fn build_request<I>(messages: Vec<Message>, options: I) -> ChatCompletionRequest
where
    I: IntoIterator<Item = ChatOption>,
{
    let mut body = ChatCompletionRequest::new(messages);
    for option in options {
        option.apply(&mut body);
    }
    body
}
