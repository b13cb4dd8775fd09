use thiserror::Error;

/// 一次 chat completion 调用可能出现的失败，均不重试
#[derive(Error, Debug)]
pub enum Error {
    /// 请求体序列化失败，请求未发出
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// 网络层错误（DNS、连接被拒、超时、读取响应体）
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 非 200 状态码，响应体不解析
    #[error("unexpected status code: {0}")]
    Status(u16),

    /// 响应体不是合法 JSON 或结构不符
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
