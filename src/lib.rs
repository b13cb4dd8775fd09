//! Groq chat completions 接口的精简客户端。
//!
//! 每次调用只发出一个 POST，future 在底层传输返回或失败时结束；不重试、不流式。
//!
//! ```no_run
//! use groq_client::{ChatOption, GroqClient, Message};
//!
//! # async fn run() -> groq_client::Result<()> {
//! let client = GroqClient::new(None, None);
//! let resp = client
//!     .chat_completion(
//!         vec![Message::user("Explain nucleus sampling in one sentence.")],
//!         [ChatOption::temperature(0.2), ChatOption::max_tokens(128)],
//!     )
//!     .await?;
//! println!("{}", resp.first_content().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod openai_types;
pub mod options;

pub use client::{build_request, GroqClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use openai_types::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, Message, Usage, XGroq, DEFAULT_MODEL,
};
pub use options::ChatOption;
