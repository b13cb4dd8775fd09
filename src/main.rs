use anyhow::{bail, Context};
use groq_client::{config, ClientConfig, GroqClient, Message};
use std::env;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 初始化日志，输出到 stderr，stdout 只留给回复内容
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "groq_client=info,groq_chat=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. 加载配置（.env）
    let env_path = Path::new(".env");
    if env_path.exists() {
        match dotenvy::from_path(env_path) {
            Ok(_) => tracing::info!("Loaded .env file successfully"),
            Err(e) => tracing::error!("Failed to load .env file: {}", e),
        }
    } else {
        tracing::debug!(".env file not found in current directory");
    }

    // 只检查是否存在，不打印具体值
    tracing::info!("{} exists: {}", config::API_KEY_ENV, env::var(config::API_KEY_ENV).is_ok());

    let client_config = ClientConfig::from_env();
    tracing::info!("Using endpoint {}", client_config.chat_completion_url);
    let client = GroqClient::with_config(None, client_config);

    // 3. 组装消息：可选的 system prompt + 命令行参数
    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        bail!("usage: groq-chat <prompt...>");
    }

    let mut messages = Vec::new();
    if let Ok(system) = env::var("GROQ_SYSTEM_PROMPT") {
        if !system.is_empty() {
            messages.push(Message::system(system));
        }
    }
    messages.push(Message::user(prompt));

    // 4. 发送请求
    let resp = client
        .chat_completion(messages, config::options_from_env())
        .await
        .context("chat completion request failed")?;

    if let Some(usage) = &resp.usage {
        tracing::info!(
            "Usage: prompt_tokens={:?}, completion_tokens={:?}, total_tokens={:?}",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    match resp.first_content() {
        Some(content) => println!("{}", content),
        None => tracing::warn!("Response contained no choices"),
    }

    Ok(())
}
