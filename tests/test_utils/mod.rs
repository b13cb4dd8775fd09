#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use groq_client::{ClientConfig, GroqClient, Message};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const SUCCESS_BODY: &str = r#"{"id": "123", "object": "text", "created": 1643723400, "model": "llama3-8b-8192", "choices": [{"index": 0, "message": {"role": "user", "content": "Hello, world!"}, "logprobs": null, "finish_reason": "length"}], "usage": {"queue_time": 0.1, "prompt_tokens": 5, "prompt_time": 0.2, "completion_tokens": 10, "completion_time": 0.3, "total_tokens": 15, "total_time": 0.6}, "system_fingerprint": "1234567890", "x_groq": {"id": "123"}}"#;

pub const CHAT_PATH: &str = "/openai/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    // 设置后校验 Authorization，不匹配返回 401
    expected_key: Option<String>,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

async fn handle_chat(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorized = match &state.expected_key {
        Some(key) => headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map_or(false, |v| v == format!("Bearer {}", key)),
        None => true,
    };

    *state.captured.lock().await = Some(CapturedRequest { headers, body });

    let json = [(header::CONTENT_TYPE, "application/json")];
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            json,
            r#"{"error": {"message": "Invalid API Key"}}"#.to_string(),
        );
    }
    (state.status, json, state.body.clone())
}

pub struct MockServer {
    pub url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

impl MockServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        Self::start_with_key(status, body, None).await
    }

    pub async fn start_with_key(status: StatusCode, body: &str, expected_key: Option<&str>) -> Self {
        let captured = Arc::new(Mutex::new(None));
        let state = MockState {
            status,
            body: body.to_string(),
            expected_key: expected_key.map(str::to_string),
            captured: captured.clone(),
        };

        let app = Router::new()
            .route(CHAT_PATH, post(handle_chat))
            .with_state(state);

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        Self {
            url: format!("http://{}{}", addr, CHAT_PATH),
            captured,
        }
    }

    pub fn client(&self, api_key: &str) -> GroqClient {
        GroqClient::with_config(Some(local_http()), ClientConfig::new(api_key))
            .with_endpoint(&self.url)
    }

    pub async fn captured(&self) -> CapturedRequest {
        self.captured
            .lock()
            .await
            .clone()
            .expect("mock server received no request")
    }

    pub async fn received(&self) -> bool {
        self.captured.lock().await.is_some()
    }
}

// 本地测试不走系统代理
pub fn local_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn hello() -> Vec<Message> {
    vec![Message::user("Hello, world!")]
}

