use crate::openai_types::ChatCompletionRequest;

/// 单个请求参数覆盖项，每项只修改一个字段
///
/// 按给出顺序依次应用，同一字段以最后一次为准。
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOption {
    Model(String),
    Temperature(f64),
    MaxTokens(u32),
    TopP(f64),
    Stop(String),
}

impl ChatOption {
    pub fn model(model: impl Into<String>) -> Self {
        Self::Model(model.into())
    }

    pub fn temperature(temperature: f64) -> Self {
        Self::Temperature(temperature)
    }

    pub fn max_tokens(max_tokens: u32) -> Self {
        Self::MaxTokens(max_tokens)
    }

    pub fn top_p(top_p: f64) -> Self {
        Self::TopP(top_p)
    }

    pub fn stop(stop: impl Into<String>) -> Self {
        Self::Stop(stop.into())
    }

    pub fn apply(self, req: &mut ChatCompletionRequest) {
        match self {
            Self::Model(model) => req.model = model,
            Self::Temperature(temperature) => req.temperature = temperature,
            Self::MaxTokens(max_tokens) => req.max_tokens = max_tokens,
            Self::TopP(top_p) => req.top_p = top_p,
            Self::Stop(stop) => req.stop = Some(stop),
        }
    }
}
