//! OpenAI completion provider for Gambit

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use gambit_core::{
    get_env_float, get_env_or, CompletionProvider, CompletionRequest, GambitError, Result,
};
use tracing::{debug, warn};

/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature (low, for near-deterministic critiques)
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// OpenAI provider configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// API key; an empty key surfaces as an auth failure on the first call
    pub api_key: String,

    /// Completion model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl OpenAiProviderConfig {
    /// Resolve configuration from the process environment
    ///
    /// Reads `OPENAI_API_KEY`, `OPENAI_MODEL`, and `OPENAI_TEMPERATURE`.
    /// A missing key is not an error here: the failure is surfaced by the
    /// first completion call instead of a distinct validation path.
    pub fn from_env() -> Self {
        let api_key = get_env_or("OPENAI_API_KEY", "");
        if api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; completion calls will fail");
        }
        Self {
            api_key,
            model: get_env_or("OPENAI_MODEL", DEFAULT_MODEL),
            temperature: get_env_float("OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE),
        }
    }
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// OpenAI chat-completion provider
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    /// Create a provider from explicit configuration
    pub fn new(config: OpenAiProviderConfig) -> Self {
        let client = Client::with_config(OpenAIConfig::new().with_api_key(config.api_key));
        Self {
            client,
            model: config.model,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system)
                    .build()
                    .map_err(|e| GambitError::provider(e.to_string()))?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.user)
                    .build()
                    .map_err(|e| GambitError::provider(e.to_string()))?,
            ),
        ];

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .temperature(self.temperature)
            .messages(messages)
            .build()
            .map_err(|e| GambitError::provider(e.to_string()))?;

        debug!(model = %self.model, "sending completion request");
        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| GambitError::provider(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| GambitError::provider("completion response contained no choices"))
    }
}
