//! The inference gateway adapter.
//!
//! One outbound `POST {endpoint}/llm` per call, chat-completion request out,
//! normalized text back. Configuration is resolved per call from an explicit
//! [`GatewayConfig`], the process environment, and (through
//! [`GatewayConfig::merged_with_runtime`]) the host runtime's settings store,
//! in that precedence.

use crate::error::{Result, WrenError};
use crate::llm::models::{ChatCompletion, ChatMessage, ChatRequest};
use crate::llm::profile::{resolve, GenerationOptions, ModelProfile};
use crate::runtime::AgentRuntime;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Environment variable carrying the gateway base URL.
pub const GATEWAY_URL_VAR: &str = "GATEWAY_URL";
/// Environment variable carrying the bearer token.
pub const GATEWAY_API_KEY_VAR: &str = "GATEWAY_API_KEY";
/// Environment variable overriding the model identifier.
pub const GATEWAY_MODEL_VAR: &str = "GATEWAY_MODEL";
/// Environment variable overriding the model identifier, above `GATEWAY_MODEL`.
pub const GATEWAY_LARGE_MODEL_VAR: &str = "GATEWAY_LARGE_MODEL";
/// Environment variable overriding the sampling temperature (numeric string).
pub const GATEWAY_TEMPERATURE_VAR: &str = "GATEWAY_TEMPERATURE";
/// Environment variable overriding the token budget (integer string).
pub const GATEWAY_MAX_TOKENS_VAR: &str = "GATEWAY_MAX_TOKENS";

/// Model served when no override is configured anywhere.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3.1-70B-Instruct";

/// Bearer token sent when no API key is configured. Permissive gateway
/// deployments accept any non-empty token.
pub const FALLBACK_API_KEY: &str = "no-key";

/// System message used when neither a persona nor an explicit prompt is
/// configured.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful, knowledgeable assistant. Answer plainly and accurately.";

// Llama-3 chat template leakage some gateway deployments prepend to the
// generated text.
const ASSISTANT_HEADER_ARTIFACT: &str = "<|start_header_id|>assistant<|end_header_id|>\n\n";

const PROMPT_PREVIEW_CHARS: usize = 80;

/// Configuration for the gateway adapter.
///
/// All optional fields resolve through the same chain: an explicitly set value
/// wins, the environment fills unset fields via [`from_env`](Self::from_env),
/// the host runtime fills what is still unset via
/// [`merged_with_runtime`](Self::merged_with_runtime), and hardcoded defaults
/// close the chain at call time. `system_prompt` is always present; callers
/// that manage a persona overwrite it.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub large_model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub system_prompt: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: None,
            large_model: None,
            max_tokens: None,
            temperature: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// Every variable is optional. Unparseable numeric values are logged and
    /// treated as unset rather than failing the call that eventually uses them.
    pub fn from_env() -> Self {
        Self {
            endpoint: env_var(GATEWAY_URL_VAR),
            api_key: env_var(GATEWAY_API_KEY_VAR),
            model: env_var(GATEWAY_MODEL_VAR),
            large_model: env_var(GATEWAY_LARGE_MODEL_VAR),
            max_tokens: env_parsed(GATEWAY_MAX_TOKENS_VAR),
            temperature: env_parsed(GATEWAY_TEMPERATURE_VAR),
            ..Default::default()
        }
    }

    /// Back-fill unset fields from the host runtime's settings store.
    ///
    /// Values already present (explicit or environment) keep precedence; the
    /// runtime is the last resolution source before hardcoded defaults. The
    /// lookup happens on every call, so runtime-side changes are visible
    /// without restarting anything.
    pub fn merged_with_runtime(&self, runtime: &dyn AgentRuntime) -> Self {
        let setting = |key: &str| runtime.setting(key).filter(|v| !v.is_empty());

        Self {
            endpoint: self.endpoint.clone().or_else(|| setting(GATEWAY_URL_VAR)),
            api_key: self.api_key.clone().or_else(|| setting(GATEWAY_API_KEY_VAR)),
            model: self.model.clone().or_else(|| setting(GATEWAY_MODEL_VAR)),
            large_model: self
                .large_model
                .clone()
                .or_else(|| setting(GATEWAY_LARGE_MODEL_VAR)),
            max_tokens: self
                .max_tokens
                .or_else(|| setting(GATEWAY_MAX_TOKENS_VAR).and_then(|v| v.parse().ok())),
            temperature: self
                .temperature
                .or_else(|| setting(GATEWAY_TEMPERATURE_VAR).and_then(|v| v.parse().ok())),
            system_prompt: self.system_prompt.clone(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env_var(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable value for {}: {}", name, raw);
            None
        }
    }
}

/// Adapter for the chat-completion gateway.
///
/// Holds a reqwest client and a [`GatewayConfig`]; each [`generate`](Self::generate)
/// call is independent, with no retries, queuing, or shared mutable state.
/// Timeouts and cancellation belong to the HTTP client the host environment
/// configures.
pub struct InferenceGateway {
    client: Client,
    config: GatewayConfig,
}

impl InferenceGateway {
    /// Create a gateway configured from the process environment.
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::from_env())
    }

    /// Create a gateway with an explicit configuration.
    pub fn with_config(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a gateway pointed at an explicit endpoint, everything else
    /// default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_config(GatewayConfig {
            endpoint: Some(endpoint.into()),
            ..Default::default()
        })
    }

    /// Create a gateway over an existing client. reqwest clients are cheap to
    /// clone and share; callers issuing many calls reuse one this way.
    pub fn with_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Generate text for `prompt` under the given profile.
    ///
    /// Fails with [`WrenError::Configuration`] when no endpoint is resolvable,
    /// with [`WrenError::Upstream`] on a non-success HTTP status, and with
    /// [`WrenError::InvalidResponse`] when the body is unusable.
    pub async fn generate(
        &self,
        prompt: &str,
        profile: ModelProfile,
        options: &GenerationOptions,
    ) -> Result<String> {
        let endpoint = self.resolved_endpoint()?;
        let model = self.resolved_model();
        let max_tokens = resolve(
            options.max_tokens,
            self.config.max_tokens,
            profile.default_max_tokens(),
        );
        let temperature = resolve(
            options.temperature,
            self.config.temperature,
            profile.default_temperature(),
        );

        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(self.config.system_prompt.clone()),
                ChatMessage::user(prompt),
            ],
            max_tokens,
            temperature,
            stream: false,
        };

        info!("Delegating to inference gateway for completion");
        debug!(
            "Model: {}, max_tokens: {}, temperature: {}, prompt: {}",
            model,
            max_tokens,
            temperature,
            preview(prompt, PROMPT_PREVIEW_CHARS)
        );

        let response = self
            .client
            .post(format!("{endpoint}/llm"))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.bearer_token()))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WrenError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)
            .map_err(|e| WrenError::InvalidResponse(format!("unparseable body: {e}")))?;

        debug!(
            "Response status: {}, message content: {}, delta content: {}",
            status.as_u16(),
            completion.has_message_content(),
            completion.has_delta_content()
        );

        let text = completion
            .text()
            .ok_or_else(|| WrenError::InvalidResponse("invalid response format".to_string()))?;

        Ok(strip_assistant_header(text).to_string())
    }

    fn resolved_endpoint(&self) -> Result<String> {
        let endpoint = self.config.endpoint.as_deref().ok_or_else(|| {
            WrenError::Configuration(format!(
                "gateway endpoint is not set; export {GATEWAY_URL_VAR} or configure it explicitly"
            ))
        })?;
        Ok(endpoint.strip_suffix('/').unwrap_or(endpoint).to_string())
    }

    fn resolved_model(&self) -> &str {
        self.config
            .large_model
            .as_deref()
            .or(self.config.model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
    }

    fn bearer_token(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or(FALLBACK_API_KEY)
    }
}

impl Default for InferenceGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_assistant_header(text: &str) -> &str {
    text.strip_prefix(ASSISTANT_HEADER_ARTIFACT).unwrap_or(text)
}

// Char-boundary-safe truncation for log fields.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
