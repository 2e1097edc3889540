//! Provider registration glue.
//!
//! [`GatewayPlugin`] binds a [`Character`] and a [`GatewayConfig`] to the
//! [`ModelProvider`] contract: the host runtime registers it once and routes
//! text generation and embedding invocations to it by capability tag.

use crate::character::Character;
use crate::error::{Result, WrenError};
use crate::llm::embeddings::{embedding_text, placeholder_embedding};
use crate::llm::gateway::{GatewayConfig, InferenceGateway};
use crate::llm::profile::GenerationOptions;
use crate::runtime::{AgentRuntime, GenerateTextParams, ModelClass, ModelProvider};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

const PLUGIN_NAME: &str = "gateway";

const MODEL_CLASSES: &[ModelClass] = &[
    ModelClass::TextSmall,
    ModelClass::TextLarge,
    ModelClass::TextEmbedding,
];

/// The crate's model provider: every text tag goes through the inference
/// gateway, the embedding tag through the local placeholder.
pub struct GatewayPlugin {
    character: Character,
    config: GatewayConfig,
    client: reqwest::Client,
}

impl GatewayPlugin {
    /// Create a plugin for `character`, configured from the process
    /// environment.
    pub fn new(character: Character) -> Self {
        Self::with_config(character, GatewayConfig::from_env())
    }

    /// Create a plugin with an explicit configuration.
    pub fn with_config(character: Character, config: GatewayConfig) -> Self {
        Self {
            character,
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Effective per-call configuration: runtime settings back-fill unset
    /// fields, then the system prompt resolves as runtime persona, else the
    /// character's own persona text, else the configured default.
    fn call_config(&self, runtime: &dyn AgentRuntime) -> GatewayConfig {
        let mut config = self.config.merged_with_runtime(runtime);
        if let Some(persona) = runtime.persona().or_else(|| self.character.system.clone()) {
            config.system_prompt = persona;
        }
        config
    }
}

#[async_trait]
impl ModelProvider for GatewayPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn model_classes(&self) -> &[ModelClass] {
        MODEL_CLASSES
    }

    async fn generate_text(
        &self,
        runtime: &dyn AgentRuntime,
        class: ModelClass,
        params: &GenerateTextParams,
    ) -> Result<String> {
        let profile = class.profile().ok_or_else(|| {
            WrenError::Configuration(format!("model class {class} does not produce text"))
        })?;

        info!("Handling {} generation for character: {}", class, self.character.name);

        let gateway = InferenceGateway::with_client(self.client.clone(), self.call_config(runtime));
        let options = GenerationOptions::new(params.max_tokens, params.temperature);
        gateway.generate(&params.prompt, profile, &options).await
    }

    fn embed(&self, input: &Value) -> Vec<f32> {
        placeholder_embedding(embedding_text(input))
    }
}
