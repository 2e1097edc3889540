//! Contracts toward the host agent runtime.
//!
//! The runtime itself is out of scope; it appears here only as the narrow
//! [`AgentRuntime`] trait it implements for us (settings lookup, optional
//! persona) and the [`ModelProvider`] trait we implement for it. Providers
//! register under [`ModelClass`] capability tags and the runtime routes each
//! model invocation to a provider registered for that tag.

use crate::error::Result;
use crate::llm::profile::ModelProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// What the host runtime supplies to a provider.
pub trait AgentRuntime: Send + Sync {
    /// Look up a named setting from the runtime's settings store.
    fn setting(&self, key: &str) -> Option<String>;

    /// Persona text to use as the system prompt, when the runtime manages one.
    fn persona(&self) -> Option<String> {
        None
    }
}

/// Settings-only runtime backing for tests and demos.
impl AgentRuntime for HashMap<String, String> {
    fn setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Capability tag a provider registers under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelClass {
    TextSmall,
    TextLarge,
    TextEmbedding,
}

impl ModelClass {
    /// The generation profile behind a text tag; `None` for embedding.
    pub fn profile(&self) -> Option<ModelProfile> {
        match self {
            ModelClass::TextSmall => Some(ModelProfile::Small),
            ModelClass::TextLarge => Some(ModelProfile::Large),
            ModelClass::TextEmbedding => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelClass::TextSmall => "TEXT_SMALL",
            ModelClass::TextLarge => "TEXT_LARGE",
            ModelClass::TextEmbedding => "TEXT_EMBEDDING",
        }
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call parameters the runtime hands to a text generation invocation.
///
/// Accepts both snake_case and camelCase field names so parameter objects
/// produced by other agent stacks deserialize directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateTextParams {
    pub prompt: String,
    #[serde(default, alias = "maxTokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerateTextParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Abstract interface a model provider exposes to the host runtime.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name used at registration time.
    fn name(&self) -> &str;

    /// Capability tags this provider serves.
    fn model_classes(&self) -> &[ModelClass];

    /// Generate text for a prompt under the given capability tag.
    async fn generate_text(
        &self,
        runtime: &dyn AgentRuntime,
        class: ModelClass,
        params: &GenerateTextParams,
    ) -> Result<String>;

    /// Calculate an embedding vector for a runtime-supplied input value.
    fn embed(&self, input: &Value) -> Vec<f32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_class_serializes_as_tag() {
        assert_eq!(
            serde_json::to_string(&ModelClass::TextSmall).unwrap(),
            "\"TEXT_SMALL\""
        );
        assert_eq!(
            serde_json::to_string(&ModelClass::TextEmbedding).unwrap(),
            "\"TEXT_EMBEDDING\""
        );

        let parsed: ModelClass = serde_json::from_str("\"TEXT_LARGE\"").unwrap();
        assert_eq!(parsed, ModelClass::TextLarge);
    }

    #[test]
    fn test_model_class_profiles() {
        assert_eq!(ModelClass::TextSmall.profile(), Some(ModelProfile::Small));
        assert_eq!(ModelClass::TextLarge.profile(), Some(ModelProfile::Large));
        assert_eq!(ModelClass::TextEmbedding.profile(), None);
    }

    #[test]
    fn test_model_class_display() {
        assert_eq!(ModelClass::TextLarge.to_string(), "TEXT_LARGE");
    }

    #[test]
    fn test_generate_text_params_accepts_camel_case() {
        let params: GenerateTextParams =
            serde_json::from_str(r#"{"prompt": "Hi", "maxTokens": 64, "temperature": 0.3}"#)
                .unwrap();

        assert_eq!(params.prompt, "Hi");
        assert_eq!(params.max_tokens, Some(64));
        assert_eq!(params.temperature, Some(0.3));
    }

    #[test]
    fn test_generate_text_params_accepts_snake_case() {
        let params: GenerateTextParams =
            serde_json::from_str(r#"{"prompt": "Hi", "max_tokens": 64}"#).unwrap();

        assert_eq!(params.max_tokens, Some(64));
        assert_eq!(params.temperature, None);
    }

    #[test]
    fn test_hash_map_runtime_settings() {
        let mut settings = HashMap::new();
        settings.insert("GATEWAY_URL".to_string(), "http://localhost".to_string());

        let runtime: &dyn AgentRuntime = &settings;
        assert_eq!(
            runtime.setting("GATEWAY_URL").as_deref(),
            Some("http://localhost")
        );
        assert_eq!(runtime.setting("MISSING"), None);
        assert_eq!(runtime.persona(), None);
    }
}
