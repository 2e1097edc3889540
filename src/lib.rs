pub mod character;
pub mod error;
pub mod llm;
pub mod plugin;
pub mod runtime;

pub use error::{Result, WrenError};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::character::{wren, Character, CharacterStyle, MessageExample};
    pub use crate::error::{Result, WrenError};
    pub use crate::llm::{
        embedding_text, placeholder_embedding, ChatMessage, GatewayConfig, GenerationOptions,
        InferenceGateway, MessageRole, ModelProfile, EMBEDDING_DIMENSIONS,
    };
    pub use crate::plugin::GatewayPlugin;
    pub use crate::runtime::{AgentRuntime, GenerateTextParams, ModelClass, ModelProvider};
}
