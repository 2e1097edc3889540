pub mod embeddings;
pub mod gateway;
pub mod models;
pub mod profile;

pub use embeddings::{embedding_text, placeholder_embedding, EMBEDDING_DIMENSIONS};
pub use gateway::{GatewayConfig, InferenceGateway};
pub use models::{ChatCompletion, ChatMessage, ChatRequest, MessageRole};
pub use profile::{GenerationOptions, ModelProfile};
