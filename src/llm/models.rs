use serde::{Deserialize, Serialize};

/// Message role in a gateway conversation.
///
/// Requests only ever carry a system instruction followed by the user prompt,
/// so no further roles exist on this wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A single message in the chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Chat-completion request body sent to the gateway.
///
/// Built fresh for every call and discarded after the send. `stream` is
/// always `false`; the adapter has no streaming surface.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

/// Chat-completion response body as the gateway returns it.
///
/// Parsed leniently: unknown fields are ignored and missing fields default,
/// so both `message`-shaped and `delta`-shaped bodies deserialize.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChoiceContent>,
    #[serde(default)]
    pub delta: Option<ChoiceContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceContent {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Extract the generated text from the first choice.
    ///
    /// `message.content` takes priority; `delta.content` is consulted only when
    /// the message path is absent. Returns `None` when neither carries text.
    pub fn text(&self) -> Option<&str> {
        let choice = self.choices.first()?;
        choice
            .message
            .as_ref()
            .and_then(|m| m.content.as_deref())
            .or_else(|| choice.delta.as_ref().and_then(|d| d.content.as_deref()))
    }

    /// Whether the first choice carries `message.content`.
    pub fn has_message_content(&self) -> bool {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_ref())
            .is_some()
    }

    /// Whether the first choice carries `delta.content`.
    pub fn has_delta_content(&self) -> bool {
        self.choices
            .first()
            .and_then(|c| c.delta.as_ref())
            .and_then(|d| d.content.as_ref())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_serialization() {
        assert_eq!(serde_json::to_string(&MessageRole::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_message_role_deserialization() {
        assert_eq!(serde_json::from_str::<MessageRole>("\"system\"").unwrap(), MessageRole::System);
        assert_eq!(serde_json::from_str::<MessageRole>("\"user\"").unwrap(), MessageRole::User);
    }

    #[test]
    fn test_system_message() {
        let msg = ChatMessage::system("You are Wren.");
        assert_eq!(msg.role, MessageRole::System);
        assert_eq!(msg.content, "You are Wren.");
    }

    #[test]
    fn test_user_message() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            max_tokens: 512,
            temperature: 0.6,
            stream: false,
        };

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 512);
        assert!((json["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_completion_message_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hello!"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();

        assert_eq!(completion.text(), Some("Hello!"));
        assert!(completion.has_message_content());
        assert!(!completion.has_delta_content());
    }

    #[test]
    fn test_completion_delta_content() {
        let body = r#"{"choices":[{"delta":{"content":"X"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();

        assert_eq!(completion.text(), Some("X"));
        assert!(!completion.has_message_content());
        assert!(completion.has_delta_content());
    }

    #[test]
    fn test_completion_message_wins_over_delta() {
        let body =
            r#"{"choices":[{"message":{"content":"from message"},"delta":{"content":"from delta"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();

        assert_eq!(completion.text(), Some("from message"));
    }

    #[test]
    fn test_completion_without_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();

        assert_eq!(completion.text(), None);
        assert!(!completion.has_message_content());
        assert!(!completion.has_delta_content());
    }

    #[test]
    fn test_completion_empty_choices() {
        let completion: ChatCompletion = serde_json::from_str("{}").unwrap();

        assert_eq!(completion.text(), None);
    }

    #[test]
    fn test_completion_ignores_unknown_fields() {
        let body = r#"{
            "id": "cmpl-123",
            "object": "chat.completion",
            "usage": {"total_tokens": 17},
            "choices": [{"index": 0, "finish_reason": "stop", "message": {"content": "ok"}}]
        }"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();

        assert_eq!(completion.text(), Some("ok"));
    }
}
