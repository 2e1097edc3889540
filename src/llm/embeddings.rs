//! Placeholder embedding generation.
//!
//! The gateway protocol has no embedding endpoint, so the embedding capability
//! is served locally by a deterministic stand-in. The vectors carry no semantic
//! meaning; they exist so the host runtime's memory plumbing has something of
//! the right shape to store.

use serde_json::Value;

/// Dimensionality of every vector this module produces.
pub const EMBEDDING_DIMENSIONS: usize = 384;

/// Produce the placeholder vector for `text`.
///
/// Absent, empty, or whitespace-only input yields the all-zero vector. Otherwise
/// each UTF-16 code unit of the text contributes `unit / 65535` at index
/// `position % 384`. Positions count code units, not chars, so vectors stay
/// comparable with ones produced under `charCodeAt`-style indexing.
pub fn placeholder_embedding(text: Option<&str>) -> Vec<f32> {
    let mut vector = vec![0.0f32; EMBEDDING_DIMENSIONS];

    let Some(text) = text else {
        return vector;
    };
    if text.trim().is_empty() {
        return vector;
    }

    for (i, unit) in text.encode_utf16().enumerate() {
        vector[i % EMBEDDING_DIMENSIONS] += f32::from(unit) / 65535.0;
    }

    vector
}

/// Extract the usable text from a host-supplied embedding input.
///
/// Hosts pass either a bare string, an object with a `text` field, or nothing
/// at all (some runtimes probe the embedding path with `null` at startup).
/// Anything without a string `text` is treated as absent.
pub fn embedding_text(input: &Value) -> Option<&str> {
    match input {
        Value::String(text) => Some(text),
        Value::Object(map) => map.get("text").and_then(Value::as_str),
        _ => None,
    }
}
