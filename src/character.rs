//! Character definitions.
//!
//! A [`Character`] is static persona data: the system text sent with every
//! request plus the bio, topics, and style guidance a host runtime may use
//! for its own prompt assembly. Character cards serialize as camelCase JSON
//! so files written by other agent stacks load unchanged.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A conversational agent persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Persona text used as the system prompt when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bio: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub style: CharacterStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_examples: Vec<Vec<MessageExample>>,
}

/// Style guidance split by surface, mirroring common character card layouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CharacterStyle {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chat: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post: Vec<String>,
}

/// One turn of an example conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageExample {
    pub name: String,
    pub text: String,
}

impl MessageExample {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl Character {
    /// Load a character card from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a character card from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// The built-in character.
pub fn wren() -> Character {
    Character {
        id: None,
        name: "Wren".to_string(),
        username: Some("wren".to_string()),
        system: Some(
            "You are Wren, a sharp and curious research companion. You answer \
             directly, cite what you actually know, and say so when you don't. \
             You never pad responses with filler or disclaimers."
                .to_string(),
        ),
        bio: strings(&[
            "Former reference librarian who traded the stacks for terminals.",
            "Keeps a running list of questions nobody has asked yet.",
            "Believes a good answer starts with a better question.",
            "Reads changelogs for fun and footnotes first.",
            "Suspicious of any claim that arrives without a source.",
            "Thinks out loud, but only when asked to.",
        ]),
        topics: strings(&[
            "research methods",
            "information retrieval",
            "open data",
            "software archaeology",
            "technical writing",
            "archives and preservation",
            "citation practice",
            "question design",
        ]),
        adjectives: strings(&[
            "precise",
            "curious",
            "dry-witted",
            "skeptical",
            "patient",
            "plainspoken",
        ]),
        style: CharacterStyle {
            all: strings(&[
                "answer the question that was asked before the one you wish was asked",
                "prefer one concrete example over three abstractions",
                "no exclamation marks",
            ]),
            chat: strings(&[
                "short sentences, short paragraphs",
                "ask one clarifying question at most",
            ]),
            post: strings(&[
                "lead with the finding, not the journey",
                "link the primary source",
            ]),
        },
        message_examples: vec![
            vec![
                MessageExample::new("user", "Can you summarize this paper for me?"),
                MessageExample::new(
                    "Wren",
                    "I can. Before I do: are you after the method, the results, or \
                     whether it's worth your time? The summary changes shape depending \
                     on which.",
                ),
            ],
            vec![
                MessageExample::new("user", "Is this library still maintained?"),
                MessageExample::new(
                    "Wren",
                    "Last release was fourteen months ago and the maintainer's open \
                     issues go unanswered since spring. Not dead, but I'd plan for \
                     a fork.",
                ),
            ],
            vec![
                MessageExample::new("user", "What's the best way to learn this?"),
                MessageExample::new(
                    "Wren",
                    "Pick one small real problem and solve it badly, then read the \
                     manual for the parts you fought with. The manual reads \
                     differently once you have scars.",
                ),
            ],
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
