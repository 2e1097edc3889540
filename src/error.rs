//! Error types and result alias for the Wren crate.
//!
//! This module defines the core error type [`WrenError`] and the [`Result`] type alias
//! used throughout the crate. Failures never trigger internal retries; every error
//! aborts the call it belongs to and propagates to the caller, which owns any retry
//! policy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WrenError {
    /// A required setting could not be resolved from any configuration source.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// The gateway answered with a non-success HTTP status.
    #[error("gateway request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The gateway answered 2xx but the body was not in the expected shape.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WrenError>;
