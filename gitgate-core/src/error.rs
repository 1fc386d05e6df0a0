//! Error types for pipeline processors.

use thiserror::Error;

/// Errors a processor may surface to the orchestrator.
///
/// Policy outcomes (a blocked push, a malformed diff payload) are *not*
/// errors at this boundary — they are communicated through the action's
/// [`Step`](crate::action::Step) log. This type covers genuine processing
/// failures only.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("processor '{processor}' failed: {message}")]
    Failed { processor: String, message: String },
    #[error("invalid action payload: {0}")]
    InvalidAction(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
