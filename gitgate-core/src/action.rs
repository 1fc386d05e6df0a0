//! Push action and step types — one push evaluation and its processor log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One processor's logged outcome within a push evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Name of the processor that produced this step.
    pub step_name: String,
    /// Log lines recorded while the processor ran.
    pub logs: Vec<String>,
    /// Whether the processor flagged an error.
    pub error: bool,
    /// Error message, when `error` is set.
    pub error_message: Option<String>,
}

impl Step {
    /// Create a clean step for the named processor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            step_name: name.into(),
            logs: Vec::new(),
            error: false,
            error_message: None,
        }
    }

    /// Record a log line on this step and emit it as a tracing event.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(step = %self.step_name, "{message}");
        self.logs.push(message);
    }

    /// Mark this step as failed. Only the latest message is retained.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(step = %self.step_name, "step error: {message}");
        self.error = true;
        self.error_message = Some(message);
    }
}

/// One push evaluation travelling through the processor chain.
///
/// The `diff` payload is untrusted input captured off the wire: it may be
/// absent, textual, or any other JSON shape, and processors must validate
/// it rather than assume a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushAction {
    /// Unique id for this evaluation.
    pub id: Uuid,
    /// When the push was intercepted.
    pub timestamp: DateTime<Utc>,
    /// Raw diff of the incoming push, when the proxy captured one.
    pub diff: Option<serde_json::Value>,
    /// Whether later processors should still run. Defaults to true;
    /// a processor may flip it to false to block the push.
    #[serde(rename = "continue", default = "default_continue")]
    pub continue_chain: bool,
    /// Ordered log of processor outcomes.
    pub steps: Vec<Step>,
}

fn default_continue() -> bool {
    true
}

impl PushAction {
    /// Create a fresh action with no diff attached.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            diff: None,
            continue_chain: true,
            steps: Vec::new(),
        }
    }

    /// Create an action carrying the given diff payload.
    pub fn with_diff(diff: serde_json::Value) -> Self {
        Self {
            diff: Some(diff),
            ..Self::new()
        }
    }

    /// Append a processor's step to the ordered log.
    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Whether any recorded step carries an error.
    pub fn has_error(&self) -> bool {
        self.steps.iter().any(|s| s.error)
    }

    /// The most recent step's error message, if any step failed.
    pub fn last_error_message(&self) -> Option<&str> {
        self.steps
            .iter()
            .rev()
            .find(|s| s.error)
            .and_then(|s| s.error_message.as_deref())
    }
}

impl Default for PushAction {
    fn default() -> Self {
        Self::new()
    }
}
