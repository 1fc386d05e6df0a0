//! Processor contract — the capability interface each pipeline stage implements.

use crate::action::PushAction;
use crate::error::ProcessorError;
use async_trait::async_trait;

/// A single policy-enforcement stage in the push pipeline.
///
/// Given an action, produce an updated action: append exactly one step
/// describing the outcome and, when policy demands it, flip
/// [`PushAction::continue_chain`] to false. A processor never removes or
/// rewrites steps recorded by earlier stages, and it never decides whether
/// the chain as a whole keeps running — that aggregation belongs to the
/// orchestrator.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Unique name for this processor; also used as its step name.
    fn name(&self) -> &str;

    /// Evaluate the action and hand it back with this processor's step appended.
    async fn process(&self, action: PushAction) -> Result<PushAction, ProcessorError>;
}
