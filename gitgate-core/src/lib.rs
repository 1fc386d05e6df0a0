//! GitGate Core — pipeline primitives shared by every push processor.
//!
//! A push travelling through the proxy is represented as a [`PushAction`].
//! Each policy-enforcement stage implements the [`Processor`] trait: it
//! receives the action, appends exactly one [`Step`] describing its outcome,
//! and hands the action back. Halting the rest of the chain is signalled
//! through [`PushAction::continue_chain`]; aggregation of that flag across
//! the full chain belongs to the orchestrator, never to an individual
//! processor.

pub mod action;
pub mod error;
pub mod processor;

// Re-exports for convenience
pub use action::{PushAction, Step};
pub use error::ProcessorError;
pub use processor::Processor;
