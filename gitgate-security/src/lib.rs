//! GitGate Security — the secret-scanning push processor.
//!
//! Inspects the textual diff of an incoming push and blocks the push when it
//! contains credential-shaped substrings (API keys, tokens, private-key
//! blocks). The pipeline is:
//!
//! 1. [`diff::parse_diff`] turns the raw unified-diff text into per-file,
//!    per-added-line [`diff::Change`] records.
//! 2. [`scan::scan_for_secrets`] applies every rule in the
//!    [`catalog::PatternCatalog`] to every added line, producing
//!    [`scan::Finding`]s.
//! 3. [`report::format_report`] renders a non-empty finding list into the
//!    block message shown to the pusher.
//! 4. [`processor::SecretsProcessor`] wires the above into the
//!    [`gitgate_core::Processor`] contract.
//!
//! The scan is purely functional over its inputs: no I/O, no shared mutable
//! state, safe to run concurrently across pushes.

pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod processor;
pub mod report;
pub mod scan;

// Re-exports for convenience
pub use catalog::{PatternCatalog, PatternRule, RuleDef, Severity};
pub use config::SecretsConfig;
pub use diff::{Change, parse_diff};
pub use error::ConfigError;
pub use processor::SecretsProcessor;
pub use report::format_report;
pub use scan::{Finding, scan_for_secrets};
