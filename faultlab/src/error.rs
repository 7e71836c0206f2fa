//! Error types for the failure lab.
//!
//! The taxonomy is deliberately small and closed. Selecting an unknown
//! scenario key is the only surfaced failure; applying an unknown action id
//! is recovered locally as a no-op (the action set is closed and
//! caller-controlled), and the clamp policy absorbs all out-of-range
//! transition math, so no "invalid metric" class exists.

use thiserror::Error;

/// Errors surfaced by lab operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    /// The scenario key is not one of the three defined scenarios.
    #[error("unknown scenario key: {0:?} (expected retry_storm, backpressure or resource_exhaustion)")]
    UnknownScenario(String),
}
