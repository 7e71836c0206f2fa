//! Instinct actions and their transition results.
//!
//! An [`InstinctAction`] is one plausible operator response to a degrading
//! system: a stable id, a display label, and a pure transition function.
//! Actions never touch session state; the session hands them the current
//! snapshot and the zero-based count of actions already applied, and they
//! hand back a [`TransitionResult`].

use serde::{Deserialize, Serialize};

use crate::metrics::MetricSnapshot;

/// A pure transition: `(current snapshot, steps already applied) -> result`.
///
/// Plain fn pointers keep actions immutable static data. The step count
/// exists for the one history-sensitive transition in the library
/// (resource-exhaustion `restart`); every other transition ignores it.
pub type Transition = fn(&MetricSnapshot, u32) -> TransitionResult;

/// What an applied action produced: the unclamped next snapshot plus the
/// narrative the caller surfaces to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult {
    /// The proposed next snapshot, before the clamp policy runs.
    pub next: MetricSnapshot,
    /// One-line outcome summary.
    pub headline: String,
    /// Multi-sentence explanation of what just happened and why.
    pub narrative: String,
    /// Canonical name of the failure shape illustrated (or avoided),
    /// present on transitions that teach the pattern.
    pub reveal: Option<String>,
}

/// A named operator instinct with its transition behavior.
///
/// Ids are unique within a scenario. The action set of a scenario is closed:
/// exactly four instincts, fixed at construction, never extended at runtime.
#[derive(Debug, Clone, Copy)]
pub struct InstinctAction {
    /// Stable identifier used by callers to apply this action.
    pub id: &'static str,
    /// Human-readable button/menu label.
    pub label: &'static str,
    /// The transition function.
    pub transition: Transition,
}

impl InstinctAction {
    /// Create an action. Thin constructor so scenario data reads as a table.
    pub const fn new(id: &'static str, label: &'static str, transition: Transition) -> Self {
        Self {
            id,
            label,
            transition,
        }
    }
}
