//! The lab session: the one stateful piece of the engine.
//!
//! A [`LabSession`] owns the mutable state of a single scenario run: the
//! current snapshot, the step counter, an append-only action log, and the
//! monotonic reveal flag. Sessions are plain values constructed by the
//! caller -- one per active scenario, with no process-wide singleton.
//!
//! `apply` is the single mutation: look the action up in the scenario's
//! closed set, run its pure transition against the current snapshot and
//! step count, clamp the result, and commit. An unknown action id is a
//! deliberate local no-op (the set is closed and caller-controlled), not
//! an error.

use serde::{Deserialize, Serialize};

use crate::action::TransitionResult;
use crate::metrics::MetricSnapshot;
use crate::report::SessionReport;
use crate::scenario::{ScenarioKey, ScenarioSpec};

/// One applied action and what it produced. The log keeps the *unclamped*
/// transition result; the committed snapshot is the clamped form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Id of the action that was applied.
    pub action_id: String,
    /// The transition's full output (headline, narrative, reveal, next).
    pub result: TransitionResult,
}

/// A single interactive run of one scenario.
#[derive(Debug, Clone)]
pub struct LabSession {
    spec: ScenarioSpec,
    current: MetricSnapshot,
    step: u32,
    log: Vec<LogEntry>,
    revealed: bool,
}

impl LabSession {
    /// Start a fresh session for the given scenario: the spec's initial
    /// snapshot, step 0, empty log, nothing revealed.
    pub fn new(key: ScenarioKey) -> Self {
        let spec = ScenarioSpec::get(key);
        let current = spec.initial;
        tracing::debug!(scenario = %key, "session started");
        Self {
            spec,
            current,
            step: 0,
            log: Vec::new(),
            revealed: false,
        }
    }

    /// Apply an instinct action by id.
    ///
    /// Unknown ids leave the session untouched and return `None`. A known
    /// id always applies -- no action is ever rejected for the current
    /// metric values; clamping alone bounds the result. Returns the log
    /// entry that was appended.
    pub fn apply(&mut self, action_id: &str) -> Option<&LogEntry> {
        let Some(action) = self.spec.action(action_id) else {
            tracing::debug!(scenario = %self.spec.key, action = action_id, "ignoring unknown action");
            return None;
        };

        let result = (action.transition)(&self.current, self.step);
        self.current = result.next.clamp();
        self.step += 1;
        if result.reveal.is_some() {
            self.revealed = true;
        }

        tracing::debug!(
            scenario = %self.spec.key,
            action = action_id,
            step = self.step,
            headline = %result.headline,
            "applied action"
        );

        self.log.push(LogEntry {
            action_id: action_id.to_string(),
            result,
        });
        self.log.last()
    }

    /// Restore the session to the scenario's initial state: initial
    /// snapshot, step 0, empty log, reveal flag cleared.
    pub fn reset(&mut self) {
        tracing::debug!(scenario = %self.spec.key, steps = self.step, "session reset");
        self.current = self.spec.initial;
        self.step = 0;
        self.log.clear();
        self.revealed = false;
    }

    /// The scenario this session runs.
    pub fn scenario(&self) -> &ScenarioSpec {
        &self.spec
    }

    /// The current (always in-domain) snapshot.
    pub fn snapshot(&self) -> MetricSnapshot {
        self.current
    }

    /// Number of actions applied since the last reset.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// The full append-only log of applied actions.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The most recent log entry, the one a presentation layer surfaces.
    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.log.last()
    }

    /// Whether any applied action has carried a reveal label. Monotonic:
    /// once set, only [`reset`](Self::reset) clears it.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Summarize the session so far.
    pub fn report(&self) -> SessionReport {
        SessionReport::from_session(self)
    }
}
