//! Session summaries.
//!
//! A [`SessionReport`] is a detached snapshot of where a session ended up:
//! how far it got, which failure shapes it revealed, and the metric
//! trajectory from the scenario's initial snapshot to the current one.
//! Reports are what the CLI prints and what a host would persist.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::MetricSnapshot;
use crate::scenario::{FailureShape, ScenarioKey};
use crate::session::LabSession;

/// Summary of a session at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Which scenario was run.
    pub scenario: ScenarioKey,
    /// The failure shape the scenario teaches.
    pub shape: FailureShape,
    /// Actions applied since the last reset.
    pub steps: u32,
    /// Whether any action carried a reveal label.
    pub revealed: bool,
    /// Every reveal label in the log, in application order (duplicates kept).
    pub reveal_labels: Vec<String>,
    /// The scenario's starting metrics.
    pub initial: MetricSnapshot,
    /// The committed metrics after the last applied action.
    pub current: MetricSnapshot,
}

impl SessionReport {
    /// Build a report from a live session.
    pub fn from_session(session: &LabSession) -> Self {
        let spec = session.scenario();
        Self {
            scenario: spec.key,
            shape: spec.shape,
            steps: session.step(),
            revealed: session.revealed(),
            reveal_labels: session
                .log()
                .iter()
                .filter_map(|entry| entry.result.reveal.clone())
                .collect(),
            initial: spec.initial,
            current: session.snapshot(),
        }
    }

    /// The first reveal label, if any -- the one a UI shows as
    /// "shape revealed".
    pub fn first_reveal(&self) -> Option<&str> {
        self.reveal_labels.first().map(String::as_str)
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Session Report ===")?;
        writeln!(f, "Scenario: {}", self.scenario)?;
        writeln!(f, "Shape: {}", self.shape)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Initial: {}", self.initial)?;
        writeln!(f, "Current: {}", self.current)?;

        if self.reveal_labels.is_empty() {
            writeln!(f, "Revealed: nothing yet")?;
        } else {
            writeln!(f, "Revealed:")?;
            for label in &self.reveal_labels {
                writeln!(f, "  - {label}")?;
            }
        }

        Ok(())
    }
}
