//! Scenario specifications.
//!
//! A scenario is a fixed bundle of initial metrics, four instinct actions,
//! and prompt/diagram text, keyed by [`ScenarioKey`]. The three bundles are
//! constants in everything but representation: [`ScenarioSpec::get`] builds
//! them fresh and nothing mutates them afterwards.
//!
//! One file per scenario, same as one directory per simulation elsewhere:
//!
//! | key | teaches | module |
//! |-----|---------|--------|
//! | `retry_storm` | load amplification | [`retry_storm`] |
//! | `backpressure` | backpressure collapse | [`backpressure`] |
//! | `resource_exhaustion` | resource exhaustion | [`resource_exhaustion`] |

mod backpressure;
mod resource_exhaustion;
mod retry_storm;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::InstinctAction;
use crate::error::LabError;
use crate::metrics::MetricSnapshot;

/// Number of instinct actions in every scenario.
pub const ACTIONS_PER_SCENARIO: usize = 4;

/// The three classic failure shapes this lab teaches.
///
/// The canonical labels are shared between scenario specs and the symptom
/// quiz so reveal labels and quiz answers cross-reference byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureShape {
    /// Retries (or equivalents) turn a partial failure into extra load.
    LoadAmplification,
    /// Unbounded buffering stores pressure until the system partially hangs.
    BackpressureCollapse,
    /// A hard resource cap is hit; relief without ingress control relapses.
    ResourceExhaustion,
}

impl FailureShape {
    /// Canonical human-readable label for this shape.
    pub const fn label(&self) -> &'static str {
        match self {
            FailureShape::LoadAmplification => "Retry storm / load amplification",
            FailureShape::BackpressureCollapse => "Backpressure collapse",
            FailureShape::ResourceExhaustion => "Resource exhaustion",
        }
    }
}

impl std::fmt::Display for FailureShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of one of the three fixed scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKey {
    /// A small error rate tempts the operator into retry amplification.
    RetryStorm,
    /// A slow downstream turns intake into stored pressure.
    Backpressure,
    /// An exhausted connection pool punishes capacity-only fixes.
    ResourceExhaustion,
}

impl ScenarioKey {
    /// All defined scenario keys, in presentation order.
    pub const ALL: [ScenarioKey; 3] = [
        ScenarioKey::RetryStorm,
        ScenarioKey::Backpressure,
        ScenarioKey::ResourceExhaustion,
    ];

    /// Wire name of this key (`retry_storm`, `backpressure`,
    /// `resource_exhaustion`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScenarioKey::RetryStorm => "retry_storm",
            ScenarioKey::Backpressure => "backpressure",
            ScenarioKey::ResourceExhaustion => "resource_exhaustion",
        }
    }
}

impl std::fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKey {
    type Err = LabError;

    /// Parse a wire name.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::UnknownScenario`] for anything outside the three
    /// defined keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retry_storm" => Ok(ScenarioKey::RetryStorm),
            "backpressure" => Ok(ScenarioKey::Backpressure),
            "resource_exhaustion" => Ok(ScenarioKey::ResourceExhaustion),
            other => Err(LabError::UnknownScenario(other.to_string())),
        }
    }
}

/// A complete scenario: initial metrics, the closed action set, and the
/// static prompt/diagram text shown to the user.
#[derive(Debug, Clone)]
pub struct ScenarioSpec {
    /// Which scenario this is.
    pub key: ScenarioKey,
    /// The failure shape this scenario illustrates.
    pub shape: FailureShape,
    /// Metrics a fresh session starts from. Always in-domain.
    pub initial: MetricSnapshot,
    /// The situation, as a question to the operator.
    pub prompt_title: &'static str,
    /// Context paragraph under the title.
    pub prompt_body: &'static str,
    /// Fixed-width topology sketch.
    pub diagram: &'static str,
    /// Exactly four instinct actions, ids unique within the scenario.
    pub actions: [InstinctAction; ACTIONS_PER_SCENARIO],
}

impl ScenarioSpec {
    /// The spec for the given key.
    pub fn get(key: ScenarioKey) -> Self {
        match key {
            ScenarioKey::RetryStorm => retry_storm::spec(),
            ScenarioKey::Backpressure => backpressure::spec(),
            ScenarioKey::ResourceExhaustion => resource_exhaustion::spec(),
        }
    }

    /// Look up an action by id within this scenario's closed set.
    pub fn action(&self, id: &str) -> Option<&InstinctAction> {
        self.actions.iter().find(|a| a.id == id)
    }
}
