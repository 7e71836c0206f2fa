//! # Faultlab
//!
//! A deterministic, discrete-step failure-mode lab for teaching the
//! dynamics of three classic distributed-systems failure shapes: retry
//! storms (load amplification), backpressure collapse, and resource
//! exhaustion.
//!
//! The caller picks a scenario, then repeatedly applies one of four
//! "instinct" actions -- plausible operator responses of very different
//! effectiveness. Each action is a pure function from the current metric
//! snapshot (and the step count) to a new snapshot plus a narrative; the
//! first action that carries a reveal label names the failure shape being
//! illustrated. Everything is synchronous and in-process, with no UI of
//! its own -- a presentation layer is an external collaborator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     LabSession                           │
//! │   current snapshot · step counter · log · reveal flag    │
//! │   apply(action_id) / reset()                             │
//! ├───────────────────────────┬──────────────────────────────┤
//! │  ScenarioSpec (×3, fixed) │  MetricSnapshot + clamp      │
//! │  • initial snapshot       │  • six bounded f64 signals   │
//! │  • 4 InstinctActions      │  • single enforcement point  │
//! │  • prompt/diagram text    │    for every transition      │
//! ├───────────────────────────┴──────────────────────────────┤
//! │  SymptomQuiz: independent symptom → shape matcher        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```
//! use faultlab::{LabSession, ScenarioKey};
//!
//! let mut session = LabSession::new(ScenarioKey::RetryStorm);
//! let entry = session.apply("retry_harder").expect("known action");
//! assert_eq!(entry.result.headline, "Retries became new traffic.");
//! assert!(session.revealed());
//!
//! session.reset();
//! assert_eq!(session.step(), 0);
//! ```
//!
//! ## Guarantees
//!
//! - Every snapshot observable through a session is in-domain (the clamp
//!   policy runs on every transition output before it is committed).
//! - The step counter increases by exactly 1 per applied action; only
//!   `reset` takes it back to 0.
//! - The reveal flag is monotonic until the next `reset`.
//! - Applying an unknown action id changes nothing.
//! - Identical action sequences from fresh sessions produce identical
//!   trajectories -- there is no hidden state and no randomness.

#![deny(missing_docs)]

pub mod action;
pub mod error;
pub mod metrics;
pub mod quiz;
pub mod report;
pub mod scenario;
pub mod session;

pub use action::{InstinctAction, Transition, TransitionResult};
pub use error::LabError;
pub use metrics::MetricSnapshot;
pub use quiz::{QUESTIONS, QuizQuestion, SymptomQuiz};
pub use report::SessionReport;
pub use scenario::{ACTIONS_PER_SCENARIO, FailureShape, ScenarioKey, ScenarioSpec};
pub use session::{LabSession, LogEntry};
