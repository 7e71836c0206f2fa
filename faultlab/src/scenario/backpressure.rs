//! Backpressure scenario: a downstream slowdown forces the operator to
//! choose where the pressure goes.

use crate::action::{InstinctAction, TransitionResult};
use crate::metrics::MetricSnapshot;
use crate::scenario::{FailureShape, ScenarioKey, ScenarioSpec};

pub(super) fn spec() -> ScenarioSpec {
    ScenarioSpec {
        key: ScenarioKey::Backpressure,
        shape: FailureShape::BackpressureCollapse,
        initial: MetricSnapshot::new(60.0, 1.0, 35.0, 110.0, 420.0, 70.0),
        prompt_title: "A downstream service slows down ~3×. Requests start piling up. What do \
                       you do?",
        prompt_body: "Nothing is “down.” But throughput dropped. If upstream keeps pushing at \
                      the same rate, pressure has to go somewhere.",
        diagram: "Client → API → Queue → Workers → Provider\n                         ↓\n                    slower x3",
        actions: [
            InstinctAction::new(
                "queue_everything",
                "Queue requests if workers can't process fast enough",
                queue_everything,
            ),
            InstinctAction::new("add_workers", "Add workers to API", add_workers),
            InstinctAction::new(
                "apply_backpressure",
                "Apply backpressure (shed / reject)",
                apply_backpressure,
            ),
            InstinctAction::new("pause_upstream", "Pause upstream temporarily", pause_upstream),
        ],
    }
}

fn queue_everything(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            queue_depth: m.queue_depth + 35.0,
            p99_ms: m.p99_ms + 1_800.0,
            p50_ms: m.p50_ms + 200.0,
            error_rate: m.error_rate + 2.0,
            healthy_capacity: m.healthy_capacity - 12.0,
            ..*m
        },
        headline: "You stored pressure as space.".to_string(),
        narrative: "Queue depth climbs and becomes a memory/time bomb. Even if the downstream \
                    recovers, draining the backlog takes a long time—so users experience a long \
                    tail of slowness after the ‘fix.’"
            .to_string(),
        reveal: Some("Backpressure Collapse".to_string()),
    }
}

fn add_workers(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            queue_depth: m.queue_depth + 18.0,
            incoming_load: m.incoming_load + 8.0,
            p99_ms: m.p99_ms + 1_200.0,
            healthy_capacity: m.healthy_capacity - 20.0,
            ..*m
        },
        headline: "You amplified concurrency into the bottleneck.".to_string(),
        narrative: "More workers increase in-flight requests against a slower downstream. \
                    Throughput doesn’t improve much, but contention grows. The system feels \
                    ‘busier’ while making less progress."
            .to_string(),
        reveal: Some("Backpressure Collapse risk (hidden pressure + concurrency)".to_string()),
    }
}

fn apply_backpressure(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: (m.incoming_load - 15.0).max(0.0),
            error_rate: m.error_rate + 2.0,
            queue_depth: (m.queue_depth - 12.0).max(0.0),
            p50_ms: (m.p50_ms - 20.0).max(60.0),
            p99_ms: (m.p99_ms - 120.0).max(150.0),
            healthy_capacity: (m.healthy_capacity + 10.0).min(100.0),
        },
        headline: "You preserved the system’s ability to breathe.".to_string(),
        narrative: "Shedding load is painful but stabilizing. You trade some errors for bounded \
                    latency and avoid creating a backlog that will haunt you after recovery."
            .to_string(),
        reveal: Some("Prevented: Backpressure Collapse (by rejecting work)".to_string()),
    }
}

fn pause_upstream(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: (m.incoming_load - 22.0).max(0.0),
            queue_depth: (m.queue_depth - 20.0).max(0.0),
            p99_ms: (m.p99_ms - 250.0).max(160.0),
            healthy_capacity: (m.healthy_capacity + 8.0).min(100.0),
            ..*m
        },
        headline: "You stopped the pile-up.".to_string(),
        narrative: "Temporarily pausing upstream gives the slow component time to catch up. The \
                    main win is preventing queues and threads from filling until everything \
                    becomes a partial hang."
            .to_string(),
        reveal: Some("Prevented: Backpressure Collapse (by stopping intake)".to_string()),
    }
}
