//! Retry-storm scenario: a 2% error rate tempts the operator into
//! turning retries into a second traffic source.

use crate::action::{InstinctAction, TransitionResult};
use crate::metrics::MetricSnapshot;
use crate::scenario::{FailureShape, ScenarioKey, ScenarioSpec};

pub(super) fn spec() -> ScenarioSpec {
    ScenarioSpec {
        key: ScenarioKey::RetryStorm,
        shape: FailureShape::LoadAmplification,
        initial: MetricSnapshot::new(55.0, 2.0, 18.0, 90.0, 260.0, 78.0),
        prompt_title: "The system starts returning 500s for ~2% of requests. What do you do?",
        prompt_body: "A small downstream hiccup appears. Nothing is fully down (yet). Your next \
                      move determines whether this stays small or turns into self-inflicted load.",
        diagram: "Client → API → Worker Pool → DB",
        actions: [
            InstinctAction::new("retry_harder", "Retry failed requests", retry_harder),
            InstinctAction::new("increase_timeouts", "Increase timeouts", increase_timeouts),
            InstinctAction::new("scale_everything", "Scale all services", scale_everything),
            InstinctAction::new(
                "retry_budget",
                "Introduce retry limits + backoff",
                retry_budget,
            ),
        ],
    }
}

fn retry_harder(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: m.incoming_load + 25.0,
            error_rate: m.error_rate + 10.0,
            queue_depth: m.queue_depth + 22.0,
            p50_ms: m.p50_ms + 60.0,
            p99_ms: m.p99_ms + 1_400.0,
            healthy_capacity: m.healthy_capacity - 18.0,
        },
        headline: "Retries became new traffic.".to_string(),
        narrative: "You turned a 2% failure into extra QPS. Retries stack on top of baseline \
                    load, saturate workers, and push p99 into seconds. The system is now failing \
                    because it’s trying to heal itself."
            .to_string(),
        reveal: Some("Retry Storm (Load Amplification)".to_string()),
    }
}

fn increase_timeouts(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            error_rate: m.error_rate + 4.0,
            queue_depth: m.queue_depth + 18.0,
            p50_ms: m.p50_ms + 80.0,
            p99_ms: m.p99_ms + 1_800.0,
            healthy_capacity: m.healthy_capacity - 10.0,
            ..*m
        },
        headline: "You hid the failure by waiting longer.".to_string(),
        narrative: "Longer timeouts keep work in-flight. Threads stay occupied, queues deepen, \
                    and latency balloons. You didn’t reduce load—so the system has less room to \
                    recover."
            .to_string(),
        reveal: Some("Retry/Timeout Amplification (Load Amplification family)".to_string()),
    }
}

fn scale_everything(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            healthy_capacity: m.healthy_capacity + 8.0,
            error_rate: m.error_rate + 3.0,
            queue_depth: m.queue_depth + 10.0,
            p99_ms: m.p99_ms + 700.0,
            ..*m
        },
        headline: "You added capacity… but also fed the hotspot.".to_string(),
        narrative: "Scaling can help, but if the bottleneck is downstream (DB, dependency, \
                    shared pool), you often accelerate collapse by allowing more concurrent work \
                    to pile into the constrained layer."
            .to_string(),
        reveal: Some("Load Amplification risk (capacity without load control)".to_string()),
    }
}

fn retry_budget(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    // Recovery floors tighter than the global clamp: part of the heuristic.
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: (m.incoming_load - 8.0).max(0.0),
            error_rate: (m.error_rate - 1.0).max(0.0),
            queue_depth: (m.queue_depth - 8.0).max(0.0),
            p50_ms: (m.p50_ms - 10.0).max(40.0),
            p99_ms: (m.p99_ms - 60.0).max(120.0),
            healthy_capacity: (m.healthy_capacity + 6.0).min(100.0),
        },
        headline: "You bounded the blast radius.".to_string(),
        narrative: "Backoff + budgets stop retries from becoming a second traffic source. \
                    Failures are now contained, and the system has space to recover without \
                    self-inflicted QPS spikes."
            .to_string(),
        reveal: Some("Prevented: Retry Storm (by controlling retry load)".to_string()),
    }
}
