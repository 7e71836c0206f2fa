//! Resource-exhaustion scenario: a maxed-out DB connection pool, where
//! every capacity-only fix relapses.
//!
//! `restart` is the one history-sensitive transition in the whole library:
//! the first action of a session clears the stuck work, any later restart
//! relapses. The threshold is "has at least one prior action been applied",
//! i.e. `step >= 1`.

use crate::action::{InstinctAction, TransitionResult};
use crate::metrics::MetricSnapshot;
use crate::scenario::{FailureShape, ScenarioKey, ScenarioSpec};

pub(super) fn spec() -> ScenarioSpec {
    ScenarioSpec {
        key: ScenarioKey::ResourceExhaustion,
        shape: FailureShape::ResourceExhaustion,
        initial: MetricSnapshot::new(65.0, 3.0, 40.0, 140.0, 900.0, 55.0),
        prompt_title: "DB connection pool is exhausted. Some requests hang. What do you do?",
        prompt_body: "The system isn’t fully dead—it’s stuck. Work is in-flight, but progress \
                      is limited because a hard resource cap has been hit.",
        diagram: "API → Worker Pool → DB\n  (threads)    (conn pool maxed)",
        actions: [
            InstinctAction::new(
                "increase_max_conn",
                "Increase max connections to DB",
                increase_max_conn,
            ),
            InstinctAction::new(
                "add_instances",
                "Add instances to worker pool",
                add_instances,
            ),
            InstinctAction::new("restart", "Restart service", restart),
            InstinctAction::new(
                "reduce_concurrency",
                "Reduce concurrency of worker pool / shed load",
                reduce_concurrency,
            ),
        ],
    }
}

fn increase_max_conn(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            healthy_capacity: m.healthy_capacity + 6.0,
            p99_ms: m.p99_ms + 600.0,
            error_rate: m.error_rate + 4.0,
            queue_depth: m.queue_depth + 10.0,
            ..*m
        },
        headline: "You raised the ceiling… and worsened contention.".to_string(),
        narrative: "More DB connections can turn a limit into a thrash. If the DB is the \
                    bottleneck, higher concurrency can reduce per-query throughput and increase \
                    tail latency."
            .to_string(),
        reveal: Some("Resource Exhaustion (hard limits + contention)".to_string()),
    }
}

fn add_instances(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: m.incoming_load + 10.0,
            p99_ms: m.p99_ms + 800.0,
            queue_depth: m.queue_depth + 12.0,
            healthy_capacity: m.healthy_capacity - 8.0,
            ..*m
        },
        headline: "You increased concurrency into the same cap.".to_string(),
        narrative: "Adding instances can increase the number of threads trying to acquire the \
                    same scarce resource. If the shared bottleneck is the DB pool, you can \
                    accelerate saturation."
            .to_string(),
        reveal: Some(
            "Resource Exhaustion risk (capacity added without ingress control)".to_string(),
        ),
    }
}

fn restart(m: &MetricSnapshot, step: u32) -> TransitionResult {
    // Relapse once any prior action has been applied this session.
    let relapses = step >= 1;
    let next = if relapses {
        MetricSnapshot {
            error_rate: m.error_rate + 6.0,
            queue_depth: m.queue_depth + 18.0,
            p99_ms: m.p99_ms + 1_200.0,
            healthy_capacity: m.healthy_capacity - 10.0,
            ..*m
        }
    } else {
        MetricSnapshot {
            error_rate: (m.error_rate - 2.0).max(0.0),
            queue_depth: (m.queue_depth - 25.0).max(0.0),
            p99_ms: (m.p99_ms - 500.0).max(250.0),
            healthy_capacity: (m.healthy_capacity + 10.0).min(100.0),
            ..*m
        }
    };

    TransitionResult {
        next,
        headline: if relapses {
            "It worked…briefly. Then it relapsed.".to_string()
        } else {
            "You cleared the stuck work—temporarily.".to_string()
        },
        narrative: if relapses {
            "Without reducing intake or concurrency, the same load pattern reappears and the \
             pool exhausts again. This is the classic fast-relapse signature."
                .to_string()
        } else {
            "Restarts can drain in-flight requests and free resources. But unless you control \
             load, the same pressure rebuilds."
                .to_string()
        },
        reveal: Some("Resource Exhaustion (fast relapse unless ingress is controlled)".to_string()),
    }
}

fn reduce_concurrency(m: &MetricSnapshot, _step: u32) -> TransitionResult {
    TransitionResult {
        next: MetricSnapshot {
            incoming_load: (m.incoming_load - 18.0).max(0.0),
            queue_depth: (m.queue_depth - 18.0).max(0.0),
            error_rate: (m.error_rate - 1.0).max(0.0),
            p50_ms: (m.p50_ms - 40.0).max(70.0),
            p99_ms: (m.p99_ms - 350.0).max(180.0),
            healthy_capacity: (m.healthy_capacity + 14.0).min(100.0),
        },
        headline: "You created headroom so the system can drain.".to_string(),
        narrative: "Reducing concurrency lowers resource contention. Combined with load \
                    shedding, it prevents the system from immediately re-exhausting the resource \
                    while it recovers."
            .to_string(),
        reveal: Some(
            "Prevented: Resource Exhaustion (by controlling ingress and concurrency)".to_string(),
        ),
    }
}
