//! Per-scenario transition behavior: the literal retry-storm example, the
//! restart relapse rule, directional quality of every instinct, and the
//! reveal-label vocabulary.

use faultlab::{LabSession, MetricSnapshot, ScenarioKey, ScenarioSpec};

/// Apply one action to a fresh session and return (before, after).
fn one_shot(key: ScenarioKey, action_id: &str) -> (MetricSnapshot, MetricSnapshot) {
    let mut session = LabSession::new(key);
    let before = session.snapshot();
    session
        .apply(action_id)
        .unwrap_or_else(|| panic!("{key} should define {action_id}"));
    (before, session.snapshot())
}

#[test]
fn test_retry_storm_initial_snapshot() {
    let spec = ScenarioSpec::get(ScenarioKey::RetryStorm);
    assert_eq!(
        spec.initial,
        MetricSnapshot::new(55.0, 2.0, 18.0, 90.0, 260.0, 78.0)
    );
}

#[test]
fn test_retry_harder_literal_example() {
    let mut session = LabSession::new(ScenarioKey::RetryStorm);
    let entry = session.apply("retry_harder").expect("known action").clone();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.incoming_load, 80.0);
    assert_eq!(snapshot.error_rate, 12.0);
    assert_eq!(snapshot.queue_depth, 40.0);
    assert_eq!(snapshot.p50_ms, 150.0);
    assert_eq!(snapshot.p99_ms, 1_660.0);
    assert_eq!(snapshot.healthy_capacity, 60.0);

    assert_eq!(
        entry.result.reveal.as_deref(),
        Some("Retry Storm (Load Amplification)")
    );
    assert!(session.revealed());
}

#[test]
fn test_restart_clears_then_relapses() {
    let mut session = LabSession::new(ScenarioKey::ResourceExhaustion);
    let initial = session.snapshot();

    // First action of the session: the restart helps.
    let first = session.apply("restart").expect("known action").clone();
    assert_eq!(first.result.headline, "You cleared the stuck work—temporarily.");
    let after_first = session.snapshot();
    assert!(after_first.queue_depth < initial.queue_depth);
    assert!(after_first.p99_ms < initial.p99_ms);
    assert!(after_first.healthy_capacity > initial.healthy_capacity);

    // Any restart after another action relapses.
    let second = session.apply("restart").expect("known action").clone();
    assert_eq!(second.result.headline, "It worked…briefly. Then it relapsed.");
    let after_second = session.snapshot();
    assert!(after_second.error_rate > after_first.error_rate);
    assert!(after_second.queue_depth > after_first.queue_depth);
    assert!(after_second.p99_ms > after_first.p99_ms);
    assert!(after_second.healthy_capacity < after_first.healthy_capacity);

    // Both branches teach the same shape.
    assert_eq!(first.result.reveal, second.result.reveal);
    assert_eq!(
        first.result.reveal.as_deref(),
        Some("Resource Exhaustion (fast relapse unless ingress is controlled)")
    );
}

#[test]
fn test_restart_relapse_threshold_is_any_prior_action() {
    // The prior action doesn't have to be a restart.
    let mut session = LabSession::new(ScenarioKey::ResourceExhaustion);
    session.apply("increase_max_conn");
    let entry = session.apply("restart").expect("known action");
    assert_eq!(entry.result.headline, "It worked…briefly. Then it relapsed.");

    // And reset re-arms the temporary-relief branch.
    session.reset();
    let entry = session.apply("restart").expect("known action");
    assert_eq!(entry.result.headline, "You cleared the stuck work—temporarily.");
}

#[test]
fn test_bad_instincts_worsen_the_system() {
    // Instincts whose queue depth and tail latency strictly worsen.
    let cases: [(ScenarioKey, &str); 6] = [
        (ScenarioKey::RetryStorm, "retry_harder"),
        (ScenarioKey::RetryStorm, "increase_timeouts"),
        (ScenarioKey::Backpressure, "queue_everything"),
        (ScenarioKey::Backpressure, "add_workers"),
        (ScenarioKey::ResourceExhaustion, "increase_max_conn"),
        (ScenarioKey::ResourceExhaustion, "add_instances"),
    ];
    for (key, id) in cases {
        let (before, after) = one_shot(key, id);
        assert!(after.queue_depth > before.queue_depth, "{key}/{id}: queue");
        assert!(after.p99_ms > before.p99_ms, "{key}/{id}: p99");
    }
}

#[test]
fn test_good_instincts_improve_the_system() {
    let cases: [(ScenarioKey, &str); 4] = [
        (ScenarioKey::RetryStorm, "retry_budget"),
        (ScenarioKey::Backpressure, "apply_backpressure"),
        (ScenarioKey::Backpressure, "pause_upstream"),
        (ScenarioKey::ResourceExhaustion, "reduce_concurrency"),
    ];
    for (key, id) in cases {
        let (before, after) = one_shot(key, id);
        assert!(after.incoming_load < before.incoming_load, "{key}/{id}: load");
        assert!(after.queue_depth < before.queue_depth, "{key}/{id}: queue");
        assert!(after.p99_ms < before.p99_ms, "{key}/{id}: p99");
        assert!(
            after.healthy_capacity > before.healthy_capacity,
            "{key}/{id}: capacity"
        );
    }
}

#[test]
fn test_scaling_trades_capacity_for_contention() {
    // "Scale all services" is the ambiguous instinct: capacity goes up,
    // but so do errors, queue and tail latency.
    let (before, after) = one_shot(ScenarioKey::RetryStorm, "scale_everything");
    assert!(after.healthy_capacity > before.healthy_capacity);
    assert!(after.error_rate > before.error_rate);
    assert!(after.queue_depth > before.queue_depth);
    assert!(after.p99_ms > before.p99_ms);
}

#[test]
fn test_reveal_label_vocabulary() {
    let expected: [(ScenarioKey, [(&str, &str); 4]); 3] = [
        (
            ScenarioKey::RetryStorm,
            [
                ("retry_harder", "Retry Storm (Load Amplification)"),
                (
                    "increase_timeouts",
                    "Retry/Timeout Amplification (Load Amplification family)",
                ),
                (
                    "scale_everything",
                    "Load Amplification risk (capacity without load control)",
                ),
                (
                    "retry_budget",
                    "Prevented: Retry Storm (by controlling retry load)",
                ),
            ],
        ),
        (
            ScenarioKey::Backpressure,
            [
                ("queue_everything", "Backpressure Collapse"),
                (
                    "add_workers",
                    "Backpressure Collapse risk (hidden pressure + concurrency)",
                ),
                (
                    "apply_backpressure",
                    "Prevented: Backpressure Collapse (by rejecting work)",
                ),
                (
                    "pause_upstream",
                    "Prevented: Backpressure Collapse (by stopping intake)",
                ),
            ],
        ),
        (
            ScenarioKey::ResourceExhaustion,
            [
                (
                    "increase_max_conn",
                    "Resource Exhaustion (hard limits + contention)",
                ),
                (
                    "add_instances",
                    "Resource Exhaustion risk (capacity added without ingress control)",
                ),
                (
                    "restart",
                    "Resource Exhaustion (fast relapse unless ingress is controlled)",
                ),
                (
                    "reduce_concurrency",
                    "Prevented: Resource Exhaustion (by controlling ingress and concurrency)",
                ),
            ],
        ),
    ];

    for (key, actions) in expected {
        for (id, label) in actions {
            let mut session = LabSession::new(key);
            let entry = session.apply(id).expect("known action");
            assert_eq!(entry.result.reveal.as_deref(), Some(label), "{key}/{id}");
        }
    }
}

#[test]
fn test_report_first_reveal_matches_first_action() {
    let mut session = LabSession::new(ScenarioKey::Backpressure);
    session.apply("add_workers");
    session.apply("queue_everything");
    assert_eq!(
        session.report().first_reveal(),
        Some("Backpressure Collapse risk (hidden pressure + concurrency)")
    );
}
