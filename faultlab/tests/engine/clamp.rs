//! Clamp policy: totality and idempotence over hostile inputs.

use faultlab::metrics::{MetricSnapshot, P50_DOMAIN, P99_DOMAIN, PERCENT_DOMAIN};

/// A spread of snapshots from deep out-of-domain to exactly on the edges.
fn hostile_snapshots() -> Vec<MetricSnapshot> {
    vec![
        MetricSnapshot::new(-1e9, -1e9, -1e9, -1e9, -1e9, -1e9),
        MetricSnapshot::new(1e9, 1e9, 1e9, 1e9, 1e9, 1e9),
        MetricSnapshot::new(0.0, 0.0, 0.0, 20.0, 50.0, 0.0),
        MetricSnapshot::new(100.0, 100.0, 100.0, 5_000.0, 20_000.0, 100.0),
        MetricSnapshot::new(-0.0001, 100.0001, 50.0, 19.999, 20_000.001, 99.999),
        MetricSnapshot::new(55.0, 2.0, 18.0, 90.0, 260.0, 78.0),
        MetricSnapshot::new(101.0, -5.0, 42.0, 6_000.0, 49.0, 55.5),
    ]
}

#[test]
fn test_clamp_is_total() {
    for snapshot in hostile_snapshots() {
        let clamped = snapshot.clamp();
        for (value, (lo, hi)) in [
            (clamped.incoming_load, PERCENT_DOMAIN),
            (clamped.error_rate, PERCENT_DOMAIN),
            (clamped.queue_depth, PERCENT_DOMAIN),
            (clamped.p50_ms, P50_DOMAIN),
            (clamped.p99_ms, P99_DOMAIN),
            (clamped.healthy_capacity, PERCENT_DOMAIN),
        ] {
            assert!(
                (lo..=hi).contains(&value),
                "field {value} escaped [{lo}, {hi}] for input {snapshot:?}"
            );
        }
    }
}

#[test]
fn test_clamp_is_idempotent() {
    for snapshot in hostile_snapshots() {
        let once = snapshot.clamp();
        assert_eq!(once.clamp(), once, "clamp not idempotent for {snapshot:?}");
    }
}

#[test]
fn test_clamp_never_renormalizes_in_domain_fields() {
    // Only the out-of-domain field moves; neighbors are untouched.
    let snapshot = MetricSnapshot::new(55.0, 2.0, 18.0, 90.0, 260_000.0, 78.0);
    let clamped = snapshot.clamp();
    assert_eq!(clamped.p99_ms, 20_000.0);
    assert_eq!(
        MetricSnapshot { p99_ms: 260.0, ..clamped },
        MetricSnapshot { p99_ms: 260.0, ..snapshot }
    );
}
