//! Metric snapshots and the clamp policy.
//!
//! A [`MetricSnapshot`] is an immutable record of six bounded signals
//! describing simulated service health. Transitions produce arbitrary
//! (possibly out-of-domain) snapshots; [`MetricSnapshot::clamp`] is the
//! single enforcement point that brings every field back into its domain
//! before the session commits it.
//!
//! ## Signal domains
//!
//! | field | domain | meaning |
//! |-------|--------|---------|
//! | `incoming_load` | 0–100 | offered request rate, relative units |
//! | `error_rate` | 0–100 | fraction of requests failing |
//! | `queue_depth` | 0–100 | relative backlog size |
//! | `p50_ms` | 20–5000 | median latency in milliseconds |
//! | `p99_ms` | 50–20000 | tail latency in milliseconds |
//! | `healthy_capacity` | 0–100 | capacity not consumed by contention/failure |
//!
//! The six fields are clamped independently; nothing renormalizes them
//! against each other. Correlations between signals exist only in the
//! transition heuristics themselves.

use serde::{Deserialize, Serialize};

/// Domain of `incoming_load`, `error_rate`, `queue_depth` and
/// `healthy_capacity` (relative percentage units).
pub const PERCENT_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Domain of `p50_ms` (median latency, milliseconds).
pub const P50_DOMAIN: (f64, f64) = (20.0, 5_000.0);

/// Domain of `p99_ms` (tail latency, milliseconds).
pub const P99_DOMAIN: (f64, f64) = (50.0, 20_000.0);

/// One point-in-time reading of the six simulated health signals.
///
/// Snapshots are plain values: transitions take the current snapshot by
/// reference and return a new one, and the session owns the only mutable
/// copy. Every snapshot observable through a session is in-domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Offered request rate, relative units (0–100).
    pub incoming_load: f64,
    /// Fraction of requests failing (0–100).
    pub error_rate: f64,
    /// Relative backlog size (0–100).
    pub queue_depth: f64,
    /// Median latency in milliseconds (20–5000).
    pub p50_ms: f64,
    /// Tail latency in milliseconds (50–20000).
    pub p99_ms: f64,
    /// Fraction of capacity not consumed by contention or failure (0–100).
    pub healthy_capacity: f64,
}

impl MetricSnapshot {
    /// Create a snapshot with explicit values.
    ///
    /// The values are taken as-is; call [`clamp`](Self::clamp) to force
    /// them into domain.
    pub const fn new(
        incoming_load: f64,
        error_rate: f64,
        queue_depth: f64,
        p50_ms: f64,
        p99_ms: f64,
        healthy_capacity: f64,
    ) -> Self {
        Self {
            incoming_load,
            error_rate,
            queue_depth,
            p50_ms,
            p99_ms,
            healthy_capacity,
        }
    }

    /// Clamp every field independently into its declared domain.
    ///
    /// Total and idempotent: out-of-range values saturate at the domain
    /// edge, and clamping an already-clamped snapshot is a no-op.
    pub fn clamp(&self) -> Self {
        Self {
            incoming_load: clamp(self.incoming_load, PERCENT_DOMAIN),
            error_rate: clamp(self.error_rate, PERCENT_DOMAIN),
            queue_depth: clamp(self.queue_depth, PERCENT_DOMAIN),
            p50_ms: clamp(self.p50_ms, P50_DOMAIN),
            p99_ms: clamp(self.p99_ms, P99_DOMAIN),
            healthy_capacity: clamp(self.healthy_capacity, PERCENT_DOMAIN),
        }
    }

    /// Check that every field already lies within its domain.
    pub fn is_in_domain(&self) -> bool {
        *self == self.clamp()
    }
}

impl std::fmt::Display for MetricSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "load={:.0} errors={:.0} queue={:.0} p50={:.0}ms p99={:.0}ms capacity={:.0}",
            self.incoming_load,
            self.error_rate,
            self.queue_depth,
            self.p50_ms,
            self.p99_ms,
            self.healthy_capacity,
        )
    }
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.min(hi).max(lo)
}
