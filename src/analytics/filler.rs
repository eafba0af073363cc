//! Deterministic display-only filler metrics.
//!
//! The dashboard shows a few values the catalog does not record (F1 score,
//! p95 latency, request volume, month-by-month trends). They are drawn from a
//! `StdRng` seeded by the configured seed and a stable hash of the entity
//! key, so the same catalog and seed render the same numbers on every run of
//! a given build. `StdRng` is only reproducible within one `rand` release:
//! upgrading `rand` may shift the simulated values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::analytics::series::Point;
use crate::catalog::{Status, UseCase};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Simulated operational metrics for one use case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillerMetrics {
    /// `None` when the use case has no recorded accuracy.
    pub f1_score: Option<f64>,
    pub p95_latency_ms: u32,
    /// Zero unless the use case is active.
    pub monthly_requests: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct Filler {
    seed: u64,
}

impl Filler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Per-entity stream seed. Independent of platform and `rand` version.
    fn stream_seed(&self, key: &str) -> u64 {
        self.seed ^ fnv1a(key)
    }

    fn rng_for(&self, key: &str) -> StdRng {
        StdRng::seed_from_u64(self.stream_seed(key))
    }

    pub fn metrics(&self, use_case: &UseCase) -> FillerMetrics {
        let mut rng = self.rng_for(&use_case.id);

        let f1_score = (use_case.accuracy > 0.0).then(|| {
            let f1 = use_case.accuracy / 100.0 * rng.gen_range(0.93..0.99);
            (f1 * 1000.0).round() / 1000.0
        });
        let p95_latency_ms = rng.gen_range(20..250);
        let monthly_requests = if use_case.status == Status::Active {
            rng.gen_range(10_000..500_000)
        } else {
            0
        };

        FillerMetrics {
            f1_score,
            p95_latency_ms,
            monthly_requests,
        }
    }

    /// Twelve monthly points ramping towards `target` with ±8% jitter.
    /// The final month is exactly `target`.
    pub fn monthly_trend(&self, key: &str, target: f64) -> Vec<Point> {
        let mut rng = self.rng_for(key);
        let last = MONTHS.len() - 1;
        MONTHS
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let y = if i == last {
                    target
                } else {
                    let ramp = 0.55 + 0.45 * (i as f64 / last as f64);
                    target * ramp * rng.gen_range(0.92..1.08)
                };
                Point::labeled(*month, (y * 10.0).round() / 10.0)
            })
            .collect()
    }
}

/// 64-bit FNV-1a. Unlike `DefaultHasher`, the output is fixed by the algorithm.
fn fnv1a(key: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    key.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn same_seed_same_values() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.use_case("card-fraud-scoring").unwrap();
        let a = Filler::new(7).metrics(entry.use_case);
        let b = Filler::new(7).metrics(entry.use_case);
        assert_eq!(a, b);
    }

    #[test]
    fn f1_is_none_without_accuracy() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.use_case("aml-graph-analytics").unwrap();
        let metrics = Filler::new(42).metrics(entry.use_case);
        assert_eq!(metrics.f1_score, None);
        assert_eq!(metrics.monthly_requests, 0);
    }

    #[test]
    fn f1_stays_below_accuracy() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.use_case("card-fraud-scoring").unwrap();
        let f1 = Filler::new(42).metrics(entry.use_case).f1_score.unwrap();
        assert!(f1 > 0.0 && f1 < 0.942);
    }

    #[test]
    fn trend_ends_at_target() {
        let points = Filler::new(1).monthly_trend("portfolio", 12.0);
        assert_eq!(points.len(), 12);
        assert_eq!(points[11].y, 12.0);
    }

    #[test]
    fn stream_seed_depends_only_on_seed_and_key() {
        assert_eq!(Filler::new(0).stream_seed("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(Filler::new(1).stream_seed("a"), 0xaf63_dc4c_8601_ec8d);
        assert_ne!(
            Filler::new(42).stream_seed("card-fraud-scoring"),
            Filler::new(42).stream_seed("aml-graph-analytics")
        );
    }

    #[test]
    fn fnv_known_vector() {
        assert_eq!(fnv1a(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a("a"), 0xaf63_dc4c_8601_ec8c);
    }
}
