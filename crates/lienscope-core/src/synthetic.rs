//! Synthetic series used when the upstream source cannot be reached.

use crate::{Cadence, CalendarDate, MarketDataPoint, Metric, Series};

/// Number of points in every synthetic series.
pub const SYNTHETIC_SERIES_LEN: usize = 30;

/// Generates plausible, clamped series ending at a given date.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: fastrand::Rng,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Builds [`SYNTHETIC_SERIES_LEN`] points at the metric's cadence, the last
    /// one dated `today`.
    ///
    /// Points whose date would fall before the earliest representable date are
    /// omitted.
    pub fn generate(&mut self, metric: Metric, today: CalendarDate) -> Series {
        let profile = metric.synthetic_profile();
        let last_step = (SYNTHETIC_SERIES_LEN - 1) as u32;

        let points = (0..=last_step)
            .rev()
            .filter_map(|steps_back| {
                let date = match metric.cadence() {
                    Cadence::Weekly => today.weeks_before(steps_back),
                    Cadence::Monthly => today.months_before(steps_back),
                }?;

                let drift = profile.trend_per_step * f64::from(steps_back);
                let noise = (self.rng.f64() * 2.0 - 1.0) * profile.noise;
                let value = (profile.base + drift + noise).clamp(profile.floor, profile.ceiling);

                Some(MarketDataPoint {
                    date,
                    value: round_cents(value),
                })
            })
            .collect::<Vec<_>>();

        Series::from_ascending(points)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
