use crate::access_log::error::StatsError;

/// A percentile rank in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentile(f64);

impl Percentile {
    pub const P95: Percentile = Percentile(95.0);

    pub fn new(p: f64) -> Result<Self, StatsError> {
        // NaN fails the range check as well.
        if (0.0..=100.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(StatsError::PercentileOutOfRange(p))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Computes the percentile of `values` by linear interpolation between the two
    /// closest ranks. Returns 0 for an empty input.
    pub fn of(self, values: &[f64]) -> f64 {
        self.of_owned(values.to_vec())
    }

    /// Same as [`Percentile::of`], sorting `values` in place instead of copying them.
    pub fn of_owned(self, mut values: Vec<f64>) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        values.sort_unstable_by(f64::total_cmp);

        let rank = self.0 / 100.0 * (values.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let weight = rank - lower as f64;

        round_to_cents(values[lower] + (values[upper] - values[lower]) * weight)
    }
}

pub fn percentile(values: &[f64], p: f64) -> Result<f64, StatsError> {
    Percentile::new(p).map(|p| p.of(values))
}

pub fn average(sum: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to_cents(sum / count as f64)
}

pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_cents(count as f64 * 100.0 / total as f64)
}

/// Round half up to two decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
