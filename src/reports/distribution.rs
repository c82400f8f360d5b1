//! Five-bucket score distribution.

use serde::Serialize;

/// Counts of scores per fixed range, closed-open thresholds:
///
/// | Range     | Bucket    |
/// |-----------|-----------|
/// | >= 90     | excellent |
/// | [80, 90)  | good      |
/// | [70, 80)  | medium    |
/// | [60, 70)  | pass      |
/// | < 60      | fail      |
///
/// Boundary values land in the upper bucket. Bucket counts always sum to the
/// number of scores recorded.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub excellent: usize,
    pub good: usize,
    pub medium: usize,
    pub pass: usize,
    pub fail: usize,
}

impl Distribution {
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut d = Distribution::default();
        for &score in scores {
            d.record(score);
        }
        d
    }

    pub fn record(&mut self, score: f64) {
        match score {
            s if s >= 90.0 => self.excellent += 1,
            s if s >= 80.0 => self.good += 1,
            s if s >= 70.0 => self.medium += 1,
            s if s >= 60.0 => self.pass += 1,
            _ => self.fail += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.medium + self.pass + self.fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let mut d = Distribution::default();
        d.record(90.0);
        d.record(89.9);
        d.record(80.0);
        d.record(79.9);
        d.record(70.0);
        d.record(69.9);
        d.record(60.0);
        d.record(59.9);

        assert_eq!(d.excellent, 1);
        assert_eq!(d.good, 2);
        assert_eq!(d.medium, 2);
        assert_eq!(d.pass, 2);
        assert_eq!(d.fail, 1);
    }

    #[test]
    fn test_counts_sum_to_entry_count() {
        let scores = [100.0, 95.5, 83.0, 71.2, 64.0, 12.0, 0.0];
        let d = Distribution::from_scores(&scores);
        assert_eq!(d.total(), scores.len());
    }

    #[test]
    fn test_out_of_range_scores_do_not_crash() {
        let d = Distribution::from_scores(&[105.0, -5.0]);
        assert_eq!(d.excellent, 1);
        assert_eq!(d.fail, 1);
        assert_eq!(d.total(), 2);
    }

    #[test]
    fn test_nan_counts_as_fail() {
        let d = Distribution::from_scores(&[f64::NAN]);
        assert_eq!(d.fail, 1);
        assert_eq!(d.total(), 1);
    }

    #[test]
    fn test_empty_is_all_zero() {
        let d = Distribution::from_scores(&[]);
        assert_eq!(d, Distribution::default());
        assert_eq!(d.total(), 0);
    }
}
