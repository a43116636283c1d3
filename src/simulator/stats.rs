//! Summary statistics over a sample.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentiles {
    pub p10: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Percentiles,
}

impl SampleSummary {
    /// Summarize a sample. Returns None for an empty sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            median: percentile(&sorted, 50.0),
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            percentiles: Percentiles {
                p10: percentile(&sorted, 10.0),
                p25: percentile(&sorted, 25.0),
                p75: percentile(&sorted, 75.0),
                p90: percentile(&sorted, 90.0),
                p95: percentile(&sorted, 95.0),
            },
        })
    }
}

/// Percentile of a sorted, non-empty sample, interpolating linearly between
/// the two closest ranks. `pct` must be in [0, 100].
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        assert!(SampleSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn test_single_value() {
        let s = SampleSummary::from_samples(&[4.0]).unwrap();
        assert_eq!(s.mean, 4.0);
        assert_eq!(s.median, 4.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.percentiles.p95, 4.0);
    }

    #[test]
    fn test_interpolated_percentiles() {
        // 1..=10 unsorted
        let samples = [7.0, 3.0, 10.0, 1.0, 5.0, 2.0, 9.0, 4.0, 8.0, 6.0];
        let s = SampleSummary::from_samples(&samples).unwrap();
        assert!((s.mean - 5.5).abs() < 1e-12);
        assert!((s.median - 5.5).abs() < 1e-12);
        assert!((s.percentiles.p10 - 1.9).abs() < 1e-12);
        assert!((s.percentiles.p25 - 3.25).abs() < 1e-12);
        assert!((s.percentiles.p75 - 7.75).abs() < 1e-12);
        assert!((s.percentiles.p90 - 9.1).abs() < 1e-12);
        assert!((s.percentiles.p95 - 9.55).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 10.0);
    }

    #[test]
    fn test_two_values_span_the_range() {
        let s = SampleSummary::from_samples(&[3.0, 1.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert!((s.median - 2.0).abs() < 1e-12);
        assert!((s.percentiles.p95 - 2.9).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_dev() {
        let s = SampleSummary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((s.std_dev - 2.0).abs() < 1e-12);
    }
}
