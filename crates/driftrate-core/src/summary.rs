//! Descriptive statistics for sampled series.
//!
//! Used to compare the drift trajectory against the minimization trace
//! without plotting. NaN inputs propagate.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Root mean square. NaN for an empty slice.
pub fn rms(values: &[f64]) -> f64 {
    (values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64).sqrt()
}

/// Index of the first value at or below `threshold`, if any.
pub fn first_crossing_below(values: &[f64], threshold: f64) -> Option<usize> {
    values.iter().position(|v| *v <= threshold)
}

/// Summary of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub len: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub first: f64,
    pub last: f64,
}

impl SeriesSummary {
    /// Summarise `values`. `None` for an empty slice.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (&first, _) = values.split_first()?;
        let &last = values.last()?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Some(Self {
            len: values.len(),
            min,
            max,
            mean: mean(values),
            first,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_known_value() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn rms_known_value() {
        // sqrt((9 + 16) / 2)
        assert_relative_eq!(rms(&[3.0, 4.0]), (12.5_f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn crossing_found() {
        assert_eq!(first_crossing_below(&[1.0, 0.6, 0.4, 0.2], 0.5), Some(2));
        assert_eq!(first_crossing_below(&[1.0, 0.9], 0.5), None);
    }

    #[test]
    fn summary_of_series() {
        let s = SeriesSummary::of(&[2.0, -1.0, 5.0, 3.0]).unwrap();
        assert_eq!(s.len, 4);
        assert_eq!(s.min, -1.0);
        assert_eq!(s.max, 5.0);
        assert_relative_eq!(s.mean, 2.25);
        assert_eq!(s.first, 2.0);
        assert_eq!(s.last, 3.0);
    }

    #[test]
    fn summary_of_empty() {
        assert!(SeriesSummary::of(&[]).is_none());
    }
}
