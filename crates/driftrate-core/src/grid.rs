//! Evenly spaced sampling axes.

/// A closed interval `[start, stop]` sampled at `len` evenly spaced points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub start: f64,
    pub stop: f64,
    pub len: usize,
}

impl Axis {
    pub fn new(start: f64, stop: f64, len: usize) -> Self {
        Self { start, stop, len }
    }

    /// `len` points over `[0, 1]`, the conventional sampling domain.
    pub fn unit(len: usize) -> Self {
        Self::new(0.0, 1.0, len)
    }

    /// Materialise the sample points.
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.len)
    }
}

/// Endpoint-inclusive evenly spaced values, as numpy's `linspace`.
///
/// Point `i` is `start + (stop - start) * i / (len - 1)`; the last point is
/// exactly `stop`. `len == 1` yields `[start]`, `len == 0` yields `[]`.
pub fn linspace(start: f64, stop: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = (len - 1) as f64;
            let span = stop - start;
            let mut out: Vec<f64> = (0..len).map(|i| start + span * i as f64 / div).collect();
            out[len - 1] = stop;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_matches_index_ratio() {
        let n = 200;
        let v = linspace(0.0, 1.0, n);
        for (i, x) in v.iter().enumerate() {
            assert_relative_eq!(*x, i as f64 / (n - 1) as f64, epsilon = 1e-15);
        }
    }

    #[test]
    fn linspace_strictly_increasing() {
        let v = linspace(0.0, 1.0, 400);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn axis_unit() {
        let axis = Axis::unit(3);
        assert_eq!(axis.values(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn axis_custom_range() {
        let axis = Axis::new(-1.0, 1.0, 3);
        assert_eq!(axis.values(), vec![-1.0, 0.0, 1.0]);
    }
}
