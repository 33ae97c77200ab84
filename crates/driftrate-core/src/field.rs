//! Two-dimensional dS/dt field over (ΔN, ΔD).
//!
//! Layout: row `j` is the ΔD sample `delta_d[j]`, column `i` is the ΔN
//! sample `delta_n[i]`. Row index grows with ΔD and column index grows with
//! ΔN, which is the orientation an image plot with the origin at the lower
//! left expects. Values are stored row-major.
//!
//! Every cell is computed independently from the others.
use tracing::debug;

use crate::constants::DEFAULT_FIELD_RESOLUTION;
use crate::grid::Axis;
use crate::params::Parameters;
use crate::response::dsdt;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// ΔN sample points (columns).
    pub delta_n: Vec<f64>,
    /// ΔD sample points (rows).
    pub delta_d: Vec<f64>,
    /// Row-major dS/dt values, `delta_d.len() * delta_n.len()` entries.
    pub values: Vec<f64>,
}

impl Field {
    pub fn n_rows(&self) -> usize {
        self.delta_d.len()
    }

    pub fn n_cols(&self) -> usize {
        self.delta_n.len()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at row `j` (ΔD index), column `i` (ΔN index).
    pub fn get(&self, j: usize, i: usize) -> Option<f64> {
        if j >= self.n_rows() || i >= self.n_cols() {
            return None;
        }
        Some(self.values[j * self.n_cols() + i])
    }

    /// All ΔN samples for ΔD index `j`.
    pub fn row(&self, j: usize) -> Option<&[f64]> {
        if j >= self.n_rows() {
            return None;
        }
        let cols = self.n_cols();
        Some(&self.values[j * cols..(j + 1) * cols])
    }

    /// Iterate rows in ascending ΔD order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty field has no rows anyway
        self.values.chunks(self.n_cols().max(1))
    }

    /// All ΔD samples for ΔN index `i`.
    pub fn column(&self, i: usize) -> Option<Vec<f64>> {
        if i >= self.n_cols() {
            return None;
        }
        Some(self.rows().map(|r| r[i]).collect())
    }

    /// Smallest and largest value, ignoring NaN. `None` for an empty field.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Sample dS/dt on an `n × n` grid over the unit square.
///
/// Cell `(j, i)` holds `dsdt(i / (n-1), j / (n-1))`.
pub fn sample_field(n: usize, params: &Parameters) -> Field {
    sample_field_on(&Axis::unit(n), &Axis::unit(n), params)
}

/// [`sample_field`] at the default resolution.
pub fn sample_default_field(params: &Parameters) -> Field {
    sample_field(DEFAULT_FIELD_RESOLUTION, params)
}

/// Sample dS/dt over arbitrary ΔN (columns) and ΔD (rows) axes.
pub fn sample_field_on(delta_n_axis: &Axis, delta_d_axis: &Axis, params: &Parameters) -> Field {
    let delta_n = delta_n_axis.values();
    let delta_d = delta_d_axis.values();
    debug!(
        rows = delta_d.len(),
        cols = delta_n.len(),
        "sampling dS/dt field"
    );

    let mut values = Vec::with_capacity(delta_n.len() * delta_d.len());
    for &d in &delta_d {
        values.extend(delta_n.iter().map(|&n| dsdt(n, d, params)));
    }

    Field {
        delta_n,
        delta_d,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn field_is_square() {
        let f = sample_field(17, &Parameters::default());
        assert_eq!(f.shape(), (17, 17));
        assert_eq!(f.values.len(), 17 * 17);
    }

    #[test]
    fn default_resolution() {
        let f = sample_default_field(&Parameters::default());
        assert_eq!(f.shape(), (200, 200));
    }

    #[test]
    fn cells_match_rate_model() {
        let p = Parameters::default();
        let n = 25;
        let f = sample_field(n, &p);
        let div = (n - 1) as f64;
        for j in 0..n {
            for i in 0..n {
                let expected = dsdt(i as f64 / div, j as f64 / div, &p);
                assert_relative_eq!(f.get(j, i).unwrap(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn rows_follow_delta_d_and_columns_follow_delta_n() {
        let p = Parameters::default();
        let f = sample_field(11, &p);
        // Bottom-right corner: dN = 1, dD = 0
        assert_relative_eq!(f.get(0, 10).unwrap(), dsdt(1.0, 0.0, &p), epsilon = 1e-12);
        // Top-left corner: dN = 0, dD = 1
        assert_relative_eq!(f.get(10, 0).unwrap(), dsdt(0.0, 1.0, &p), epsilon = 1e-12);
        assert_relative_eq!(f.get(10, 0).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn rectangular_field() {
        let p = Parameters::default();
        let f = sample_field_on(&Axis::new(0.0, 1.0, 4), &Axis::new(0.0, 0.5, 3), &p);
        assert_eq!(f.shape(), (3, 4));
        assert_eq!(f.rows().count(), 3);
        assert_eq!(f.row(2).unwrap().len(), 4);
        assert_eq!(f.column(3).unwrap().len(), 3);
        assert_relative_eq!(f.get(2, 3).unwrap(), dsdt(1.0, 0.5, &p), epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_access() {
        let f = sample_field(3, &Parameters::default());
        assert!(f.get(3, 0).is_none());
        assert!(f.get(0, 3).is_none());
        assert!(f.row(3).is_none());
        assert!(f.column(3).is_none());
    }

    #[test]
    fn degenerate_sizes() {
        let p = Parameters::default();
        let empty = sample_field(0, &p);
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
        assert!(empty.range().is_none());

        let single = sample_field(1, &p);
        assert_eq!(single.shape(), (1, 1));
        assert_relative_eq!(single.get(0, 0).unwrap(), dsdt(0.0, 0.0, &p), epsilon = 1e-12);
    }

    #[test]
    fn range_spans_values() {
        let f = sample_field(50, &Parameters::default());
        let (lo, hi) = f.range().unwrap();
        assert!(lo <= hi);
        assert!(f.values.iter().all(|v| *v >= lo && *v <= hi));
    }
}
