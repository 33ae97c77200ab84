/// Drift scenario outputs.
///
/// `DriftSample` is one time index; `Trajectory` is the full run as columns.
use driftrate_macros::Sample;

use crate::traits::SeriesOps;

/// Single time index, returned by `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Sample)]
#[sample(series_name = "Trajectory")]
pub struct DriftSample {
    pub t: f64,       // time
    pub delta_n: f64, // forced ΔN(t)
    pub dsdt: f64,    // rate evaluated at this index (0 at index 0)
    pub s: f64,       // accumulated S(t)
}

impl SeriesOps<DriftSample> for Trajectory {
    fn with_capacity(n: usize) -> Self {
        Trajectory::with_capacity(n)
    }

    fn push(&mut self, s: &DriftSample) {
        Trajectory::push(self, s)
    }

    fn len(&self) -> usize {
        Trajectory::len(self)
    }

    fn is_empty(&self) -> bool {
        Trajectory::is_empty(self)
    }
}

impl Trajectory {
    /// S at the last time index.
    pub fn final_s(&self) -> Option<f64> {
        self.s.last().copied()
    }
}
