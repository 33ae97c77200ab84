//! One-dimensional slices of the rate model.
//!
//! - Threshold slices: dS/dt over ΔN ∈ [0, 1] for a handful of fixed ΔD.
//! - Endogenous scan: dS/dt over ΔD ∈ [0, 1] for one fixed ΔN.
//!
//! Both sample [`SLICE_SAMPLES`] evenly spaced points, endpoints included.
use driftrate_macros::Sample;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{DEFAULT_ENDOGENOUS_DELTA_N, DEFAULT_SLICE_DELTA_D, SLICE_SAMPLES};
use crate::grid::linspace;
use crate::params::Parameters;
use crate::response::dsdt;

/// One point of a curve: free variable `x`, response `y`.
#[derive(Debug, Clone, Copy, PartialEq, Sample)]
#[sample(series_name = "Curve")]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl Curve {
    /// Evaluate `f` at every point of `xs`.
    pub fn tabulate(xs: Vec<f64>, f: impl Fn(f64) -> f64) -> Self {
        let y = xs.iter().map(|&x| f(x)).collect();
        Self { x: xs, y }
    }

    /// Iterate `(x, y)` pairs in ascending `x`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// dS/dt over ΔN for one fixed ΔD.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSlice {
    pub delta_d: f64,
    pub curve: Curve,
}

/// Threshold slices in the order the ΔD values were requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThresholdSlices {
    slices: SmallVec<[ThresholdSlice; 5]>,
}

impl ThresholdSlices {
    /// Curve for an exact ΔD value, if it was sampled.
    pub fn get(&self, delta_d: f64) -> Option<&Curve> {
        self.slices
            .iter()
            .find(|s| s.delta_d == delta_d)
            .map(|s| &s.curve)
    }

    /// ΔD values in request order.
    pub fn delta_d_values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.delta_d).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThresholdSlice> {
        self.slices.iter()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<'a> IntoIterator for &'a ThresholdSlices {
    type Item = &'a ThresholdSlice;
    type IntoIter = std::slice::Iter<'a, ThresholdSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

/// Sample one ΔN curve per entry of `delta_d_values`, preserving order.
///
/// Duplicate ΔD values produce duplicate slices; [`ThresholdSlices::get`]
/// returns the first.
pub fn sample_threshold_slices(delta_d_values: &[f64], params: &Parameters) -> ThresholdSlices {
    debug!(
        slices = delta_d_values.len(),
        samples = SLICE_SAMPLES,
        "sampling threshold slices"
    );
    let delta_n = linspace(0.0, 1.0, SLICE_SAMPLES);
    let slices = delta_d_values
        .iter()
        .map(|&delta_d| ThresholdSlice {
            delta_d,
            curve: Curve::tabulate(delta_n.clone(), |n| dsdt(n, delta_d, params)),
        })
        .collect();
    ThresholdSlices { slices }
}

/// [`sample_threshold_slices`] over the default ΔD set.
pub fn sample_default_threshold_slices(params: &Parameters) -> ThresholdSlices {
    sample_threshold_slices(&DEFAULT_SLICE_DELTA_D, params)
}

/// Sample dS/dt over ΔD ∈ [0, 1] with ΔN held at `delta_n`.
pub fn sample_endogenous(delta_n: f64, params: &Parameters) -> Curve {
    debug!(delta_n, samples = SLICE_SAMPLES, "sampling endogenous scan");
    Curve::tabulate(linspace(0.0, 1.0, SLICE_SAMPLES), |d| {
        dsdt(delta_n, d, params)
    })
}

/// [`sample_endogenous`] at the default ΔN.
pub fn sample_default_endogenous(params: &Parameters) -> Curve {
    sample_endogenous(DEFAULT_ENDOGENOUS_DELTA_N, params)
}
