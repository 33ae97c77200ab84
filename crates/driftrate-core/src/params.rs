/// Drift-rate model parameters.
///
/// Six constants shared read-only by every procedure. The struct is `Copy`
/// and passed explicitly, so independent configurations can coexist.
///
/// - `a`: amplitude scale (> 0)
/// - `k`: logistic steepness
/// - `n_crit`: logistic threshold centre
/// - `p`: suppression exponent (>= 0)
/// - `eps`: suppression floor (> 0)
/// - `beta`: linear ΔD coupling
use crate::constants::{
    DEFAULT_A, DEFAULT_BETA, DEFAULT_EPS, DEFAULT_K, DEFAULT_N_CRIT, DEFAULT_P, N_PARAMS,
    PARAM_NAMES,
};
use crate::error::{ParamsError, ParamsResult};
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub a: f64,
    pub k: f64,
    pub n_crit: f64,
    pub p: f64,
    pub eps: f64,
    pub beta: f64,
}

impl Parameters {
    /// Create new Parameters, rejecting values that break the response function.
    pub fn new(a: f64, k: f64, n_crit: f64, p: f64, eps: f64, beta: f64) -> ParamsResult<Self> {
        let params = Self {
            a,
            k,
            n_crit,
            p,
            eps,
            beta,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants: all finite, `a > 0`, `eps > 0`, `p >= 0`.
    ///
    /// `eps > 0` is what keeps the suppression denominator non-zero at ΔD = 0.
    pub fn validate(&self) -> ParamsResult<()> {
        for (name, value) in PARAM_NAMES.iter().copied().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }
        if self.a <= 0.0 {
            return Err(ParamsError::NotPositive {
                name: "a",
                value: self.a,
            });
        }
        if self.eps <= 0.0 {
            return Err(ParamsError::NotPositive {
                name: "eps",
                value: self.eps,
            });
        }
        if self.p < 0.0 {
            return Err(ParamsError::Negative {
                name: "p",
                value: self.p,
            });
        }
        Ok(())
    }

    /// Upper bound of α over ΔD >= 0: `a / eps`.
    pub fn alpha_ceiling(&self) -> f64 {
        self.a / self.eps
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            k: DEFAULT_K,
            n_crit: DEFAULT_N_CRIT,
            p: DEFAULT_P,
            eps: DEFAULT_EPS,
            beta: DEFAULT_BETA,
        }
    }
}

impl ModelParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;

    fn from_array(arr: &[f64]) -> ParamsResult<Self> {
        if arr.len() != Self::N_PARAMS {
            return Err(ParamsError::WrongLength {
                expected: Self::N_PARAMS,
                got: arr.len(),
            });
        }
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.a, self.k, self.n_crit, self.p, self.eps, self.beta]
    }
}
