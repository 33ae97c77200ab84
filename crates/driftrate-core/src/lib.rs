//! driftrate: drift-rate response model and its samplers.
//!
//! The model is a scalar rate `dS/dt = α(ΔN, ΔD)·ΔN + β·ΔD` where α combines
//! a logistic gate on ΔN with a power-law suppression on ΔD. The crate
//! evaluates it five ways, each returning plain data for a separate
//! presentation layer:
//!
//! - [`field::sample_field`]: full 2D field over the unit square
//! - [`slices::sample_threshold_slices`]: ΔN curves at fixed ΔD values
//! - [`slices::sample_endogenous`]: ΔD curve at a fixed ΔN
//! - [`drift::integrate_drift`]: forward Euler integration of S(t)
//! - [`minimize::minimize`]: a gradient-descent trace for comparison
pub mod constants;
pub mod drift;
pub mod error;
pub mod field;
pub mod grid;
pub mod minimize;
pub mod params;
pub mod response;
pub mod slices;
pub mod summary;
pub mod traits;

pub use error::{ParamsError, ParamsResult};
pub use params::Parameters;
pub use response::{alpha, dsdt};
