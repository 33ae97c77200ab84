//! Error types for parameter construction.
//!
//! The numeric procedures themselves are total and never fail; only
//! building a [`Parameters`](crate::params::Parameters) value is checked.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A parameter is NaN or infinite.
    #[error("{name} = {value} is not finite")]
    NonFinite { name: &'static str, value: f64 },

    /// A parameter that must be strictly positive is not.
    #[error("{name} = {value} must be > 0")]
    NotPositive { name: &'static str, value: f64 },

    /// A parameter that must be non-negative is negative.
    #[error("{name} = {value} must be >= 0")]
    Negative { name: &'static str, value: f64 },

    /// A flat parameter array has the wrong number of entries.
    #[error("expected {expected} parameters, got {got}")]
    WrongLength { expected: usize, got: usize },
}

pub type ParamsResult<T> = Result<T, ParamsError>;
