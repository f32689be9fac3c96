//! teagap-stats - Statistical estimators for teagap
//!
//! This crate provides the regression machinery used by the pipeline:
//!
//! - **OLS**: ordinary least squares with coefficient standard errors and R²
//!
//! The estimator knows nothing about entrepreneurship data; it works on a
//! plain design matrix and response vector.

pub mod ols;

pub use ols::*;
