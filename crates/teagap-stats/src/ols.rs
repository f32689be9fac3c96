//! Ordinary least squares regression
//!
//! Fits `y ≈ Xβ` by minimizing the sum of squared residuals. The solution is
//! computed from the SVD of the design matrix; the coefficient covariance
//! `σ² (XᵀX)⁻¹` needs an explicit inverse, which is only attempted once the
//! design is known to have full column rank.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the estimator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// Not enough complete rows to estimate every parameter
    #[error("Not enough observations for regression: n = {n}, k = {k}")]
    InsufficientObservations { n: usize, k: usize },

    /// The design matrix does not have full column rank
    #[error("Singular design matrix: {0}")]
    SingularMatrix(String),

    /// Inputs disagree in shape
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An input entry is infinite
    #[error("Non-finite value in row {row}")]
    NonFinite { row: usize },
}

/// Result type for estimator operations
pub type StatsResult<T> = Result<T, StatsError>;

/// A single fitted term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Term name
    pub name: String,
    /// Point estimate
    pub estimate: f64,
    /// Standard error of the estimate
    pub std_error: f64,
}

/// Output of an OLS fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Fitted terms, in design-matrix column order
    pub terms: Vec<Coefficient>,
    /// Coefficient of determination (NaN when the response is constant)
    pub r_squared: f64,
    /// R² adjusted for the number of parameters
    pub adj_r_squared: f64,
    /// Square root of the residual variance
    pub residual_std_error: f64,
    /// Number of observations used
    pub n: usize,
    /// Number of parameters
    pub k: usize,
}

impl RegressionResult {
    /// Look up a term by name
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Point estimates in column order
    pub fn estimates(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.estimate).collect()
    }

    /// Standard errors in column order
    pub fn std_errors(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.std_error).collect()
    }
}

/// Fit an ordinary least squares regression
///
/// Rows where any entry of `x` or `y` is NaN are dropped before fitting.
/// `names` labels the columns of `x` and must have one entry per column.
///
/// # Errors
///
/// - `InsufficientObservations` when the complete rows do not exceed the
///   number of columns
/// - `SingularMatrix` when the columns of `x` are linearly dependent
/// - `DimensionMismatch` when `y` or `names` do not fit `x`
/// - `NonFinite` when a row that is not dropped holds an infinity
pub fn fit_ols(x: &DMatrix<f64>, y: &DVector<f64>, names: &[&str]) -> StatsResult<RegressionResult> {
    if x.nrows() != y.len() {
        return Err(StatsError::DimensionMismatch(format!(
            "design has {} rows but response has {}",
            x.nrows(),
            y.len()
        )));
    }
    if x.ncols() != names.len() {
        return Err(StatsError::DimensionMismatch(format!(
            "design has {} columns but {} names were given",
            x.ncols(),
            names.len()
        )));
    }

    let complete: Vec<usize> = (0..x.nrows())
        .filter(|&i| !y[i].is_nan() && x.row(i).iter().all(|v| !v.is_nan()))
        .collect();

    // The SVD panics on infinite entries
    if let Some(&row) = complete
        .iter()
        .find(|&&i| !y[i].is_finite() || x.row(i).iter().any(|v| !v.is_finite()))
    {
        return Err(StatsError::NonFinite { row });
    }

    let x = x.select_rows(complete.iter());
    let y = y.select_rows(complete.iter());

    let (n, k) = x.shape();
    if n <= k {
        return Err(StatsError::InsufficientObservations { n, k });
    }

    let svd = x.clone().svd(true, true);
    let sigma_max = svd.singular_values.max();
    let tolerance = n.max(k) as f64 * f64::EPSILON * sigma_max;
    let rank = svd.rank(tolerance);
    if rank < k {
        return Err(StatsError::SingularMatrix(format!(
            "rank {} is below the {} columns",
            rank, k
        )));
    }

    let beta = svd
        .solve(&y, tolerance)
        .map_err(|e| StatsError::SingularMatrix(e.to_string()))?;

    let residuals = &y - &x * &beta;
    let sse = residuals.norm_squared();
    let mean = y.mean();
    let sst: f64 = y.iter().map(|v| (v - mean).powi(2)).sum();
    let sigma2 = sse / (n - k) as f64;

    let xtx_inv = (x.transpose() * &x)
        .try_inverse()
        .ok_or_else(|| StatsError::SingularMatrix("XᵀX is not invertible".to_string()))?;

    let std_errors: Vec<f64> = xtx_inv.diagonal().iter().map(|v| (sigma2 * v).sqrt()).collect();
    if std_errors.iter().any(|se| !se.is_finite()) {
        return Err(StatsError::SingularMatrix(
            "coefficient covariance is not finite".to_string(),
        ));
    }

    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { f64::NAN };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / (n - k) as f64;

    let terms = names
        .iter()
        .zip(beta.iter().zip(std_errors))
        .map(|(name, (&estimate, std_error))| Coefficient {
            name: name.to_string(),
            estimate,
            std_error,
        })
        .collect();

    Ok(RegressionResult {
        terms,
        r_squared,
        adj_r_squared,
        residual_std_error: sigma2.sqrt(),
        n,
        k,
    })
}
