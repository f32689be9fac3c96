//! The female TEA gap model
//!
//! `FemaleGap = β0 + β1 · FearOfFailure_Female + β2 · PerceivedCapability_Female`

use nalgebra::{DMatrix, DVector};
use teagap_stats::{fit_ols, RegressionResult};

use crate::error::Result;
use crate::merge::MergedRecord;

/// Term names in design-matrix column order
pub const TERM_NAMES: [&str; 3] = ["const", "FearOfFailure_Female", "PerceivedCapability_Female"];

/// Name of the fear-of-failure term
pub const FEAR_TERM: &str = TERM_NAMES[1];

/// Name of the perceived-capability term
pub const CAPABILITY_TERM: &str = TERM_NAMES[2];

/// Build the design matrix `[1, fear, capability]` and the gap response
pub fn design_matrix(records: &[MergedRecord]) -> (DMatrix<f64>, DVector<f64>) {
    let x = DMatrix::from_fn(records.len(), TERM_NAMES.len(), |i, j| match j {
        0 => 1.0,
        1 => records[i].fear_female,
        _ => records[i].capability_female,
    });
    let y = DVector::from_iterator(records.len(), records.iter().map(MergedRecord::female_gap));
    (x, y)
}

/// Regress the female gap on female fear of failure and perceived capability
pub fn fit_female_gap(records: &[MergedRecord]) -> Result<RegressionResult> {
    let (x, y) = design_matrix(records);
    let result = fit_ols(&x, &y, &TERM_NAMES)?;
    tracing::info!(
        "Fitted female gap model on {} observations, R² = {:.4}",
        result.n,
        result.r_squared
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeagapError;
    use teagap_stats::StatsError;

    fn record(country: &str, gap: f64, fear: f64, capability: f64) -> MergedRecord {
        MergedRecord {
            country: country.to_string(),
            year: 2023,
            female_tea: 10.0 + gap,
            male_tea: 10.0,
            capability_female: capability,
            capability_male: 50.0,
            fear_female: fear,
            fear_male: 40.0,
        }
    }

    #[test]
    fn test_design_matrix_layout() {
        let records = vec![record("Alpha", -2.0, 30.0, 45.0), record("Beta", 1.0, 20.0, 60.0)];
        let (x, y) = design_matrix(&records);

        assert_eq!(x.shape(), (2, 3));
        assert_eq!(x.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 30.0, 45.0]);
        assert_eq!(x.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 20.0, 60.0]);
        assert!((y[0] - -2.0).abs() < 1e-12);
        assert!((y[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_recovers_known_model() {
        // gap = 4 - 0.2 * fear + 0.1 * capability
        let points = [(30.0, 45.0), (20.0, 60.0), (45.0, 38.0), (25.0, 52.0), (50.0, 70.0), (35.0, 41.0)];
        let records: Vec<MergedRecord> = points
            .iter()
            .enumerate()
            .map(|(i, &(fear, cap))| record(&format!("C{}", i), 4.0 - 0.2 * fear + 0.1 * cap, fear, cap))
            .collect();

        let result = fit_female_gap(&records).unwrap();
        let names: Vec<&str> = result.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, TERM_NAMES.to_vec());
        assert!((result.terms[0].estimate - 4.0).abs() < 1e-6);
        assert!((result.coefficient(FEAR_TERM).unwrap().estimate - -0.2).abs() < 1e-6);
        assert!((result.coefficient(CAPABILITY_TERM).unwrap().estimate - 0.1).abs() < 1e-6);
        assert!((result.r_squared - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_two_rows_is_insufficient() {
        let records = vec![record("Alpha", -2.0, 30.0, 45.0), record("Beta", 1.0, 20.0, 60.0)];
        let err = fit_female_gap(&records).unwrap_err();
        assert!(matches!(
            err,
            TeagapError::Regression(StatsError::InsufficientObservations { n: 2, k: 3 })
        ));
    }

    #[test]
    fn test_infinite_predictor_is_an_error() {
        let mut records: Vec<MergedRecord> = [(30.0, 45.0), (20.0, 60.0), (45.0, 38.0), (25.0, 52.0), (50.0, 70.0)]
            .iter()
            .enumerate()
            .map(|(i, &(fear, cap))| record(&format!("C{}", i), i as f64, fear, cap))
            .collect();
        records[3].fear_female = f64::INFINITY;

        let err = fit_female_gap(&records).unwrap_err();
        assert!(matches!(
            err,
            TeagapError::Regression(StatsError::NonFinite { row: 3 })
        ));
    }

    #[test]
    fn test_identical_predictors_are_singular() {
        let records: Vec<MergedRecord> = (0..5)
            .map(|i| record(&format!("C{}", i), i as f64, 30.0 + i as f64, 30.0 + i as f64))
            .collect();
        let err = fit_female_gap(&records).unwrap_err();
        assert!(matches!(err, TeagapError::Regression(StatsError::SingularMatrix(_))));
    }
}
