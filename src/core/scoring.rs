//! Score calculator: converts one direction's per-dimension outcomes into a
//! weighted score used for ranking.
//!
//! Weight table: every dimension weighs 1.0 by default (equal weighting —
//! there is no evidence the upstream system weighted dimensions unequally).
//! Deployments may tune the table via configuration; the `validate` check
//! keeps a bad table from silently skewing every ranking.

use crate::models::{DimensionOutcome, DimensionWeights, Outcome, Score};
use thiserror::Error;

/// Rejected weight tables. Raised loudly at engine construction (a contract
/// violation), never during per-pair evaluation.
#[derive(Debug, Error)]
pub enum WeightError {
    #[error("weight for {dimension} is not a finite non-negative number: {value}")]
    InvalidWeight { dimension: &'static str, value: f64 },
    #[error("all dimension weights are zero")]
    AllZero,
}

/// Validate a weight table: every weight finite and non-negative, and at
/// least one strictly positive.
pub fn validate_weights(weights: &DimensionWeights) -> Result<(), WeightError> {
    let entries: [(&'static str, f64); 13] = [
        ("age", weights.age),
        ("height", weights.height),
        ("location", weights.location),
        ("religion", weights.religion),
        ("community", weights.community),
        ("subCommunity", weights.sub_community),
        ("gotra", weights.gotra),
        ("diet", weights.diet),
        ("maritalStatus", weights.marital_status),
        ("education", weights.education),
        ("income", weights.income),
        ("smoking", weights.smoking),
        ("drinking", weights.drinking),
    ];

    for (dimension, value) in entries {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::InvalidWeight { dimension, value });
        }
    }
    if entries.iter().all(|(_, v)| *v == 0.0) {
        return Err(WeightError::AllZero);
    }
    Ok(())
}

/// Compute the weighted score for one direction.
///
/// `total` sums the weights of passing dimensions; `max` sums the weights of
/// every non-vacuous dimension. Vacuous dimensions sit outside both sums, so
/// a holder with few stated preferences is scored only on the dimensions
/// that actually apply.
pub fn calculate_score(outcomes: &[DimensionOutcome], weights: &DimensionWeights) -> Score {
    let mut total = 0.0;
    let mut max = 0.0;

    for o in outcomes {
        match o.outcome {
            Outcome::Pass => {
                let w = weights.weight(o.dimension);
                total += w;
                max += w;
            }
            Outcome::Fail => {
                max += weights.weight(o.dimension);
            }
            Outcome::Vacuous => {}
        }
    }

    Score { total, max }
}
