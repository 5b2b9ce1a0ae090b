//! Scoring errors
//!
//! Local to the scoring module. Every variant is absorbed at the sub-score
//! boundary and turned into a zero score with a diagnostic message.

use thiserror::Error;

use super::types::SubScore;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("{0}")]
    NoData(&'static str),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

/// Reject NaN and infinities in a reported value
pub(crate) fn finite(value: Option<f64>, field: &'static str) -> ScoreResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() => Err(ScoreError::NonFinite { field }),
        other => Ok(other),
    }
}

/// Collapse a sub-score computation into its observable outcome
pub(crate) fn absorb(result: ScoreResult<SubScore>, dimension: &'static str) -> SubScore {
    match result {
        Ok(sub) => sub,
        Err(ScoreError::NoData(message)) => SubScore::unavailable(message),
        Err(e) => {
            tracing::warn!("Failed to score {}: {}", dimension, e);
            SubScore::unavailable(format!("Error calculating {} score", dimension))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_passes_through() {
        assert_eq!(finite(Some(3.0), "x"), Ok(Some(3.0)));
        assert_eq!(finite(None, "x"), Ok(None));
    }

    #[test]
    fn test_finite_rejects_nan() {
        assert_eq!(
            finite(Some(f64::NAN), "calories"),
            Err(ScoreError::NonFinite { field: "calories" })
        );
        assert!(finite(Some(f64::INFINITY), "calories").is_err());
    }

    #[test]
    fn test_absorb_turns_errors_into_zero() {
        let sub = absorb(Err(ScoreError::NonFinite { field: "iron" }), "vitamin/mineral");
        assert_eq!(sub.score, 0.0);
        assert!(sub.explanation.contains("Error calculating vitamin/mineral score"));

        let sub = absorb(Err(ScoreError::NoData("No calorie information available")), "calorie");
        assert_eq!(sub.score, 0.0);
        assert_eq!(sub.explanation, "No calorie information available");
    }
}
