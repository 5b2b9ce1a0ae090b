//! Calorie level sub-score
//!
//! Moderate meals score best; past 800 kcal the score drops one point per
//! additional 100 kcal.

use crate::models::Macronutrients;

use super::error::{finite, ScoreError, ScoreResult};
use super::types::SubScore;

const LOW_CALORIE_MAX: f64 = 200.0;
const MODERATE_CALORIE_MAX: f64 = 500.0;
const HIGH_CALORIE_THRESHOLD: f64 = 800.0;

pub fn score_calories(macros: &Macronutrients) -> ScoreResult<SubScore> {
    let calories = match finite(macros.calories, "calories")? {
        Some(kcal) if kcal > 0.0 => kcal,
        _ => return Err(ScoreError::NoData("No calorie information available")),
    };

    let sub = if calories <= LOW_CALORIE_MAX {
        SubScore::new(90.0, "Low calorie meal")
    } else if calories <= MODERATE_CALORIE_MAX {
        SubScore::new(100.0, "Moderate calorie meal")
    } else if calories <= HIGH_CALORIE_THRESHOLD {
        SubScore::new(80.0, "Moderately high calorie meal")
    } else {
        let score = (100.0 - (calories - HIGH_CALORIE_THRESHOLD) / 100.0).max(0.0);
        SubScore::new(score, "High calorie meal")
    };
    Ok(sub)
}
