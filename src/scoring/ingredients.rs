//! Ingredient quality sub-score
//!
//! Keyword heuristic over ingredient names: each beneficial word found adds
//! 10 points to a base of 70, each problematic word removes 10.

use crate::models::Ingredient;

use super::error::{ScoreError, ScoreResult};
use super::types::SubScore;

pub const BENEFICIAL_KEYWORDS: [&str; 6] = ["fresh", "whole", "organic", "lean", "raw", "natural"];
pub const PROBLEMATIC_KEYWORDS: [&str; 5] = ["processed", "artificial", "fried", "refined", "sweetened"];

const BASE_INGREDIENT_SCORE: f64 = 70.0;
const POINTS_PER_KEYWORD: f64 = 10.0;
const MAX_GOOD_LISTED: usize = 3;
const MAX_BAD_LISTED: usize = 2;

const NO_DATA: &str = "No ingredient information available";

/// Keyword points found in one ingredient name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientPoints {
    pub good: f64,
    pub bad: f64,
}

impl IngredientPoints {
    pub fn for_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let hits = |keywords: &[&str]| {
            keywords.iter().filter(|k| lower.contains(**k)).count() as f64 * POINTS_PER_KEYWORD
        };
        Self {
            good: hits(&BENEFICIAL_KEYWORDS[..]),
            bad: hits(&PROBLEMATIC_KEYWORDS[..]),
        }
    }

    /// Unclamped per-ingredient score
    pub fn score(&self) -> f64 {
        BASE_INGREDIENT_SCORE + self.good - self.bad
    }
}

pub fn score_ingredients(ingredients: &[Ingredient]) -> ScoreResult<SubScore> {
    let mut total = 0.0;
    let mut considered = 0usize;
    let mut good = Vec::new();
    let mut bad = Vec::new();

    for name in ingredients.iter().filter_map(Ingredient::usable_name) {
        let points = IngredientPoints::for_name(name);
        total += points.score();
        considered += 1;

        if points.good > points.bad {
            good.push(name);
        } else if points.bad > 0.0 {
            bad.push(name);
        }
    }

    if considered == 0 {
        return Err(ScoreError::NoData(NO_DATA));
    }

    let avg = (total / considered as f64).min(100.0);

    let explanation = if good.is_empty() {
        "Limited ingredient quality information".to_string()
    } else {
        let mut text = format!(
            "Healthy ingredients: {}",
            good.iter().take(MAX_GOOD_LISTED).copied().collect::<Vec<_>>().join(", ")
        );
        if !bad.is_empty() {
            text.push_str(&format!(
                ". Consider: {}",
                bad.iter().take(MAX_BAD_LISTED).copied().collect::<Vec<_>>().join(", ")
            ));
        }
        text
    };

    Ok(SubScore::new(avg, explanation))
}
