//! Meal health scoring
//!
//! Deterministic 0-100 health score from a meal's nutrition breakdown.

pub mod calculator;
pub mod calories;
pub mod error;
pub mod ingredients;
pub mod macros;
pub mod micronutrients;
pub mod types;

pub use calculator::{calculate_health_scores, HealthScoreCalculator};
pub use error::{ScoreError, ScoreResult};
pub use micronutrients::{Nutrient, NutrientKind};
pub use types::{
    clamp_score, HealthScores, IdealMacros, MacroBand, ProteinBand, ScoringConfig, ScoringWeights,
    SubScore, WeightPolicy,
};
