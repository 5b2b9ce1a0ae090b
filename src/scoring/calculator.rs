//! Health score calculator
//!
//! Combines the four sub-scores into the weighted composite. The calculator
//! is a pure function of its inputs and configuration; it never fails.

use crate::models::{Ingredient, Macronutrients, Micronutrients};

use super::calories::score_calories;
use super::error::absorb;
use super::ingredients::score_ingredients;
use super::macros::score_macros;
use super::micronutrients::score_micronutrients;
use super::types::{
    clamp_score, HealthScores, ScoringConfig, ScoringWeights, SubScore, WeightPolicy,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthScoreCalculator {
    config: ScoringConfig,
}

impl HealthScoreCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a meal from its nutrition breakdown
    pub fn calculate(
        &self,
        macros: &Macronutrients,
        ingredients: &[Ingredient],
        micronutrients: Option<&Micronutrients>,
    ) -> HealthScores {
        let macro_sub = absorb(score_macros(macros, &self.config.ideal_macros), "macro");
        let vitamin_sub = absorb(score_micronutrients(micronutrients), "vitamin/mineral");
        let calorie_sub = absorb(score_calories(macros), "calorie");
        let ingredient_sub = absorb(score_ingredients(ingredients), "ingredients");

        let weights = self.effective_weights(&macro_sub, &vitamin_sub, &calorie_sub, &ingredient_sub);

        let overall = macro_sub.score * weights.macros
            + vitamin_sub.score * weights.vitamins_minerals
            + calorie_sub.score * weights.calories
            + ingredient_sub.score * weights.ingredients;

        let lines: Vec<String> = [
            ("Macronutrients", &macro_sub),
            ("Vitamins/Minerals", &vitamin_sub),
            ("Calories", &calorie_sub),
            ("Ingredients", &ingredient_sub),
        ]
        .into_iter()
        .filter(|(_, sub)| self.config.policy == WeightPolicy::Fixed || sub.has_data())
        .map(|(label, sub)| bullet(label, sub))
        .collect();

        let scores = HealthScores {
            macro_score: macro_sub.score,
            vitamin_mineral_score: vitamin_sub.score,
            calorie_score: calorie_sub.score,
            ingredients_score: ingredient_sub.score,
            overall_score: clamp_score(overall),
            score_explanation: lines.join("\n"),
        };

        tracing::debug!(
            overall = scores.overall_score,
            macros = scores.macro_score,
            vitamins = scores.vitamin_mineral_score,
            calories = scores.calorie_score,
            ingredients = scores.ingredients_score,
            "Calculated health scores"
        );

        scores
    }

    /// Weights actually applied to each sub-score under the configured policy
    fn effective_weights(
        &self,
        macro_sub: &SubScore,
        vitamin_sub: &SubScore,
        calorie_sub: &SubScore,
        ingredient_sub: &SubScore,
    ) -> ScoringWeights {
        let base = self.config.weights;
        match self.config.policy {
            WeightPolicy::Fixed => base,
            WeightPolicy::Adaptive => {
                let keep = |sub: &SubScore, weight: f64| if sub.has_data() { weight } else { 0.0 };
                ScoringWeights {
                    macros: keep(macro_sub, base.macros),
                    vitamins_minerals: keep(vitamin_sub, base.vitamins_minerals),
                    calories: keep(calorie_sub, base.calories),
                    ingredients: keep(ingredient_sub, base.ingredients),
                }
                .normalized()
            }
        }
    }
}

fn bullet(label: &str, sub: &SubScore) -> String {
    format!("• {} ({}/100): {}", label, sub.score.round() as i64, sub.explanation)
}

/// Score a meal with the default configuration
pub fn calculate_health_scores(
    macros: &Macronutrients,
    ingredients: &[Ingredient],
    micronutrients: Option<&Micronutrients>,
) -> HealthScores {
    HealthScoreCalculator::default().calculate(macros, ingredients, micronutrients)
}
