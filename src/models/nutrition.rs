//! Meal nutrition data structures
//!
//! Shape of the nutrition breakdown returned by the vision analysis step,
//! plus the health metrics merged into it after scoring. Every numeric field
//! is optional: `None` means "not reported", `Some(0.0)` means "reported as zero".

use serde::{Deserialize, Serialize};

use crate::scoring::HealthScores;

/// A single ingredient identified in the meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub estimated_amount: Option<String>,
    #[serde(default)]
    pub allergen: Option<bool>,
}

impl Ingredient {
    /// Ingredient with only a name, the common case in tests and callers
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The trimmed name, or `None` when missing or blank
    pub fn usable_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    #[serde(default)]
    pub grams: Option<f64>,
    #[serde(default)]
    pub daily_value_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Carbohydrates {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fats {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub saturated: Option<f64>,
    #[serde(default)]
    pub unsaturated: Option<f64>,
}

/// Macronutrient breakdown (grams, except `calories` in kcal)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macronutrients {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<Protein>,
    #[serde(default)]
    pub carbohydrates: Option<Carbohydrates>,
    #[serde(default)]
    pub fats: Option<Fats>,
}

impl Macronutrients {
    pub fn protein_grams(&self) -> Option<f64> {
        self.protein.as_ref().and_then(|p| p.grams)
    }

    pub fn carb_grams(&self) -> Option<f64> {
        self.carbohydrates.as_ref().and_then(|c| c.total)
    }

    pub fn fat_grams(&self) -> Option<f64> {
        self.fats.as_ref().and_then(|f| f.total)
    }

    /// Builder used by callers that only know the headline figures
    pub fn from_grams(
        calories: Option<f64>,
        protein: Option<f64>,
        carbs: Option<f64>,
        fat: Option<f64>,
    ) -> Self {
        Self {
            calories,
            protein: protein.map(|grams| Protein {
                grams: Some(grams),
                ..Protein::default()
            }),
            carbohydrates: carbs.map(|total| Carbohydrates {
                total: Some(total),
                ..Carbohydrates::default()
            }),
            fats: fat.map(|total| Fats {
                total: Some(total),
                ..Fats::default()
            }),
        }
    }
}

/// Vitamin amounts, in the units the vision model reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vitamins {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub c: Option<f64>,
    #[serde(default)]
    pub d: Option<f64>,
    #[serde(default)]
    pub b12: Option<f64>,
}

/// Mineral amounts in milligrams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Minerals {
    #[serde(default)]
    pub calcium: Option<f64>,
    #[serde(default)]
    pub iron: Option<f64>,
    #[serde(default)]
    pub potassium: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Micronutrients {
    #[serde(default)]
    pub vitamins: Option<Vitamins>,
    #[serde(default)]
    pub minerals: Option<Minerals>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServingInfo {
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub servings_per_container: Option<f64>,
}

/// Structured output of the vision analysis step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub serving_info: Option<ServingInfo>,
    #[serde(default)]
    pub macronutrients: Macronutrients,
    #[serde(default)]
    pub micronutrients: Option<Micronutrients>,
}

/// Per-component scores as exposed in the response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub macronutrient_score: f64,
    pub vitamin_mineral_score: f64,
    pub calorie_score: f64,
    pub ingredient_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedHealthScores {
    pub overall_score: f64,
    pub component_scores: ComponentScores,
    pub score_explanation: String,
}

/// Health metrics block attached to a scored meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub health_score: f64,
    pub detailed_reasoning: String,
    #[serde(default)]
    pub dietary_flags: Vec<String>,
    pub calculated_health_scores: CalculatedHealthScores,
}

impl From<&HealthScores> for HealthMetrics {
    fn from(scores: &HealthScores) -> Self {
        Self {
            health_score: scores.overall_score,
            detailed_reasoning: scores.score_explanation.clone(),
            dietary_flags: Vec::new(),
            calculated_health_scores: CalculatedHealthScores {
                overall_score: scores.overall_score,
                component_scores: ComponentScores {
                    macronutrient_score: scores.macro_score,
                    vitamin_mineral_score: scores.vitamin_mineral_score,
                    calorie_score: scores.calorie_score,
                    ingredient_score: scores.ingredients_score,
                },
                score_explanation: scores.score_explanation.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_zero_are_distinct() {
        let macros: Macronutrients =
            serde_json::from_str(r#"{"fats": {"total": 0}, "protein": {}}"#).unwrap();
        assert_eq!(macros.fat_grams(), Some(0.0));
        assert_eq!(macros.protein_grams(), None);
        assert_eq!(macros.carb_grams(), None);
        assert_eq!(macros.calories, None);
    }

    #[test]
    fn test_unknown_micronutrient_keys_are_ignored() {
        let micros: Micronutrients = serde_json::from_str(
            r#"{"vitamins": {"c": 45, "k": 120}, "minerals": {"zinc": 8, "iron": 9}}"#,
        )
        .unwrap();
        let vitamins = micros.vitamins.unwrap();
        assert_eq!(vitamins.c, Some(45.0));
        assert_eq!(vitamins.a, None);
        assert_eq!(micros.minerals.unwrap().iron, Some(9.0));
    }

    #[test]
    fn test_usable_name() {
        assert_eq!(Ingredient::named("  kale ").usable_name(), Some("kale"));
        assert_eq!(Ingredient::named("   ").usable_name(), None);
        assert_eq!(Ingredient::default().usable_name(), None);
    }

    #[test]
    fn test_analysis_deserializes_minimal_payload() {
        let analysis: NutritionAnalysis = serde_json::from_str(
            r#"{
                "dish_name": "Oatmeal",
                "ingredients": [{"name": "whole oats", "estimated_amount": "50g", "allergen": false}],
                "macronutrients": {"calories": 300, "carbohydrates": {"total": 54}}
            }"#,
        )
        .unwrap();
        assert_eq!(analysis.dish_name, "Oatmeal");
        assert_eq!(analysis.ingredients.len(), 1);
        assert_eq!(analysis.macronutrients.carb_grams(), Some(54.0));
        assert!(analysis.micronutrients.is_none());
    }
}
