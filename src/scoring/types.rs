//! Scoring types
//!
//! Result shapes and tunables for the health score calculator.

use serde::{Deserialize, Serialize};

/// Lower bound of every score
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of every score
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a score into [0, 100], mapping NaN to 0
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Composite health score for one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScores {
    pub macro_score: f64,
    pub vitamin_mineral_score: f64,
    pub calorie_score: f64,
    pub ingredients_score: f64,
    pub overall_score: f64,
    pub score_explanation: String,
}

/// One scored dimension. A score of exactly 0 means "no usable data".
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub score: f64,
    pub explanation: String,
}

impl SubScore {
    pub fn new(score: f64, explanation: impl Into<String>) -> Self {
        Self {
            score: clamp_score(score),
            explanation: explanation.into(),
        }
    }

    /// The sentinel "nothing to score" result
    pub fn unavailable(explanation: impl Into<String>) -> Self {
        Self {
            score: MIN_SCORE,
            explanation: explanation.into(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.score > MIN_SCORE
    }
}

/// Relative weight of each sub-score in the composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub macros: f64,
    pub vitamins_minerals: f64,
    pub calories: f64,
    pub ingredients: f64,
}

impl ScoringWeights {
    pub const BASE: ScoringWeights = ScoringWeights {
        macros: 0.35,
        vitamins_minerals: 0.25,
        calories: 0.20,
        ingredients: 0.20,
    };

    pub fn total(&self) -> f64 {
        self.macros + self.vitamins_minerals + self.calories + self.ingredients
    }

    /// Scale every weight so they sum to 1. A zero total is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return *self;
        }
        let factor = 1.0 / total;
        Self {
            macros: self.macros * factor,
            vitamins_minerals: self.vitamins_minerals * factor,
            calories: self.calories * factor,
            ingredients: self.ingredients * factor,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::BASE
    }
}

/// Inclusive percentage-of-calories band considered ideal for a macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBand {
    pub min: f64,
    pub max: f64,
}

impl MacroBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.min && pct <= self.max
    }
}

/// Which protein band to score against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinBand {
    /// 10% to 35% of calories
    #[default]
    Standard,
    /// 20% to 35% of calories
    Strict,
}

impl ProteinBand {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(ProteinBand::Standard),
            "strict" => Some(ProteinBand::Strict),
            _ => None,
        }
    }

    pub fn band(&self) -> MacroBand {
        match self {
            ProteinBand::Standard => MacroBand::new(10.0, 35.0),
            ProteinBand::Strict => MacroBand::new(20.0, 35.0),
        }
    }
}

/// Ideal macronutrient distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealMacros {
    pub protein: MacroBand,
    pub carbs: MacroBand,
    pub fats: MacroBand,
}

impl IdealMacros {
    pub fn for_band(protein: ProteinBand) -> Self {
        Self {
            protein: protein.band(),
            carbs: MacroBand::new(45.0, 65.0),
            fats: MacroBand::new(20.0, 35.0),
        }
    }
}

impl Default for IdealMacros {
    fn default() -> Self {
        Self::for_band(ProteinBand::Standard)
    }
}

/// How missing dimensions affect the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Zero sub-scores drop out and the remaining weights are rescaled to 1
    #[default]
    Adaptive,
    /// Base weights always apply, so missing data pulls the score down
    Fixed,
}

impl WeightPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "adaptive" => Some(WeightPolicy::Adaptive),
            "fixed" => Some(WeightPolicy::Fixed),
            _ => None,
        }
    }
}

/// Full calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub ideal_macros: IdealMacros,
    pub policy: WeightPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_weights_sum_to_one() {
        assert!((ScoringWeights::BASE.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_weights() {
        let partial = ScoringWeights {
            macros: 0.0,
            vitamins_minerals: 0.0,
            calories: 0.20,
            ingredients: 0.20,
        };
        let normalized = partial.normalized();
        assert!((normalized.calories - 0.5).abs() < 1e-9);
        assert!((normalized.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(130.0), 100.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }

    #[test]
    fn test_protein_bands() {
        assert!(ProteinBand::Standard.band().contains(12.0));
        assert!(!ProteinBand::Strict.band().contains(12.0));
        assert!(ProteinBand::Strict.band().contains(35.0));
        assert_eq!(ProteinBand::from_str("STRICT"), Some(ProteinBand::Strict));
        assert_eq!(ProteinBand::from_str("loose"), None);
    }

    #[test]
    fn test_health_scores_serialize_camel_case() {
        let scores = HealthScores {
            macro_score: 1.0,
            vitamin_mineral_score: 2.0,
            calorie_score: 3.0,
            ingredients_score: 4.0,
            overall_score: 5.0,
            score_explanation: String::new(),
        };
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["macroScore"], 1.0);
        assert_eq!(json["vitaminMineralScore"], 2.0);
        assert_eq!(json["ingredientsScore"], 4.0);
        assert_eq!(json["scoreExplanation"], "");
    }
}
