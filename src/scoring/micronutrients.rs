//! Vitamin and mineral sub-score
//!
//! Scores each reported micronutrient against its reference daily value.
//! Sodium is inverted: the less of the daily value a meal uses, the better.

use crate::models::{Micronutrients, Minerals, Vitamins};

use super::error::{finite, ScoreError, ScoreResult};
use super::types::SubScore;

/// Score at or above which a nutrient is called out as a good source
pub const GOOD_SOURCE_THRESHOLD: f64 = 50.0;

const NO_DATA: &str = "No vitamin/mineral data available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientKind {
    Vitamin,
    Mineral,
    /// Minerals where a lower intake scores higher
    InverseMineral,
}

/// Every micronutrient the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminB12,
    Calcium,
    Iron,
    Potassium,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 8] = [
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminB12,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Potassium,
        Nutrient::Sodium,
    ];

    /// Reference daily value, in the same units the amount is reported in
    pub fn daily_value(&self) -> f64 {
        match self {
            Nutrient::VitaminA => 900.0,
            Nutrient::VitaminC => 90.0,
            Nutrient::VitaminD => 20.0,
            Nutrient::VitaminB12 => 2.4,
            Nutrient::Calcium => 1000.0,
            Nutrient::Iron => 18.0,
            Nutrient::Potassium => 3500.0,
            Nutrient::Sodium => 2300.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Potassium => "Potassium",
            Nutrient::Sodium => "Sodium",
        }
    }

    /// JSON key in the micronutrient payload
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::VitaminA => "vitamins.a",
            Nutrient::VitaminC => "vitamins.c",
            Nutrient::VitaminD => "vitamins.d",
            Nutrient::VitaminB12 => "vitamins.b12",
            Nutrient::Calcium => "minerals.calcium",
            Nutrient::Iron => "minerals.iron",
            Nutrient::Potassium => "minerals.potassium",
            Nutrient::Sodium => "minerals.sodium",
        }
    }

    pub fn kind(&self) -> NutrientKind {
        match self {
            Nutrient::VitaminA | Nutrient::VitaminC | Nutrient::VitaminD | Nutrient::VitaminB12 => {
                NutrientKind::Vitamin
            }
            Nutrient::Sodium => NutrientKind::InverseMineral,
            Nutrient::Calcium | Nutrient::Iron | Nutrient::Potassium => NutrientKind::Mineral,
        }
    }

    /// Reported amount for this nutrient, if any
    pub fn amount(&self, micros: &Micronutrients) -> Option<f64> {
        let vitamins = micros.vitamins.as_ref();
        let minerals = micros.minerals.as_ref();
        match self {
            Nutrient::VitaminA => vitamins.and_then(|v: &Vitamins| v.a),
            Nutrient::VitaminC => vitamins.and_then(|v| v.c),
            Nutrient::VitaminD => vitamins.and_then(|v| v.d),
            Nutrient::VitaminB12 => vitamins.and_then(|v| v.b12),
            Nutrient::Calcium => minerals.and_then(|m: &Minerals| m.calcium),
            Nutrient::Iron => minerals.and_then(|m| m.iron),
            Nutrient::Potassium => minerals.and_then(|m| m.potassium),
            Nutrient::Sodium => minerals.and_then(|m| m.sodium),
        }
    }

    /// Score a positive amount against the daily value
    pub fn score(&self, amount: f64) -> f64 {
        let pct_dv = amount / self.daily_value() * 100.0;
        match self.kind() {
            NutrientKind::InverseMineral => (100.0 - pct_dv).max(0.0),
            NutrientKind::Vitamin | NutrientKind::Mineral => pct_dv.min(100.0),
        }
    }
}

pub fn score_micronutrients(micros: Option<&Micronutrients>) -> ScoreResult<SubScore> {
    let micros = micros.ok_or(ScoreError::NoData(NO_DATA))?;

    let mut scores = Vec::new();
    let mut good_sources = Vec::new();

    for nutrient in Nutrient::ALL {
        let amount = match finite(nutrient.amount(micros), nutrient.key())? {
            Some(amount) if amount > 0.0 => amount,
            _ => continue,
        };
        let score = nutrient.score(amount);
        scores.push(score);
        if score >= GOOD_SOURCE_THRESHOLD {
            good_sources.push(nutrient.label());
        }
    }

    if scores.is_empty() {
        return Err(ScoreError::NoData(NO_DATA));
    }

    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    let explanation = if good_sources.is_empty() {
        "Limited vitamin/mineral content".to_string()
    } else {
        format!("Good sources of: {}", good_sources.join(", "))
    };

    Ok(SubScore::new(avg, explanation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitamins(v: Vitamins) -> Micronutrients {
        Micronutrients {
            vitamins: Some(v),
            minerals: None,
        }
    }

    fn minerals(m: Minerals) -> Micronutrients {
        Micronutrients {
            vitamins: None,
            minerals: Some(m),
        }
    }

    #[test]
    fn test_missing_object() {
        let err = score_micronutrients(None).unwrap_err();
        assert_eq!(err, ScoreError::NoData(NO_DATA));
    }

    #[test]
    fn test_empty_object() {
        let err = score_micronutrients(Some(&Micronutrients::default())).unwrap_err();
        assert_eq!(err, ScoreError::NoData(NO_DATA));
    }

    #[test]
    fn test_full_vitamin_c() {
        let micros = vitamins(Vitamins {
            c: Some(90.0),
            ..Vitamins::default()
        });
        let sub = score_micronutrients(Some(&micros)).unwrap();
        assert_eq!(sub.score, 100.0);
        assert!(sub.explanation.contains("Vitamin C"));
    }

    #[test]
    fn test_vitamin_capped_at_hundred() {
        let micros = vitamins(Vitamins {
            b12: Some(24.0),
            ..Vitamins::default()
        });
        let sub = score_micronutrients(Some(&micros)).unwrap();
        assert_eq!(sub.score, 100.0);
        assert!(sub.explanation.contains("Vitamin B12"));
    }

    #[test]
    fn test_double_sodium_scores_zero() {
        let micros = minerals(Minerals {
            sodium: Some(4600.0),
            ..Minerals::default()
        });
        let sub = score_micronutrients(Some(&micros)).unwrap();
        assert_eq!(sub.score, 0.0);
        assert!(!sub.explanation.contains("Sodium"));
        assert_eq!(sub.explanation, "Limited vitamin/mineral content");
    }

    #[test]
    fn test_low_sodium_is_a_good_source() {
        let micros = minerals(Minerals {
            sodium: Some(230.0),
            ..Minerals::default()
        });
        let sub = score_micronutrients(Some(&micros)).unwrap();
        assert!((sub.score - 90.0).abs() < 1e-9);
        assert!(sub.explanation.contains("Sodium"));
    }

    #[test]
    fn test_mean_across_vitamins_and_minerals() {
        let micros = Micronutrients {
            vitamins: Some(Vitamins {
                c: Some(45.0), // 50
                ..Vitamins::default()
            }),
            minerals: Some(Minerals {
                iron: Some(1.8),        // 10
                calcium: Some(1000.0),  // 100
                potassium: Some(0.0),   // skipped
                ..Minerals::default()
            }),
        };
        let sub = score_micronutrients(Some(&micros)).unwrap();
        assert!((sub.score - 160.0 / 3.0).abs() < 1e-9);
        assert_eq!(sub.explanation, "Good sources of: Vitamin C, Calcium");
    }

    #[test]
    fn test_negative_amounts_skipped() {
        let micros = vitamins(Vitamins {
            a: Some(-900.0),
            ..Vitamins::default()
        });
        assert!(score_micronutrients(Some(&micros)).is_err());
    }

    #[test]
    fn test_non_finite_amount_is_an_error() {
        let micros = minerals(Minerals {
            iron: Some(f64::INFINITY),
            ..Minerals::default()
        });
        assert_eq!(
            score_micronutrients(Some(&micros)).unwrap_err(),
            ScoreError::NonFinite { field: "minerals.iron" }
        );
    }
}
