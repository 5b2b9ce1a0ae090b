//! Macronutrient balance sub-score
//!
//! Each reported macro scores 100 when its share of calories falls inside
//! its ideal band and 50 otherwise; the sub-score is the plain mean.

use crate::models::Macronutrients;

use super::error::{finite, ScoreError, ScoreResult};
use super::types::{IdealMacros, MacroBand, SubScore};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

const IN_BAND_SCORE: f64 = 100.0;
const OUT_OF_BAND_SCORE: f64 = 50.0;

/// Percentage of calories a macro contributes, with its band score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroShare {
    pub label: &'static str,
    pub percent: f64,
    pub score: f64,
}

fn share(label: &'static str, kcal: f64, total_kcal: f64, band: &MacroBand) -> MacroShare {
    let percent = kcal / total_kcal * 100.0;
    let score = if band.contains(percent) {
        IN_BAND_SCORE
    } else {
        OUT_OF_BAND_SCORE
    };
    MacroShare {
        label,
        percent,
        score,
    }
}

/// Compute the shares of whichever macros were reported
pub fn macro_shares(macros: &Macronutrients, ideal: &IdealMacros) -> ScoreResult<Vec<MacroShare>> {
    let protein = finite(macros.protein_grams(), "protein.grams")?;
    let carbs = finite(macros.carb_grams(), "carbohydrates.total")?;
    let fat = finite(macros.fat_grams(), "fats.total")?;
    let calories = finite(macros.calories, "calories")?;

    let protein_kcal = protein.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN;
    let carb_kcal = carbs.unwrap_or(0.0) * KCAL_PER_GRAM_CARBS;
    let fat_kcal = fat.unwrap_or(0.0) * KCAL_PER_GRAM_FAT;

    // A reported 0 kcal carries no information, fall back to the macro sum
    let total_kcal = match calories {
        Some(kcal) if kcal != 0.0 => kcal,
        _ => protein_kcal + carb_kcal + fat_kcal,
    };

    if total_kcal == 0.0 {
        return Err(ScoreError::NoData("No calorie information available"));
    }

    let mut shares = Vec::with_capacity(3);
    if protein.is_some() {
        shares.push(share("Protein", protein_kcal, total_kcal, &ideal.protein));
    }
    if carbs.is_some() {
        shares.push(share("Carbs", carb_kcal, total_kcal, &ideal.carbs));
    }
    if fat.is_some() {
        shares.push(share("Fats", fat_kcal, total_kcal, &ideal.fats));
    }
    Ok(shares)
}

pub fn score_macros(macros: &Macronutrients, ideal: &IdealMacros) -> ScoreResult<SubScore> {
    let shares = macro_shares(macros, ideal)?;
    if shares.is_empty() {
        return Err(ScoreError::NoData("No macronutrient data available"));
    }

    let avg = shares.iter().map(|s| s.score).sum::<f64>() / shares.len() as f64;
    let parts: Vec<String> = shares
        .iter()
        .map(|s| format!("{}: {:.1}%", s.label, s.percent))
        .collect();

    Ok(SubScore::new(
        avg,
        format!("Macro distribution - {}", parts.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::ProteinBand;

    fn standard() -> IdealMacros {
        IdealMacros::default()
    }

    #[test]
    fn test_balanced_meal_scores_full() {
        // 25% protein, 50% carbs, 25% fat of 400 kcal
        let macros = Macronutrients::from_grams(Some(400.0), Some(25.0), Some(50.0), Some(100.0 / 9.0));
        let sub = score_macros(&macros, &standard()).unwrap();
        assert_eq!(sub.score, 100.0);
        assert!(sub.explanation.starts_with("Macro distribution - "));
        assert!(sub.explanation.contains("Protein: 25.0%"));
        assert!(sub.explanation.contains("Carbs: 50.0%"));
        assert!(sub.explanation.contains("Fats: 25.0%"));
    }

    #[test]
    fn test_mean_over_present_macros_only() {
        // Only carbs reported, and they are 100% of calories
        let macros = Macronutrients::from_grams(None, None, Some(50.0), None);
        let sub = score_macros(&macros, &standard()).unwrap();
        assert_eq!(sub.score, 50.0);
        assert!(!sub.explanation.contains("Protein"));
    }

    #[test]
    fn test_reported_calories_take_precedence() {
        // 30g protein = 120 kcal of 450 => 26.7%
        let macros = Macronutrients::from_grams(Some(450.0), Some(30.0), Some(50.0), Some(15.0));
        let shares = macro_shares(&macros, &standard()).unwrap();
        assert!((shares[0].percent - 26.666).abs() < 0.01);
        assert_eq!(shares[0].score, 100.0);
        // carbs 200/450 = 44.4%, just under the band
        assert_eq!(shares[1].score, 50.0);
        // fats 135/450 = 30%
        assert_eq!(shares[2].score, 100.0);

        let sub = score_macros(&macros, &standard()).unwrap();
        assert!((sub.score - 250.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_strict_protein_band() {
        // 15% protein passes the standard band but not the strict one
        let macros = Macronutrients::from_grams(Some(400.0), Some(15.0), None, None);
        let standard_sub = score_macros(&macros, &standard()).unwrap();
        let strict_sub = score_macros(&macros, &IdealMacros::for_band(ProteinBand::Strict)).unwrap();
        assert_eq!(standard_sub.score, 100.0);
        assert_eq!(strict_sub.score, 50.0);
    }

    #[test]
    fn test_zero_grams_is_reported_not_missing() {
        let macros = Macronutrients::from_grams(Some(300.0), None, None, Some(0.0));
        let sub = score_macros(&macros, &standard()).unwrap();
        assert_eq!(sub.score, 50.0);
        assert!(sub.explanation.contains("Fats: 0.0%"));
    }

    #[test]
    fn test_no_data_at_all() {
        let err = score_macros(&Macronutrients::default(), &standard()).unwrap_err();
        assert_eq!(err, ScoreError::NoData("No calorie information available"));
    }

    #[test]
    fn test_calories_without_macros() {
        let macros = Macronutrients::from_grams(Some(500.0), None, None, None);
        let err = score_macros(&macros, &standard()).unwrap_err();
        assert_eq!(err, ScoreError::NoData("No macronutrient data available"));
    }

    #[test]
    fn test_non_finite_grams_is_an_error() {
        let macros = Macronutrients::from_grams(Some(500.0), Some(f64::NAN), None, None);
        assert!(matches!(
            score_macros(&macros, &standard()),
            Err(ScoreError::NonFinite { field: "protein.grams" })
        ));
    }

    #[test]
    fn test_per_macro_scores_are_fifty_or_hundred() {
        let inputs = [
            (Some(-100.0), Some(10.0), Some(80.0), Some(5.0)),
            (None, Some(1.0), Some(1.0), Some(1.0)),
            (Some(2000.0), Some(200.0), Some(0.0), Some(90.0)),
        ];
        for (kcal, p, c, f) in inputs {
            let macros = Macronutrients::from_grams(kcal, p, c, f);
            for s in macro_shares(&macros, &standard()).unwrap() {
                assert!(s.score == 50.0 || s.score == 100.0);
            }
        }
    }
}
