//! Meal scoring and food log tools
//!
//! Score a vision-model nutrition breakdown and keep a per-user food log.

use serde::Serialize;

use crate::db::Database;
use crate::models::{
    FoodEntry, FoodEntryCreate, HealthMetrics, Ingredient, Macronutrients, Micronutrients,
    NutritionAnalysis, ServingInfo,
};
use crate::scoring::{HealthScoreCalculator, HealthScores};

use super::validation::{parse_date_range, validate_email};

/// Nutrition breakdown merged with its health metrics
#[derive(Debug, Serialize)]
pub struct ScoredMeal {
    pub dish_name: String,
    pub ingredients: Vec<Ingredient>,
    pub serving_info: Option<ServingInfo>,
    pub macronutrients: Macronutrients,
    pub micronutrients: Option<Micronutrients>,
    pub health_metrics: HealthMetrics,
    pub health_scores: HealthScores,
}

/// Response for log_meal
#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub id: i64,
    pub user_email: String,
    pub created_at: String,
    pub meal: ScoredMeal,
}

/// Food entry summary for list results
#[derive(Debug, Serialize)]
pub struct FoodEntrySummary {
    pub id: i64,
    pub dish: String,
    pub health_score: f64,
    pub calories: Option<f64>,
    pub created_at: String,
}

impl From<&FoodEntry> for FoodEntrySummary {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            id: entry.id,
            dish: entry.dish.clone(),
            health_score: entry.health_score,
            calories: entry.macro_nutrients.calories,
            created_at: entry.created_at.clone(),
        }
    }
}

/// Response for list_food_entries
#[derive(Debug, Serialize)]
pub struct ListFoodEntriesResponse {
    pub user_email: String,
    pub start_date: String,
    pub end_date: String,
    pub entries: Vec<FoodEntrySummary>,
    pub count: usize,
    pub average_health_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFoodEntryResponse {
    pub success: bool,
    pub deleted_id: i64,
}

/// Score a nutrition breakdown without storing it
pub fn score_meal(
    calculator: &HealthScoreCalculator,
    analysis: NutritionAnalysis,
) -> Result<ScoredMeal, String> {
    let dish_name = analysis.dish_name.trim().to_string();
    if dish_name.is_empty() {
        return Err("dish_name cannot be empty".to_string());
    }

    let health_scores = calculator.calculate(
        &analysis.macronutrients,
        &analysis.ingredients,
        analysis.micronutrients.as_ref(),
    );

    tracing::info!(
        dish = %dish_name,
        overall = health_scores.overall_score,
        "Scored meal"
    );

    Ok(ScoredMeal {
        dish_name,
        ingredients: analysis.ingredients,
        serving_info: analysis.serving_info,
        macronutrients: analysis.macronutrients,
        micronutrients: analysis.micronutrients,
        health_metrics: HealthMetrics::from(&health_scores),
        health_scores,
    })
}

/// Score a meal and add it to the user's food log
pub fn log_meal(
    db: &Database,
    calculator: &HealthScoreCalculator,
    user_email: &str,
    analysis: NutritionAnalysis,
) -> Result<LogMealResponse, String> {
    let user_email = validate_email(user_email)?.to_string();
    let meal = score_meal(calculator, analysis)?;

    let data = FoodEntryCreate {
        user_email: user_email.clone(),
        dish: meal.dish_name.clone(),
        macro_nutrients: meal.macronutrients.clone(),
        health_score: meal.health_scores.overall_score,
        score_explanation: meal.health_scores.score_explanation.clone(),
        created_at: None,
    };

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let entry = FoodEntry::create(&conn, &data)
        .map_err(|e| format!("Failed to save food entry: {}", e))?;

    Ok(LogMealResponse {
        id: entry.id,
        user_email,
        created_at: entry.created_at,
        meal,
    })
}

/// List a user's food log between two dates (inclusive)
pub fn list_food_entries(
    db: &Database,
    user_email: &str,
    start_date: &str,
    end_date: &str,
) -> Result<ListFoodEntriesResponse, String> {
    let user_email = validate_email(user_email)?;
    let (start, end) = parse_date_range(start_date, end_date)?;
    let start = start.format("%Y-%m-%d").to_string();
    let end = end.format("%Y-%m-%d").to_string();

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let entries = FoodEntry::list_for_user_in_range(&conn, user_email, &start, &end)
        .map_err(|e| format!("Failed to list food entries: {}", e))?;

    let average_health_score = if entries.is_empty() {
        None
    } else {
        Some(entries.iter().map(|e| e.health_score).sum::<f64>() / entries.len() as f64)
    };

    Ok(ListFoodEntriesResponse {
        user_email: user_email.to_string(),
        start_date: start,
        end_date: end,
        count: entries.len(),
        entries: entries.iter().map(FoodEntrySummary::from).collect(),
        average_health_score,
    })
}

/// Delete a food entry. Returns Ok(None) if not found.
pub fn delete_food_entry(db: &Database, id: i64) -> Result<Option<DeleteFoodEntryResponse>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let deleted = FoodEntry::delete(&conn, id)
        .map_err(|e| format!("Failed to delete food entry: {}", e))?;

    Ok(deleted.then_some(DeleteFoodEntryResponse {
        success: true,
        deleted_id: id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::temp_database;

    fn analysis(dish: &str) -> NutritionAnalysis {
        NutritionAnalysis {
            dish_name: dish.to_string(),
            ingredients: vec![
                Ingredient::named("grilled chicken"),
                Ingredient::named("steamed broccoli"),
            ],
            serving_info: None,
            macronutrients: Macronutrients::from_grams(Some(450.0), Some(30.0), Some(50.0), Some(15.0)),
            micronutrients: None,
        }
    }

    #[test]
    fn test_score_meal_merges_metrics() {
        let meal = score_meal(&HealthScoreCalculator::default(), analysis("Chicken plate")).unwrap();
        assert_eq!(meal.health_metrics.health_score, meal.health_scores.overall_score);
        assert_eq!(
            meal.health_metrics.calculated_health_scores.component_scores.calorie_score,
            100.0
        );
        assert_eq!(meal.health_metrics.detailed_reasoning, meal.health_scores.score_explanation);
    }

    #[test]
    fn test_score_meal_requires_dish_name() {
        let err = score_meal(&HealthScoreCalculator::default(), analysis("   ")).unwrap_err();
        assert!(err.contains("dish_name"));
    }

    #[test]
    fn test_log_and_list_meals() {
        let (db, _guard) = temp_database("log_and_list");
        let calculator = HealthScoreCalculator::default();

        let logged = log_meal(&db, &calculator, "a@x.io", analysis("Chicken plate")).unwrap();
        assert!(logged.id > 0);

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let listed = list_food_entries(&db, "a@x.io", "2000-01-01", &today).unwrap();
        assert_eq!(listed.count, 1);
        assert_eq!(listed.entries[0].dish, "Chicken plate");
        assert_eq!(listed.entries[0].calories, Some(450.0));
        assert_eq!(listed.average_health_score, Some(logged.meal.health_scores.overall_score));

        let other = list_food_entries(&db, "b@x.io", "2000-01-01", &today).unwrap();
        assert_eq!(other.count, 0);
        assert!(other.average_health_score.is_none());
    }

    #[test]
    fn test_log_meal_rejects_bad_email() {
        let (db, _guard) = temp_database("bad_email");
        let err = log_meal(&db, &HealthScoreCalculator::default(), "nope", analysis("Soup")).unwrap_err();
        assert!(err.contains("user_email"));
    }

    #[test]
    fn test_delete_food_entry() {
        let (db, _guard) = temp_database("delete");
        let logged = log_meal(&db, &HealthScoreCalculator::default(), "a@x.io", analysis("Soup")).unwrap();
        assert!(delete_food_entry(&db, logged.id).unwrap().is_some());
        assert!(delete_food_entry(&db, logged.id).unwrap().is_none());
    }
}
