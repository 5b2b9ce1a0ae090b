//! Data models
//!
//! Meal nutrition payloads and the database entities of the food log.

mod food_entry;
mod health_record;
mod nutrition;

pub use food_entry::{FoodEntry, FoodEntryCreate};
pub use health_record::{HealthRecord, HealthRecordUpsert};
pub use nutrition::{
    CalculatedHealthScores, Carbohydrates, ComponentScores, Fats, HealthMetrics, Ingredient,
    Macronutrients, Micronutrients, Minerals, NutritionAnalysis, Protein, ServingInfo, Vitamins,
};
