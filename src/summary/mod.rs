//! Weekly summary module
//!
//! Aggregates the food log and wearable data for the motivational video.

pub mod script;
pub mod weekly;

pub use script::{compose_script_prompt, MealVerdict};
pub use weekly::{AvatarTier, MealScore, PeriodStats, Trends, WeeklySummary};
