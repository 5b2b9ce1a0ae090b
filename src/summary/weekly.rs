//! Weekly health summary
//!
//! Folds a period's food log and wearable records into the averages, trends
//! and highlights used to brief the motivational video script.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FoodEntry, HealthRecord};

const RECENT_MEAL_COUNT: usize = 3;

/// Avatar variant shown in the video, picked by the wearable averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarTier {
    High,
    Medium,
    Low,
}

impl AvatarTier {
    /// Tier for the mean of the wellbeing, activity and sleep averages
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            AvatarTier::High
        } else if score >= 70.0 {
            AvatarTier::Medium
        } else {
            AvatarTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealScore {
    pub dish: String,
    pub health_score: f64,
}

impl From<&FoodEntry> for MealScore {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            dish: entry.dish.clone(),
            health_score: entry.health_score,
        }
    }
}

/// Latest record minus the period average; positive means improving
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trends {
    pub wellbeing_trend: f64,
    pub activity_trend: f64,
    pub sleep_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    pub total_meals: usize,
    pub days_tracked: usize,
    pub best_meal: Option<MealScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub date: String,
    pub combined_health_score: i64,
    pub wellbeing: i64,
    pub activity: i64,
    pub sleep: i64,
    pub food_score: i64,
    pub recent_meals: Vec<MealScore>,
    pub trends: Trends,
    pub stats: PeriodStats,
    pub avatar: AvatarTier,
}

fn rounded_mean(values: impl Iterator<Item = f64>) -> i64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0
    } else {
        (sum / count as f64).round() as i64
    }
}

impl WeeklySummary {
    /// Build the summary. Both slices must be ordered newest first.
    pub fn compute(date: NaiveDate, meals: &[FoodEntry], records: &[HealthRecord]) -> Self {
        let food_score = rounded_mean(meals.iter().map(|m| m.health_score));
        let wellbeing = rounded_mean(records.iter().map(|r| r.wellbeing));
        let activity = rounded_mean(records.iter().map(|r| r.activity));
        let sleep = rounded_mean(records.iter().map(|r| r.sleep));

        let trends = match records.first() {
            Some(latest) => Trends {
                wellbeing_trend: latest.wellbeing - wellbeing as f64,
                activity_trend: latest.activity - activity as f64,
                sleep_trend: latest.sleep - sleep as f64,
            },
            None => Trends {
                wellbeing_trend: 0.0,
                activity_trend: 0.0,
                sleep_trend: 0.0,
            },
        };

        let combined_health_score =
            ((wellbeing + activity + sleep + food_score) as f64 / 4.0).round() as i64;

        let mut best_meal: Option<&FoodEntry> = None;
        for meal in meals {
            let best_score = best_meal.map(|b| b.health_score).unwrap_or(0.0);
            if meal.health_score > best_score {
                best_meal = Some(meal);
            }
        }

        let avatar = AvatarTier::for_score((wellbeing + activity + sleep) as f64 / 3.0);

        Self {
            date: date.format("%Y-%m-%d").to_string(),
            combined_health_score,
            wellbeing,
            activity,
            sleep,
            food_score,
            recent_meals: meals.iter().take(RECENT_MEAL_COUNT).map(MealScore::from).collect(),
            trends,
            stats: PeriodStats {
                total_meals: meals.len(),
                days_tracked: records.len(),
                best_meal: best_meal.map(MealScore::from),
            },
            avatar,
        }
    }
}
