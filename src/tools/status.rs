//! Status tool
//!
//! Runtime status of the NutriLens service and the usage guide for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::scoring::{ScoringConfig, WeightPolicy};

/// Meal scoring instructions for AI assistants
pub const SCORING_INSTRUCTIONS: &str = r#"
# NutriLens Meal Scoring Instructions

## Input

Pass the nutrition breakdown of one meal as produced by image analysis:

```json
{
  "dish_name": "Chicken rice bowl",
  "ingredients": [{"name": "grilled chicken", "estimated_amount": "120g", "allergen": false}],
  "macronutrients": {
    "calories": 450,
    "protein": {"grams": 30},
    "carbohydrates": {"total": 50, "fiber": 4, "sugars": 3},
    "fats": {"total": 15}
  },
  "micronutrients": {
    "vitamins": {"a": 120, "c": 30},
    "minerals": {"sodium": 600, "iron": 3}
  }
}
```

Every number is optional. Leave a field out when it is unknown; a `0` means
"reported as zero" and is scored as such.

## Scores

| Component | Weight | What it rewards |
|-----------|--------|-----------------|
| Macronutrients | 0.35 | protein 10-35%, carbs 45-65%, fat 20-35% of calories |
| Vitamins/Minerals | 0.25 | meeting daily values; sodium is scored inversely |
| Calories | 0.20 | 201-500 kcal scores best |
| Ingredients | 0.20 | words like fresh/whole/organic; penalises fried/processed |

A component with no usable data scores 0. With the adaptive weight policy it
is left out and the other weights are rescaled.

## Tools

- `score_meal` - score without saving
- `log_meal` - score and save to the user's food log
- `list_food_entries` / `delete_food_entry` - manage the log
- `record_health_metrics` - store a day's wellbeing/activity/sleep (0-100)
- `weekly_summary` - period averages, trends, and the video script prompt
"#;

/// Status information
#[derive(Debug, Serialize)]
pub struct NutrilensStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub weight_policy: WeightPolicy,
    pub protein_band_percent: (f64, f64),
}

/// Tracks service start time and configuration for status reports
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    scoring: ScoringConfig,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, scoring: ScoringConfig) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            scoring,
        }
    }

    pub fn get_status(&self) -> NutrilensStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let protein = self.scoring.ideal_macros.protein;

        NutrilensStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            weight_policy: self.scoring.policy,
            protein_band_percent: (protein.min, protein.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/nutrilens.db"), ScoringConfig::default());
        let status = tracker.get_status();
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.weight_policy, WeightPolicy::Adaptive);
        assert_eq!(status.protein_band_percent, (10.0, 35.0));
        assert_eq!(status.process_id, std::process::id());
    }
}
