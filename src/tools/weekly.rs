//! Wearable data and weekly summary tools

use serde::Serialize;

use crate::db::Database;
use crate::models::{FoodEntry, HealthRecord, HealthRecordUpsert};
use crate::summary::{compose_script_prompt, WeeklySummary};

use super::validation::{parse_date, parse_date_range, validate_email, validate_score};

/// Response for record_health_metrics
#[derive(Debug, Serialize)]
pub struct RecordHealthMetricsResponse {
    pub id: i64,
    pub date: String,
    pub wellbeing: f64,
    pub activity: f64,
    pub sleep: f64,
    pub updated_at: String,
}

/// Response for weekly_summary
#[derive(Debug, Serialize)]
pub struct WeeklySummaryResponse {
    pub start_date: String,
    pub end_date: String,
    #[serde(flatten)]
    pub summary: WeeklySummary,
    pub script_prompt: String,
}

/// Store one day's wearable scores for a user
pub fn record_health_metrics(
    db: &Database,
    user_email: &str,
    date: &str,
    wellbeing: f64,
    activity: f64,
    sleep: f64,
) -> Result<RecordHealthMetricsResponse, String> {
    let data = HealthRecordUpsert {
        user_email: validate_email(user_email)?.to_string(),
        date: parse_date("date", date)?.format("%Y-%m-%d").to_string(),
        wellbeing: validate_score("wellbeing", wellbeing)?,
        activity: validate_score("activity", activity)?,
        sleep: validate_score("sleep", sleep)?,
    };

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let record = HealthRecord::upsert(&conn, &data)
        .map_err(|e| format!("Failed to record health metrics: {}", e))?;

    Ok(RecordHealthMetricsResponse {
        id: record.id,
        date: record.date,
        wellbeing: record.wellbeing,
        activity: record.activity,
        sleep: record.sleep,
        updated_at: record.updated_at,
    })
}

/// Summarise a period's meals and wearable data, with the video script prompt
pub fn weekly_summary(
    db: &Database,
    user_email: &str,
    start_date: &str,
    end_date: &str,
) -> Result<WeeklySummaryResponse, String> {
    let user_email = validate_email(user_email)?;
    let (start, end) = parse_date_range(start_date, end_date)?;
    let start = start.format("%Y-%m-%d").to_string();
    let end = end.format("%Y-%m-%d").to_string();

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let meals = FoodEntry::list_for_user_in_range(&conn, user_email, &start, &end)
        .map_err(|e| format!("Failed to fetch food data: {}", e))?;
    let records = HealthRecord::list_for_user_in_range(&conn, user_email, &start, &end)
        .map_err(|e| format!("Failed to fetch health data: {}", e))?;

    let today = chrono::Local::now().date_naive();
    let summary = WeeklySummary::compute(today, &meals, &records);
    let script_prompt = compose_script_prompt(&summary);

    tracing::info!(
        meals = meals.len(),
        days = records.len(),
        combined = summary.combined_health_score,
        "Built weekly summary"
    );

    Ok(WeeklySummaryResponse {
        start_date: start,
        end_date: end,
        summary,
        script_prompt,
    })
}
