//! NutriLens MCP Server Implementation
//!
//! Exposes meal scoring, the food log and the weekly summary as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::db::Database;
use crate::models::NutritionAnalysis;
use crate::scoring::HealthScoreCalculator;
use crate::tools::meals;
use crate::tools::status::StatusTracker;
use crate::tools::weekly;

/// NutriLens MCP Service
#[derive(Clone)]
pub struct NutrilensService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    calculator: HealthScoreCalculator,
    tool_router: ToolRouter<NutrilensService>,
}

impl NutrilensService {
    pub fn new(config: &AppConfig, database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                config.database_path.clone(),
                config.scoring,
            ))),
            database,
            calculator: HealthScoreCalculator::new(config.scoring),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn parse_analysis(value: serde_json::Value) -> Result<NutritionAnalysis, McpError> {
    serde_json::from_value(value)
        .map_err(|e| McpError::invalid_params(format!("Invalid nutrition data: {}", e), None))
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScoreMealParams {
    /// Nutrition breakdown: {dish_name, ingredients: [{name, estimated_amount, allergen}],
    /// macronutrients: {calories, protein: {grams}, carbohydrates: {total, fiber, sugars},
    /// fats: {total, saturated, unsaturated}}, micronutrients: {vitamins: {a, c, d, b12},
    /// minerals: {calcium, iron, potassium, sodium}}}. All numbers optional.
    pub nutrition: serde_json::Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMealParams {
    /// Email of the user whose food log receives the entry
    pub user_email: String,
    /// Nutrition breakdown, same shape as score_meal
    pub nutrition: serde_json::Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodEntriesParams {
    pub user_email: String,
    /// Start date (inclusive): YYYY-MM-DD
    pub start_date: String,
    /// End date (inclusive): YYYY-MM-DD
    pub end_date: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteFoodEntryParams {
    /// Food entry ID to delete
    pub id: i64,
}

// ============================================================================
// Health Data Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecordHealthMetricsParams {
    pub user_email: String,
    /// Date in ISO format: YYYY-MM-DD
    pub date: String,
    /// Wellbeing score, 0-100
    pub wellbeing: f64,
    /// Activity score, 0-100
    pub activity: f64,
    /// Sleep score, 0-100
    pub sleep: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeeklySummaryParams {
    pub user_email: String,
    /// Start date (inclusive): YYYY-MM-DD
    pub start_date: String,
    /// End date (inclusive): YYYY-MM-DD
    pub end_date: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutrilensService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriLens service including build info, scoring configuration, database status, and process information")]
    async fn nutrilens_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the meal scoring tools: expected nutrition JSON, how each score is computed, and which tool to use when.")]
    fn scoring_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SCORING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SCORING_INSTRUCTIONS)]))
    }

    // --- Meals ---

    #[tool(description = "Compute the 0-100 health score of a meal from its nutrition breakdown without saving it")]
    fn score_meal(&self, Parameters(p): Parameters<ScoreMealParams>) -> Result<CallToolResult, McpError> {
        let analysis = parse_analysis(p.nutrition)?;
        let result = meals::score_meal(&self.calculator, analysis)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Score a meal and save it to the user's food log")]
    fn log_meal(&self, Parameters(p): Parameters<LogMealParams>) -> Result<CallToolResult, McpError> {
        let analysis = parse_analysis(p.nutrition)?;
        let result = meals::log_meal(&self.database, &self.calculator, &p.user_email, analysis)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List a user's logged meals between two dates (inclusive), newest first")]
    fn list_food_entries(&self, Parameters(p): Parameters<ListFoodEntriesParams>) -> Result<CallToolResult, McpError> {
        let result = meals::list_food_entries(&self.database, &p.user_email, &p.start_date, &p.end_date)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Delete a logged meal")]
    fn delete_food_entry(&self, Parameters(p): Parameters<DeleteFoodEntryParams>) -> Result<CallToolResult, McpError> {
        let result = meals::delete_food_entry(&self.database, p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(deleted) => to_json(&deleted),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                r#"{{"error": "Food entry not found", "id": {}}}"#,
                p.id
            ))])),
        }
    }

    // --- Health data ---

    #[tool(description = "Record a day's wellbeing, activity and sleep scores (0-100) for a user. Replaces any existing record for that day.")]
    fn record_health_metrics(&self, Parameters(p): Parameters<RecordHealthMetricsParams>) -> Result<CallToolResult, McpError> {
        let result = weekly::record_health_metrics(
            &self.database, &p.user_email, &p.date, p.wellbeing, p.activity, p.sleep,
        )
        .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Summarise a user's meals and health data over a date range: averages, trends, best meal, avatar tier, and the prompt for the motivational video script")]
    fn weekly_summary(&self, Parameters(p): Parameters<WeeklySummaryParams>) -> Result<CallToolResult, McpError> {
        let result = weekly::weekly_summary(&self.database, &p.user_email, &p.start_date, &p.end_date)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutrilensService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrilens".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriLens".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriLens - meal health scoring and food log. \
                 Call scoring_instructions first for the nutrition JSON format. \
                 Meals: score_meal, log_meal, list_food_entries, delete_food_entry. \
                 Health data: record_health_metrics, weekly_summary. \
                 Status: nutrilens_status."
                    .into(),
            ),
        }
    }
}
