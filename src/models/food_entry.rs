//! Food log entry model
//!
//! The persisted summary of one scored meal.

use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::Macronutrients;

/// A scored meal in a user's food log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub user_email: String,
    pub dish: String,
    pub macro_nutrients: Macronutrients,
    pub health_score: f64,
    pub score_explanation: String,
    pub created_at: String,
}

/// Data for creating a new food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntryCreate {
    pub user_email: String,
    pub dish: String,
    pub macro_nutrients: Macronutrients,
    pub health_score: f64,
    pub score_explanation: String,
    /// Defaults to the current time when not given
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FoodEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let macros_json: String = row.get("macro_nutrients")?;
        let macro_nutrients = serde_json::from_str(&macros_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
        })?;

        Ok(Self {
            id: row.get("id")?,
            user_email: row.get("user_email")?,
            dish: row.get("dish")?,
            macro_nutrients,
            health_score: row.get("health_score")?,
            score_explanation: row.get("score_explanation")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new food entry
    pub fn create(conn: &Connection, data: &FoodEntryCreate) -> DbResult<Self> {
        let macros_json = serde_json::to_string(&data.macro_nutrients).map_err(|e| {
            crate::db::DbError::Sqlite(rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        })?;

        conn.execute(
            r#"
            INSERT INTO food_entries (
                user_email, dish, macro_nutrients, health_score, score_explanation, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, COALESCE(?6, datetime('now')))
            "#,
            params![
                data.user_email,
                data.dish,
                macros_json,
                data.health_score,
                data.score_explanation,
                data.created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM food_entries WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries for a user whose date falls within [start_date, end_date], newest first
    pub fn list_for_user_in_range(
        conn: &Connection,
        user_email: &str,
        start_date: &str,
        end_date: &str,
    ) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT * FROM food_entries
            WHERE user_email = ?1
              AND date(created_at) >= date(?2)
              AND date(created_at) <= date(?3)
            ORDER BY created_at DESC, id DESC
            "#,
        )?;

        let entries = stmt
            .query_map(params![user_email, start_date, end_date], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Returns Ok(true) if deleted, Ok(false) if not found
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM food_entries WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}
