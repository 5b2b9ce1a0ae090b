//! Daily health record model
//!
//! Wellbeing, activity and sleep scores (0-100) reported by a wearable
//! provider, one row per user per day.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: i64,
    pub user_email: String,
    pub date: String,
    pub wellbeing: f64,
    pub activity: f64,
    pub sleep: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for recording a day's scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecordUpsert {
    pub user_email: String,
    pub date: String,
    pub wellbeing: f64,
    pub activity: f64,
    pub sleep: f64,
}

impl HealthRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_email: row.get("user_email")?,
            date: row.get("date")?,
            wellbeing: row.get("wellbeing")?,
            activity: row.get("activity")?,
            sleep: row.get("sleep")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Insert or replace the scores for (user_email, date)
    pub fn upsert(conn: &Connection, data: &HealthRecordUpsert) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO health_records (user_email, date, wellbeing, activity, sleep)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_email, date) DO UPDATE SET
                wellbeing = excluded.wellbeing,
                activity = excluded.activity,
                sleep = excluded.sleep,
                updated_at = datetime('now')
            "#,
            params![data.user_email, data.date, data.wellbeing, data.activity, data.sleep],
        )?;

        Self::get_by_user_and_date(conn, &data.user_email, &data.date)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_user_and_date(
        conn: &Connection,
        user_email: &str,
        date: &str,
    ) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM health_records WHERE user_email = ?1 AND date = ?2",
        )?;

        let result = stmt.query_row(params![user_email, date], Self::from_row);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Records for a user within [start_date, end_date], newest first
    pub fn list_for_user_in_range(
        conn: &Connection,
        user_email: &str,
        start_date: &str,
        end_date: &str,
    ) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT * FROM health_records
            WHERE user_email = ?1 AND date >= ?2 AND date <= ?3
            ORDER BY date DESC
            "#,
        )?;

        let records = stmt
            .query_map(params![user_email, start_date, end_date], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
