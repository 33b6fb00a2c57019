//! Suggestion history repository.
//!
//! Rows carry a full JSON snapshot of the food so old entries stay readable
//! after the catalog changes. Rows whose snapshot no longer parses are
//! skipped on read, never surfaced as errors.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use sofra_core::{HistoryItem, Mood, HISTORY_LIMIT};

use crate::error::Result;

/// Repository for suggestion history operations.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Insert a history entry and evict the oldest rows past the cap.
    pub fn insert(conn: &Connection, item: &HistoryItem) -> Result<()> {
        let food_json = serde_json::to_string(&item.food)?;

        conn.execute(
            "INSERT OR REPLACE INTO history (id, food, food_id, mood, city, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                item.id,
                food_json,
                item.food.id,
                item.mood.as_str(),
                item.city,
                item.date.to_rfc3339(),
            ],
        )?;

        conn.execute(
            "DELETE FROM history WHERE id NOT IN (
                SELECT id FROM history ORDER BY created_at DESC, id DESC LIMIT ?1
             )",
            [HISTORY_LIMIT as i64],
        )?;

        Ok(())
    }

    /// Get history entries, newest first.
    pub fn list(conn: &Connection, limit: i64) -> Result<Vec<HistoryItem>> {
        let mut stmt = conn.prepare(
            "SELECT id, food, mood, city, created_at
             FROM history ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let items = stmt
            .query_map([limit], Self::row_to_item)?
            .filter_map(|r| r.ok())
            .flatten()
            .collect();

        Ok(items)
    }

    /// Food ids of the most recent entries, newest first, duplicates kept.
    pub fn recent_food_ids(conn: &Connection, limit: i64) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT food_id FROM history ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let ids = stmt
            .query_map([limit], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(ids)
    }

    /// Count all history entries.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete all history entries.
    pub fn clear(conn: &Connection) -> Result<i64> {
        let deleted = conn.execute("DELETE FROM history", [])?;
        Ok(deleted as i64)
    }

    fn row_to_item(row: &Row) -> rusqlite::Result<Option<HistoryItem>> {
        let food_json: String = row.get(1)?;
        let mood_str: String = row.get(2)?;
        let date_str: String = row.get(4)?;

        let food = match serde_json::from_str(&food_json) {
            Ok(food) => food,
            Err(_) => return Ok(None),
        };
        let mood = match Mood::parse(&mood_str) {
            Some(mood) => mood,
            None => return Ok(None),
        };
        let date = DateTime::parse_from_rfc3339(&date_str)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Some(HistoryItem {
            id: row.get(0)?,
            food,
            mood,
            date,
            city: row.get(3)?,
        }))
    }
}
