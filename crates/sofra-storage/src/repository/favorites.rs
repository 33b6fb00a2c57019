//! Favorite foods repository.
//!
//! One row per food id, so re-adding an existing favorite is a no-op at the
//! set level (the snapshot is refreshed).

use rusqlite::{params, Connection, Row};
use sofra_core::Food;

use crate::error::Result;

/// Repository for favorite food operations.
pub struct FavoritesRepo;

impl FavoritesRepo {
    /// Add a food to favorites, replacing any stale snapshot.
    pub fn add(conn: &Connection, food: &Food) -> Result<()> {
        let food_json = serde_json::to_string(food)?;

        conn.execute(
            "INSERT INTO favorites (food_id, food) VALUES (?1, ?2)
             ON CONFLICT(food_id) DO UPDATE SET food = ?2",
            params![food.id, food_json],
        )?;

        Ok(())
    }

    /// Remove a favorite. Returns whether a row was deleted.
    pub fn remove(conn: &Connection, food_id: &str) -> Result<bool> {
        let deleted = conn.execute("DELETE FROM favorites WHERE food_id = ?1", [food_id])?;
        Ok(deleted > 0)
    }

    /// Check whether a food is a favorite.
    pub fn contains(conn: &Connection, food_id: &str) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE food_id = ?1",
            [food_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get all favorites, most recently added first.
    pub fn list(conn: &Connection) -> Result<Vec<Food>> {
        let mut stmt = conn.prepare(
            "SELECT food FROM favorites ORDER BY added_at DESC, food_id DESC",
        )?;

        let foods = stmt
            .query_map([], Self::row_to_food)?
            .filter_map(|r| r.ok())
            .flatten()
            .collect();

        Ok(foods)
    }

    fn row_to_food(row: &Row) -> rusqlite::Result<Option<Food>> {
        let food_json: String = row.get(0)?;
        Ok(serde_json::from_str(&food_json).ok())
    }
}
