//! High-level database interface.

use std::path::PathBuf;

use directories::ProjectDirs;
use sofra_core::{
    Food, HistoryItem, Quota, QuotaCounter, QuotaStore, QuotaStoreError, UserPreferences,
};
use tracing::info;

use crate::error::{Result, StorageError};
use crate::pool::ConnectionPool;
use crate::repository::{ConfigRepo, FavoritesRepo, HistoryRepo, QuotaRepo};

/// Config key the preferences document is stored under.
const PREFERENCES_KEY: &str = "preferences";

/// High-level database interface for Sofra.
#[derive(Clone)]
pub struct Database {
    pool: ConnectionPool,
}

impl Database {
    /// Create a new database in the default app data directory.
    pub fn new() -> Result<Self> {
        let path = Self::default_db_path()?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database at: {:?}", path);
        let pool = ConnectionPool::new(&path)?;

        Ok(Self { pool })
    }

    /// Create a new database at a specific path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database at: {:?}", path);
        let pool = ConnectionPool::new(&path)?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        let pool = ConnectionPool::in_memory()?;
        Ok(Self { pool })
    }

    /// Get the default database path.
    pub fn default_db_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "sofra", "sofra")
            .ok_or_else(|| StorageError::Config("Could not determine app data directory".into()))?;

        Ok(proj_dirs.data_dir().join("sofra.db"))
    }

    // === Preferences ===

    /// Get the stored preferences, or defaults when nothing is stored yet.
    pub fn preferences(&self) -> Result<UserPreferences> {
        let conn = self.pool.get()?;
        ConfigRepo::get_or_default(&conn, PREFERENCES_KEY, UserPreferences::default())
    }

    /// Persist the full preferences document.
    pub fn save_preferences(&self, prefs: &UserPreferences) -> Result<()> {
        let conn = self.pool.get()?;
        ConfigRepo::set(&conn, PREFERENCES_KEY, &serde_json::to_value(prefs)?)
    }

    /// Drop stored preferences, reverting to defaults.
    pub fn reset_preferences(&self) -> Result<bool> {
        let conn = self.pool.get()?;
        ConfigRepo::delete(&conn, PREFERENCES_KEY)
    }

    // === History ===

    /// Record a suggestion pick, evicting the oldest entries past the cap.
    pub fn add_to_history(&self, item: &HistoryItem) -> Result<()> {
        let conn = self.pool.get()?;
        HistoryRepo::insert(&conn, item)
    }

    /// Get history entries, newest first.
    pub fn history(&self, limit: i64) -> Result<Vec<HistoryItem>> {
        let conn = self.pool.get()?;
        HistoryRepo::list(&conn, limit)
    }

    /// Food ids of the most recently picked suggestions, newest first.
    pub fn recent_food_ids(&self, limit: i64) -> Result<Vec<String>> {
        let conn = self.pool.get()?;
        HistoryRepo::recent_food_ids(&conn, limit)
    }

    /// Delete all history entries. Returns how many were removed.
    pub fn clear_history(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        HistoryRepo::clear(&conn)
    }

    // === Favorites ===

    /// Add a food to favorites.
    pub fn add_favorite(&self, food: &Food) -> Result<()> {
        let conn = self.pool.get()?;
        FavoritesRepo::add(&conn, food)
    }

    /// Remove a favorite. Returns whether it existed.
    pub fn remove_favorite(&self, food_id: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        FavoritesRepo::remove(&conn, food_id)
    }

    /// Toggle a favorite. Returns whether the food is a favorite afterwards.
    pub fn toggle_favorite(&self, food: &Food) -> Result<bool> {
        let conn = self.pool.get()?;
        if FavoritesRepo::contains(&conn, &food.id)? {
            FavoritesRepo::remove(&conn, &food.id)?;
            Ok(false)
        } else {
            FavoritesRepo::add(&conn, food)?;
            Ok(true)
        }
    }

    /// Check whether a food is a favorite.
    pub fn is_favorite(&self, food_id: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        FavoritesRepo::contains(&conn, food_id)
    }

    /// Get all favorites, most recently added first.
    pub fn favorites(&self) -> Result<Vec<Food>> {
        let conn = self.pool.get()?;
        FavoritesRepo::list(&conn)
    }
}

impl QuotaStore for Database {
    fn load_counter(&self, quota: Quota) -> std::result::Result<Option<QuotaCounter>, QuotaStoreError> {
        let conn = self.pool.get().map_err(|e| QuotaStoreError(e.to_string()))?;
        QuotaRepo::get(&conn, quota).map_err(|e| QuotaStoreError(e.to_string()))
    }

    fn save_counter(
        &self,
        quota: Quota,
        counter: QuotaCounter,
    ) -> std::result::Result<(), QuotaStoreError> {
        let conn = self.pool.get().map_err(|e| QuotaStoreError(e.to_string()))?;
        QuotaRepo::set(&conn, quota, counter).map_err(|e| QuotaStoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sofra_core::catalog::seed_catalog;
    use sofra_core::{Mood, RateLimiter};

    #[test]
    fn test_preferences_roundtrip() {
        let db = Database::in_memory().unwrap();

        // Nothing stored yet: defaults
        let prefs = db.preferences().unwrap();
        assert!(!prefs.is_vegetarian);

        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);
        db.save_preferences(&prefs).unwrap();

        let loaded = db.preferences().unwrap();
        assert!(loaded.is_vegan);
        assert!(loaded.is_vegetarian);

        db.reset_preferences().unwrap();
        assert!(!db.preferences().unwrap().is_vegan);
    }

    #[test]
    fn test_history_roundtrip() {
        let db = Database::in_memory().unwrap();
        let food = seed_catalog().into_iter().next().unwrap();
        let food_id = food.id.clone();

        let item = HistoryItem::new(food, Mood::Happy, Some("Izmir".into()));
        db.add_to_history(&item).unwrap();

        let history = db.history(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].food.id, food_id);

        assert_eq!(db.recent_food_ids(10).unwrap(), vec![food_id]);

        assert_eq!(db.clear_history().unwrap(), 1);
        assert!(db.history(10).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_favorite() {
        let db = Database::in_memory().unwrap();
        let food = seed_catalog().into_iter().next().unwrap();

        assert!(db.toggle_favorite(&food).unwrap());
        assert!(db.is_favorite(&food.id).unwrap());

        assert!(!db.toggle_favorite(&food).unwrap());
        assert!(!db.is_favorite(&food.id).unwrap());
        assert!(db.favorites().unwrap().is_empty());
    }

    #[test]
    fn test_database_backs_the_rate_limiter() {
        let db = Database::in_memory().unwrap();
        let limiter = RateLimiter::new(db);

        let first = limiter.check_and_increment(Quota::Ai, 2);
        assert!(first.allowed);
        assert_eq!(first.remaining, 1);

        let second = limiter.check_and_increment(Quota::Ai, 2);
        assert!(second.allowed);
        assert_eq!(second.remaining, 0);

        assert!(!limiter.check_and_increment(Quota::Ai, 2).allowed);

        // The other quota is untouched.
        assert_eq!(limiter.remaining(Quota::Places, 5), 5);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sofra.db");

        {
            let db = Database::with_path(&path).unwrap();
            let mut prefs = UserPreferences::default();
            prefs.set_gluten_free(true);
            db.save_preferences(&prefs).unwrap();
        }

        let db = Database::with_path(&path).unwrap();
        assert!(db.preferences().unwrap().is_gluten_free);
    }
}
