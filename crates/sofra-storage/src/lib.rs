//! Sofra Storage - SQLite persistence layer.
//!
//! This crate provides local storage for the Sofra app. It handles:
//!
//! - User preferences (single JSON document in a key-value table)
//! - Suggestion history (bounded log with JSON food snapshots)
//! - Favorite foods
//! - Per-day API quota counters (backs the core rate limiter)
//!
//! # Example
//!
//! ```no_run
//! use sofra_storage::Database;
//! use sofra_core::{HistoryItem, Mood, catalog::seed_catalog};
//!
//! let db = Database::in_memory().unwrap();
//!
//! // Record a pick
//! let food = seed_catalog().into_iter().next().unwrap();
//! db.add_to_history(&HistoryItem::new(food, Mood::Happy, None)).unwrap();
//!
//! // Read back the recently seen food ids
//! let recent = db.recent_food_ids(10).unwrap();
//! assert_eq!(recent.len(), 1);
//! ```

mod database;
pub mod error;
mod pool;
pub mod repository;
mod schema;

pub use database::Database;
pub use error::{Result, StorageError};
pub use pool::ConnectionPool;
pub use repository::{ConfigRepo, FavoritesRepo, HistoryRepo, QuotaRepo};
