//! Suggestion history.
//!
//! The history is a bounded "recently seen" log, not a durable ledger. The
//! engine reads the most recent entries to deprioritize repeats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::food::Food;
use crate::mood::Mood;

/// Maximum number of history entries kept; the oldest are evicted first.
pub const HISTORY_LIMIT: usize = 50;

/// How many recent entries the engine treats as "recently seen".
pub const RECENT_WINDOW: usize = 10;

/// One recorded suggestion pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Entry id, unique per pick (`{food_id}_{millis}`).
    pub id: String,
    /// Snapshot of the food at pick time.
    pub food: Food,
    /// Mood the suggestion was made for.
    pub mood: Mood,
    /// When the pick happened.
    pub date: DateTime<Utc>,
    /// City at pick time, when known.
    pub city: Option<String>,
}

impl HistoryItem {
    /// Creates a new entry stamped with the current time.
    pub fn new(food: Food, mood: Mood, city: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("{}_{}", food.id, now.timestamp_millis()),
            food,
            mood,
            date: now,
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn new_item_embeds_food_id_and_timestamp() {
        let food = seed_catalog().into_iter().next().unwrap();
        let food_id = food.id.clone();
        let item = HistoryItem::new(food, Mood::Happy, Some("Ankara".into()));
        assert!(item.id.starts_with(&format!("{food_id}_")));
        assert_eq!(item.mood, Mood::Happy);
        assert_eq!(item.city.as_deref(), Some("Ankara"));
    }

    #[test]
    fn item_roundtrips_through_json() {
        let food = seed_catalog().into_iter().next().unwrap();
        let item = HistoryItem::new(food, Mood::Tired, None);
        let json = serde_json::to_string(&item).unwrap();
        let back: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
