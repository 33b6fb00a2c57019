//! Sofra Core - mood-based food recommendation logic.
//!
//! This crate holds the pure decision logic of the Sofra app: the food and
//! mood model, the region classifier, the recommendation engine, and the
//! per-day rate limiter. It performs no I/O; persistence and network live in
//! `sofra-storage` and `sofra-remote`.

pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod food;
pub mod history;
pub mod mood;
pub mod preferences;
pub mod rate_limit;
pub mod regions;

pub use engine::{RecommendationEngine, SuggestionRequest, DEFAULT_SUGGESTION_COUNT};
pub use food::{Food, FoodSuggestion};
pub use history::{HistoryItem, HISTORY_LIMIT};
pub use mood::Mood;
pub use preferences::{Language, NotificationTime, UserPreferences};
pub use rate_limit::{Quota, QuotaCounter, QuotaStore, QuotaStoreError, RateLimitStatus, RateLimiter};
pub use regions::{region_for_city, Region};
