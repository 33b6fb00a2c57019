//! Per-day rate limiting for paid external APIs.
//!
//! Two independent quotas (AI recommendations, Places searches) each keep a
//! `{count, date}` pair. The counter resets lazily: whenever the stored date
//! differs from today's wall-clock date, the day is treated as fresh. There
//! is no background timer, and the day boundary follows the local clock, so
//! a user crossing timezones may see an early or late reset — an accepted
//! imprecision.
//!
//! On any storage failure the limiter fails OPEN: the quota protects a
//! third-party billing budget, not correctness, so availability wins.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default daily allowance for AI recommendation calls.
pub const DEFAULT_AI_DAILY_LIMIT: u32 = 20;

/// Default daily allowance for Places searches.
pub const DEFAULT_PLACES_DAILY_LIMIT: u32 = 20;

/// The two independently limited call categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quota {
    Ai,
    Places,
}

impl Quota {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quota::Ai => "ai",
            Quota::Places => "places",
        }
    }

    pub fn parse(s: &str) -> Option<Quota> {
        match s {
            "ai" => Some(Quota::Ai),
            "places" => Some(Quota::Places),
            _ => None,
        }
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persisted counter state for one quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaCounter {
    pub count: u32,
    /// Calendar day the count belongs to.
    pub date: NaiveDate,
}

/// Outcome of a limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub allowed: bool,
    /// Calls left today after this check.
    pub remaining: u32,
}

/// Error reported by a [`QuotaStore`] implementation.
#[derive(Debug, Error)]
#[error("quota store error: {0}")]
pub struct QuotaStoreError(pub String);

/// Persistence boundary for quota counters.
pub trait QuotaStore {
    /// Loads the stored counter, `None` when nothing was persisted yet.
    fn load_counter(&self, quota: Quota) -> Result<Option<QuotaCounter>, QuotaStoreError>;

    /// Persists the counter for a quota.
    fn save_counter(&self, quota: Quota, counter: QuotaCounter) -> Result<(), QuotaStoreError>;
}

/// Daily rate limiter over a persistence backend.
///
/// Check-and-increment is atomic from the caller's perspective but takes no
/// lock; callers are sequenced by user action in a single process.
pub struct RateLimiter<S> {
    store: S,
}

impl<S: QuotaStore> RateLimiter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes one call from the quota if the daily limit allows it.
    pub fn check_and_increment(&self, quota: Quota, daily_limit: u32) -> RateLimitStatus {
        self.check_and_increment_on(quota, daily_limit, Local::now().date_naive())
    }

    fn check_and_increment_on(
        &self,
        quota: Quota,
        daily_limit: u32,
        today: NaiveDate,
    ) -> RateLimitStatus {
        let stored = match self.store.load_counter(quota) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(%quota, %err, "quota read failed, failing open");
                return RateLimitStatus {
                    allowed: true,
                    remaining: daily_limit,
                };
            }
        };

        let count = match stored {
            Some(counter) if counter.date == today => counter.count,
            _ => 0,
        };

        if count >= daily_limit {
            return RateLimitStatus {
                allowed: false,
                remaining: 0,
            };
        }

        let counter = QuotaCounter {
            count: count + 1,
            date: today,
        };
        if let Err(err) = self.store.save_counter(quota, counter) {
            warn!(%quota, %err, "quota write failed, failing open");
            return RateLimitStatus {
                allowed: true,
                remaining: daily_limit,
            };
        }

        RateLimitStatus {
            allowed: true,
            remaining: daily_limit - count - 1,
        }
    }

    /// Calls left today, without consuming one. Idempotent.
    pub fn remaining(&self, quota: Quota, daily_limit: u32) -> u32 {
        self.remaining_on(quota, daily_limit, Local::now().date_naive())
    }

    fn remaining_on(&self, quota: Quota, daily_limit: u32, today: NaiveDate) -> u32 {
        match self.store.load_counter(quota) {
            Ok(Some(counter)) if counter.date == today => {
                daily_limit.saturating_sub(counter.count)
            }
            Ok(_) => daily_limit,
            Err(err) => {
                warn!(%quota, %err, "quota read failed, reporting full allowance");
                daily_limit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        counters: Mutex<HashMap<Quota, QuotaCounter>>,
    }

    impl QuotaStore for MemoryStore {
        fn load_counter(&self, quota: Quota) -> Result<Option<QuotaCounter>, QuotaStoreError> {
            Ok(self.counters.lock().unwrap().get(&quota).copied())
        }

        fn save_counter(
            &self,
            quota: Quota,
            counter: QuotaCounter,
        ) -> Result<(), QuotaStoreError> {
            self.counters.lock().unwrap().insert(quota, counter);
            Ok(())
        }
    }

    struct BrokenStore;

    impl QuotaStore for BrokenStore {
        fn load_counter(&self, _: Quota) -> Result<Option<QuotaCounter>, QuotaStoreError> {
            Err(QuotaStoreError("disk on fire".into()))
        }

        fn save_counter(&self, _: Quota, _: QuotaCounter) -> Result<(), QuotaStoreError> {
            Err(QuotaStoreError("disk on fire".into()))
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn limit_of_two_allows_exactly_two() {
        let limiter = RateLimiter::new(MemoryStore::default());
        let today = day("2026-08-26");

        let first = limiter.check_and_increment_on(Quota::Ai, 2, today);
        assert_eq!(first, RateLimitStatus { allowed: true, remaining: 1 });

        let second = limiter.check_and_increment_on(Quota::Ai, 2, today);
        assert_eq!(second, RateLimitStatus { allowed: true, remaining: 0 });

        let third = limiter.check_and_increment_on(Quota::Ai, 2, today);
        assert_eq!(third, RateLimitStatus { allowed: false, remaining: 0 });
    }

    #[test]
    fn counter_resets_on_a_new_day() {
        let limiter = RateLimiter::new(MemoryStore::default());
        let today = day("2026-08-26");
        let tomorrow = day("2026-08-27");

        for _ in 0..3 {
            limiter.check_and_increment_on(Quota::Ai, 3, today);
        }
        assert!(!limiter.check_and_increment_on(Quota::Ai, 3, today).allowed);

        // Fresh quota the next day.
        let status = limiter.check_and_increment_on(Quota::Ai, 3, tomorrow);
        assert_eq!(status, RateLimitStatus { allowed: true, remaining: 2 });
    }

    #[test]
    fn quotas_are_independent() {
        let limiter = RateLimiter::new(MemoryStore::default());
        let today = day("2026-08-26");

        assert!(!limiter.check_and_increment_on(Quota::Ai, 0, today).allowed);
        assert!(limiter.check_and_increment_on(Quota::Places, 5, today).allowed);
        assert_eq!(limiter.remaining_on(Quota::Places, 5, today), 4);
    }

    #[test]
    fn remaining_is_idempotent() {
        let limiter = RateLimiter::new(MemoryStore::default());
        let today = day("2026-08-26");

        limiter.check_and_increment_on(Quota::Places, 5, today);

        let first = limiter.remaining_on(Quota::Places, 5, today);
        let second = limiter.remaining_on(Quota::Places, 5, today);
        assert_eq!(first, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn remaining_reports_full_allowance_on_stale_date() {
        let limiter = RateLimiter::new(MemoryStore::default());
        let today = day("2026-08-26");

        limiter.check_and_increment_on(Quota::Ai, 5, today);
        assert_eq!(limiter.remaining_on(Quota::Ai, 5, day("2026-08-27")), 5);
    }

    #[test]
    fn denied_check_does_not_increment() {
        let store = MemoryStore::default();
        let today = day("2026-08-26");
        store
            .save_counter(
                Quota::Ai,
                QuotaCounter {
                    count: 2,
                    date: today,
                },
            )
            .unwrap();

        let limiter = RateLimiter::new(store);
        assert!(!limiter.check_and_increment_on(Quota::Ai, 2, today).allowed);

        let stored = limiter.store.load_counter(Quota::Ai).unwrap().unwrap();
        assert_eq!(stored.count, 2);
    }

    #[test]
    fn storage_failure_fails_open() {
        let limiter = RateLimiter::new(BrokenStore);
        let today = day("2026-08-26");

        let status = limiter.check_and_increment_on(Quota::Ai, 7, today);
        assert_eq!(status, RateLimitStatus { allowed: true, remaining: 7 });
        assert_eq!(limiter.remaining_on(Quota::Ai, 7, today), 7);
    }
}
