//! API quota counter repository.

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use sofra_core::{Quota, QuotaCounter};

use crate::error::Result;

/// Repository for per-day API quota counters.
pub struct QuotaRepo;

impl QuotaRepo {
    /// Get the stored counter for a quota kind.
    pub fn get(conn: &Connection, quota: Quota) -> Result<Option<QuotaCounter>> {
        let mut stmt =
            conn.prepare("SELECT count, date FROM quota_counters WHERE kind = ?1")?;

        let counter = stmt
            .query_row([quota.as_str()], |row| {
                let count: u32 = row.get(0)?;
                let date_str: String = row.get(1)?;
                Ok((count, date_str))
            })
            .ok()
            .and_then(|(count, date_str)| {
                let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").ok()?;
                Some(QuotaCounter { count, date })
            });

        Ok(counter)
    }

    /// Store the counter for a quota kind (insert or update).
    pub fn set(conn: &Connection, quota: Quota, counter: QuotaCounter) -> Result<()> {
        let date_str = counter.date.format("%Y-%m-%d").to_string();

        conn.execute(
            "INSERT INTO quota_counters (kind, count, date) VALUES (?1, ?2, ?3)
             ON CONFLICT(kind) DO UPDATE SET count = ?2, date = ?3",
            params![quota.as_str(), counter.count, date_str],
        )?;

        Ok(())
    }
}
