//! Database repositories for each table.

pub mod config;
pub mod favorites;
pub mod history;
pub mod quota;

pub use config::ConfigRepo;
pub use favorites::FavoritesRepo;
pub use history::HistoryRepo;
pub use quota::QuotaRepo;
