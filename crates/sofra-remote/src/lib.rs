//! Sofra Remote - HTTP adapters.
//!
//! This crate talks to the outside world on behalf of the app:
//!
//! - Food catalog provider (backend fetch, memory cache, seed fallback)
//! - AI recommendation adapter (rate-limited, reconciles free-text names)
//! - Places enrichment adapter (rate-limited restaurant search)
//! - Weather provider (Open-Meteo, 15-minute cache)
//!
//! Every adapter degrades instead of failing: the catalog falls back to the
//! bundled seed data, the AI adapter returns `None`, Places returns an empty
//! list, weather returns `None`. Callers never see transport errors.

pub mod ai;
pub mod catalog;
pub mod client;
pub mod error;
pub mod places;
pub mod weather;

pub use ai::{AiAdapter, AiRecommendation, AI_SUGGESTION_COUNT};
pub use catalog::CatalogProvider;
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use error::{RemoteError, Result};
pub use places::{NearbyRestaurant, PlacesAdapter, Review};
pub use weather::{Weather, WeatherCondition, WeatherProvider};
