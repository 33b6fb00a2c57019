//! Food catalog provider.
//!
//! Fetches the catalog from the backend, caching the unfiltered result in
//! memory for the process lifetime. Region-filtered requests go to the
//! backend every time and never populate the cache. Any failure falls back
//! to the bundled seed catalog immediately; there is no retry and no TTL.

use std::sync::Mutex;

use serde::Deserialize;
use sofra_core::catalog::seed_catalog;
use sofra_core::{Food, Language, Mood, Region};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct FoodsResponse {
    #[serde(default)]
    foods: Vec<RemoteFood>,
}

/// Wire shape of one catalog record. Names and descriptions come localized
/// in both languages; the provider picks one.
#[derive(Debug, Deserialize)]
struct RemoteFood {
    id: String,
    name_tr: String,
    name_en: String,
    description_tr: String,
    description_en: String,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(default)]
    moods: Vec<String>,
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default)]
    is_vegetarian: bool,
    #[serde(default)]
    is_vegan: bool,
    #[serde(default)]
    is_gluten_free: bool,
}

impl RemoteFood {
    /// Translate to the domain type, dropping mood/region tags we do not
    /// know. `Auto` resolves to Turkish, the app's primary audience.
    fn into_food(self, language: Language) -> Food {
        let (name, description) = match language {
            Language::En => (self.name_en, self.description_en),
            Language::Tr | Language::Auto => (self.name_tr, self.description_tr),
        };

        Food {
            id: self.id,
            name,
            description,
            emoji: self.emoji,
            category: self.category,
            cuisine: self.cuisine,
            moods: self.moods.iter().filter_map(|m| Mood::parse(m)).collect(),
            regions: self
                .regions
                .iter()
                .filter_map(|r| Region::parse(r))
                .collect(),
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            is_gluten_free: self.is_gluten_free,
        }
    }
}

/// Catalog provider with an in-memory cache and seed fallback.
pub struct CatalogProvider {
    client: ApiClient,
    /// Unfiltered catalog from the last successful full fetch. Fallback
    /// results are never cached.
    cache: Mutex<Option<Vec<Food>>>,
}

impl CatalogProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: Mutex::new(None),
        }
    }

    /// Get the catalog, optionally filtered to one region's specialties.
    ///
    /// Never fails: a backend problem degrades to the bundled seed catalog
    /// (filtered in memory when a region was requested).
    pub async fn catalog(&self, region: Option<Region>, language: Language) -> Vec<Food> {
        if region.is_none() {
            if let Some(cached) = self.cached() {
                debug!(count = cached.len(), "serving catalog from cache");
                return cached;
            }
        }

        match self.fetch(region, language).await {
            Ok(foods) => {
                info!(count = foods.len(), ?region, "fetched catalog");
                if region.is_none() {
                    self.store(&foods);
                }
                foods
            }
            Err(err) => {
                warn!(%err, "catalog fetch failed, using bundled seed catalog");
                let seed = seed_catalog();
                match region {
                    Some(region) => seed
                        .into_iter()
                        .filter(|f| f.is_regional_to(region))
                        .collect(),
                    None => seed,
                }
            }
        }
    }

    /// Drop the cached catalog; the next unfiltered request refetches.
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = None;
        }
    }

    async fn fetch(&self, region: Option<Region>, language: Language) -> Result<Vec<Food>> {
        let path = match region {
            Some(region) => format!("/api/foods?region={}", region.as_str()),
            None => "/api/foods".to_string(),
        };

        let response: FoodsResponse = self.client.get_json(&path).await?;
        Ok(response
            .foods
            .into_iter()
            .map(|f| f.into_food(language))
            .collect())
    }

    fn cached(&self) -> Option<Vec<Food>> {
        self.cache.lock().ok().and_then(|c| c.clone())
    }

    fn store(&self, foods: &[Food]) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = Some(foods.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_remote() -> RemoteFood {
        serde_json::from_value(serde_json::json!({
            "id": "kuymak",
            "name_tr": "Kuymak",
            "name_en": "Kuymak (cheese fondue)",
            "description_tr": "Peynirli mısır unu yemeği",
            "description_en": "Cornmeal dish with cheese",
            "emoji": "🧀",
            "category": "Bölgesel",
            "cuisine": "turkish",
            "moods": ["sad", "tired", "not-a-mood"],
            "regions": ["karadeniz", "atlantis"],
            "is_vegetarian": true,
            "is_gluten_free": true
        }))
        .unwrap()
    }

    #[test]
    fn translation_picks_turkish_for_auto() {
        let food = sample_remote().into_food(Language::Auto);
        assert_eq!(food.name, "Kuymak");
        assert_eq!(food.description, "Peynirli mısır unu yemeği");
    }

    #[test]
    fn translation_picks_english_when_asked() {
        let food = sample_remote().into_food(Language::En);
        assert_eq!(food.name, "Kuymak (cheese fondue)");
    }

    #[test]
    fn unknown_tags_are_dropped() {
        let food = sample_remote().into_food(Language::Tr);
        assert_eq!(food.moods, vec![Mood::Sad, Mood::Tired]);
        assert_eq!(food.regions, vec![Region::Karadeniz]);
    }

    #[test]
    fn missing_optional_wire_fields_default() {
        let remote: RemoteFood = serde_json::from_value(serde_json::json!({
            "id": "x",
            "name_tr": "X",
            "name_en": "X",
            "description_tr": "d",
            "description_en": "d"
        }))
        .unwrap();
        let food = remote.into_food(Language::Tr);
        assert!(food.cuisine.is_none());
        assert!(food.moods.is_empty());
        assert!(!food.is_vegan);
    }

    #[test]
    fn unreachable_backend_falls_back_to_seed_catalog() {
        let client = ApiClient::new(crate::client::ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        });
        let provider = CatalogProvider::new(client);

        let foods = tokio_test::block_on(provider.catalog(None, Language::Auto));
        assert_eq!(foods.len(), seed_catalog().len());
        // Fallback results must not be cached.
        assert!(provider.cached().is_none());

        let regional = tokio_test::block_on(
            provider.catalog(Some(Region::Karadeniz), Language::Auto),
        );
        assert!(!regional.is_empty());
        assert!(regional.iter().all(|f| f.is_regional_to(Region::Karadeniz)));
    }

    #[test]
    fn invalidate_clears_the_cache() {
        let provider = CatalogProvider::new(ApiClient::default());
        provider.store(&seed_catalog());
        assert!(provider.cached().is_some());

        provider.invalidate();
        assert!(provider.cached().is_none());
    }
}
