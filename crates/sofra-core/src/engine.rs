//! Recommendation engine.
//!
//! Combines the catalog, user preferences, recent history, and the resolved
//! region into a bounded, shuffled suggestion set. Regional specialties are
//! prioritized (up to two slots), recently seen foods are used only as
//! filler, and dietary constraints are a hard filter that may leave the
//! result empty.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::classifier;
use crate::food::{Food, FoodSuggestion};
use crate::mood::Mood;
use crate::preferences::UserPreferences;
use crate::regions::{region_for_city, Region};

/// Default number of foods per suggestion.
pub const DEFAULT_SUGGESTION_COUNT: usize = 4;

/// Maximum regional slots attempted before filling from the general pool.
const REGIONAL_SLOTS: usize = 2;

/// Parameters for one suggestion request.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub mood: Mood,
    /// City name from reverse geocoding; resolves to a region when mapped.
    pub city: Option<String>,
    /// Upper bound on the number of foods returned.
    pub count: usize,
    /// Explicit cuisine constraint; overrides the stored preference.
    pub cuisine: Option<String>,
}

impl SuggestionRequest {
    /// Creates a request with the default count and no constraints.
    pub fn new(mood: Mood) -> Self {
        Self {
            mood,
            city: None,
            count: DEFAULT_SUGGESTION_COUNT,
            cuisine: None,
        }
    }
}

/// Stateless suggestion service. Constructed once at startup and shared by
/// reference; all inputs are passed explicitly.
#[derive(Debug, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produces a suggestion for a mood.
    ///
    /// `recent_ids` holds the food ids of the most recent history entries;
    /// those foods are deprioritized, not excluded.
    pub fn suggest(
        &self,
        catalog: &[Food],
        prefs: &UserPreferences,
        recent_ids: &HashSet<String>,
        req: &SuggestionRequest,
    ) -> FoodSuggestion {
        let pool = self.candidate_pool(catalog, prefs, req);

        let (rare, repeated): (Vec<Food>, Vec<Food>) = pool
            .into_iter()
            .partition(|f| !recent_ids.contains(&f.id));

        let region = req.city.as_deref().and_then(region_for_city);
        self.assemble(rare, repeated, region, req)
    }

    /// Like [`suggest`](Self::suggest), but excludes foods the caller has
    /// already seen in this session.
    ///
    /// When exclusion would leave fewer than `count` candidates, it is
    /// dropped entirely for the call: repeating a food beats returning a
    /// short list. History deprioritization does not apply here.
    pub fn suggest_excluding(
        &self,
        catalog: &[Food],
        prefs: &UserPreferences,
        exclude_ids: &HashSet<String>,
        req: &SuggestionRequest,
    ) -> FoodSuggestion {
        let pool = self.candidate_pool(catalog, prefs, req);

        let available: Vec<Food> = pool
            .iter()
            .filter(|f| !exclude_ids.contains(&f.id))
            .cloned()
            .collect();
        let pool = if available.len() < req.count {
            pool
        } else {
            available
        };

        let region = req.city.as_deref().and_then(region_for_city);
        self.assemble(pool, Vec::new(), region, req)
    }

    /// Picks one diet-compliant food to feature (e.g. in the daily
    /// notification). `None` when the preferences exclude everything.
    pub fn featured_food(&self, catalog: &[Food], prefs: &UserPreferences) -> Option<Food> {
        let pool = classifier::filter_by_diet(catalog, prefs);
        let mut rng = rand::thread_rng();
        pool.choose(&mut rng).cloned()
    }

    /// Mood filter, soft cuisine constraint, hard dietary filter.
    fn candidate_pool(
        &self,
        catalog: &[Food],
        prefs: &UserPreferences,
        req: &SuggestionRequest,
    ) -> Vec<Food> {
        let mut pool = classifier::foods_for_mood(catalog, req.mood);

        // The cuisine constraint is soft: it narrows the pool only when
        // something actually matches, and is ignored silently otherwise.
        let cuisine = req
            .cuisine
            .as_deref()
            .or(prefs.preferred_cuisine.as_deref());
        if let Some(cuisine) = cuisine {
            let narrowed: Vec<Food> = pool
                .iter()
                .filter(|f| f.cuisine.as_deref() == Some(cuisine))
                .cloned()
                .collect();
            if !narrowed.is_empty() {
                pool = narrowed;
            }
        }

        classifier::filter_by_diet(&pool, prefs)
    }

    /// Regional partition, shuffles, slot fill, and message selection.
    fn assemble(
        &self,
        fresh: Vec<Food>,
        filler: Vec<Food>,
        region: Option<Region>,
        req: &SuggestionRequest,
    ) -> FoodSuggestion {
        let (mut regional, mut other): (Vec<Food>, Vec<Food>) = match region {
            Some(r) => fresh.into_iter().partition(|f| f.is_regional_to(r)),
            None => (Vec::new(), fresh),
        };
        let mut filler = filler;

        let mut rng = rand::thread_rng();
        regional.shuffle(&mut rng);
        other.shuffle(&mut rng);
        filler.shuffle(&mut rng);

        // Filler (recently seen) stays behind the fresh pool: it is drawn
        // only once the fresh candidates run out.
        let regional_take = regional.len().min(REGIONAL_SLOTS).min(req.count);
        let mut selection: Vec<Food> = regional.into_iter().take(regional_take).collect();
        selection.extend(
            other
                .into_iter()
                .chain(filler)
                .take(req.count - regional_take),
        );

        // Final shuffle so regional picks interleave instead of clustering
        // at the front.
        selection.shuffle(&mut rng);

        let is_regional = match region {
            Some(r) => selection.iter().any(|f| f.is_regional_to(r)),
            None => false,
        };

        let message = if is_regional {
            // is_regional implies region is resolved.
            region.map(|r| r.message()).unwrap_or_default().to_string()
        } else {
            let pool = req.mood.messages();
            pool.choose(&mut rng)
                .copied()
                .unwrap_or(pool[0])
                .to_string()
        };

        FoodSuggestion {
            foods: selection,
            mood: req.mood,
            message,
            is_regional,
            region_name: region.map(|r| r.display_name().to_string()),
        }
    }
}
