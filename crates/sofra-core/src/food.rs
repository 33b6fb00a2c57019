//! Food catalog records and suggestion output.

use serde::{Deserialize, Serialize};

use crate::mood::Mood;
use crate::regions::Region;

/// An immutable catalog entry.
///
/// The dietary flags are independent: the catalog may legitimately contain
/// entries where `is_vegan` is set without `is_vegetarian`. The
/// vegan-implies-vegetarian cascade applies only to user preference state
/// (see [`crate::preferences::UserPreferences`]), never to catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Unique catalog key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    pub emoji: String,
    pub category: String,
    /// Cuisine identifier (e.g. "turkish", "japanese").
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Moods this food satisfies.
    pub moods: Vec<Mood>,
    /// Regions where this food is a local specialty. Empty for non-regional
    /// foods.
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
}

impl Food {
    /// Whether this food satisfies the given mood.
    pub fn matches_mood(&self, mood: Mood) -> bool {
        self.moods.contains(&mood)
    }

    /// Whether this food is tagged as a specialty of the given region.
    pub fn is_regional_to(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}

/// Engine output for one suggestion request. Transient; recomputed on every
/// request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSuggestion {
    /// Selected foods, at most the requested count, in final shuffle order.
    pub foods: Vec<Food>,
    /// The mood the suggestion was computed for.
    pub mood: Mood,
    /// Canned message (regional or mood-specific).
    pub message: String,
    /// True when the request resolved to a region and at least one selected
    /// food carries that region tag.
    pub is_regional: bool,
    /// Display name of the resolved region, when the city was mapped.
    pub region_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Food {
        Food {
            id: "kuymak".into(),
            name: "Kuymak".into(),
            description: "Peynirli mısır unu yemeği".into(),
            emoji: "🧀".into(),
            category: "Bölgesel".into(),
            cuisine: Some("turkish".into()),
            moods: vec![Mood::Sad, Mood::Tired],
            regions: vec![Region::Karadeniz],
            is_vegetarian: true,
            is_vegan: false,
            is_gluten_free: true,
        }
    }

    #[test]
    fn mood_and_region_checks() {
        let food = sample();
        assert!(food.matches_mood(Mood::Tired));
        assert!(!food.matches_mood(Mood::Happy));
        assert!(food.is_regional_to(Region::Karadeniz));
        assert!(!food.is_regional_to(Region::Ege));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "description": "d",
            "emoji": "🍽️",
            "category": "c",
            "moods": ["happy"]
        }"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert!(food.cuisine.is_none());
        assert!(food.regions.is_empty());
        assert!(!food.is_vegetarian && !food.is_vegan && !food.is_gluten_free);
    }

    #[test]
    fn catalog_may_hold_vegan_without_vegetarian() {
        // Intentional asymmetry: the cascade is a preference rule, catalog
        // rows are stored as-is.
        let mut food = sample();
        food.is_vegan = true;
        food.is_vegetarian = false;
        let json = serde_json::to_string(&food).unwrap();
        let back: Food = serde_json::from_str(&json).unwrap();
        assert!(back.is_vegan);
        assert!(!back.is_vegetarian);
    }
}
