//! Pure filters over the catalog: mood, diet, and name reconciliation.

use crate::food::Food;
use crate::mood::Mood;
use crate::preferences::UserPreferences;

/// Foods whose mood set contains the given mood.
pub fn foods_for_mood(catalog: &[Food], mood: Mood) -> Vec<Food> {
    catalog
        .iter()
        .filter(|f| f.matches_mood(mood))
        .cloned()
        .collect()
}

/// Whether a food passes the active dietary constraints.
///
/// Each active preference is an independent AND constraint: vegan requires
/// `is_vegan`, vegetarian requires `is_vegetarian`, gluten-free requires
/// `is_gluten_free`. Inactive preferences constrain nothing.
pub fn matches_diet(food: &Food, prefs: &UserPreferences) -> bool {
    if prefs.is_vegan && !food.is_vegan {
        return false;
    }
    if prefs.is_vegetarian && !food.is_vegetarian {
        return false;
    }
    if prefs.is_gluten_free && !food.is_gluten_free {
        return false;
    }
    true
}

/// Hard dietary filter. May legitimately return an empty set; dietary
/// correctness takes priority over having something to suggest.
pub fn filter_by_diet(foods: &[Food], prefs: &UserPreferences) -> Vec<Food> {
    foods
        .iter()
        .filter(|f| matches_diet(f, prefs))
        .cloned()
        .collect()
}

/// Reconciles free-text food names (as returned by the AI endpoint) against
/// catalog entries.
///
/// A name matches a catalog food when either string contains the other,
/// case-insensitively. The first catalog hit wins per name; a food already
/// matched by an earlier name is not matched again.
pub fn match_food_names(catalog: &[Food], names: &[String]) -> Vec<Food> {
    let mut matched: Vec<Food> = Vec::new();

    for name in names {
        let name_lower = name.to_lowercase();
        if name_lower.is_empty() {
            continue;
        }

        let hit = catalog.iter().find(|f| {
            let food_lower = f.name.to_lowercase();
            food_lower.contains(&name_lower) || name_lower.contains(&food_lower)
        });

        if let Some(food) = hit {
            if !matched.iter().any(|m| m.id == food.id) {
                matched.push(food.clone());
            }
        }
    }

    matched
}
