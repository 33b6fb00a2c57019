//! AI recommendation adapter.
//!
//! The backend asks an LLM for food names as free text; nothing guarantees
//! they exist in the catalog. The adapter reconciles them back onto catalog
//! entries and backfills from mood-matching foods so the result always has
//! up to three concrete, diet-compliant foods.
//!
//! Public boundary returns `Option`: rate-limit denial, transport failure
//! and malformed payloads all collapse to `None`.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sofra_core::classifier::{match_food_names, matches_diet};
use sofra_core::{Food, Language, Mood, Quota, QuotaStore, RateLimiter, UserPreferences};
use tracing::{debug, warn};

use crate::client::ApiClient;

/// How many foods an AI recommendation carries.
pub const AI_SUGGESTION_COUNT: usize = 3;

/// A reconciled AI recommendation.
#[derive(Debug, Clone)]
pub struct AiRecommendation {
    /// Headline text from the model.
    pub recommendation: String,
    /// Longer explanation, possibly empty.
    pub explanation: String,
    /// Catalog foods reconciled from the model's free-text names.
    pub suggested_foods: Vec<Food>,
    /// Short tips, possibly empty.
    pub tips: Vec<String>,
}

#[derive(Serialize)]
struct RecommendBody<'a> {
    mood: MoodBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    preferences: PreferencesBody,
    language: &'a str,
}

#[derive(Serialize)]
struct MoodBody<'a> {
    label: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreferencesBody {
    is_vegetarian: bool,
    is_vegan: bool,
    is_gluten_free: bool,
}

#[derive(Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    foods: Vec<String>,
    #[serde(default)]
    tips: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Adapter for the backend's AI recommendation endpoint.
pub struct AiAdapter<S> {
    client: ApiClient,
    limiter: RateLimiter<S>,
}

impl<S: QuotaStore> AiAdapter<S> {
    pub fn new(client: ApiClient, limiter: RateLimiter<S>) -> Self {
        Self { client, limiter }
    }

    /// Request a personalized recommendation for a mood.
    ///
    /// Consumes one AI quota call. Returns `None` when the quota is spent
    /// or the backend fails; the caller falls back to the local engine.
    pub async fn recommend(
        &self,
        catalog: &[Food],
        mood: Mood,
        city: Option<&str>,
        prefs: &UserPreferences,
    ) -> Option<AiRecommendation> {
        let limit = self.client.config().ai_daily_limit;
        let status = self.limiter.check_and_increment(Quota::Ai, limit);
        if !status.allowed {
            debug!("AI quota exhausted for today");
            return None;
        }

        let language = match prefs.language {
            Language::En => "en",
            Language::Tr | Language::Auto => "tr",
        };
        let body = RecommendBody {
            mood: MoodBody {
                label: mood.label(),
                description: mood.description(),
            },
            city,
            preferences: PreferencesBody {
                is_vegetarian: prefs.is_vegetarian,
                is_vegan: prefs.is_vegan,
                is_gluten_free: prefs.is_gluten_free,
            },
            language,
        };

        let response: RecommendResponse =
            match self.client.post_json("/api/recommend", &body).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(%err, "AI recommendation request failed");
                    return None;
                }
            };

        if let Some(error) = response.error {
            warn!(%error, "AI backend reported an error");
            return None;
        }

        let suggested_foods = reconcile_foods(catalog, &response.foods, mood, prefs);

        Some(AiRecommendation {
            recommendation: response
                .recommendation
                .unwrap_or_else(|| "Size özel önerilerimiz hazır!".to_string()),
            explanation: response.explanation.unwrap_or_default(),
            suggested_foods,
            tips: response.tips,
        })
    }

    /// Calls left on the AI quota today.
    pub fn remaining(&self) -> u32 {
        self.limiter
            .remaining(Quota::Ai, self.client.config().ai_daily_limit)
    }
}

/// Map free-text names onto catalog entries, apply the hard dietary filter,
/// and backfill from mood-matching foods to reach the target count.
fn reconcile_foods(
    catalog: &[Food],
    names: &[String],
    mood: Mood,
    prefs: &UserPreferences,
) -> Vec<Food> {
    let mut matched: Vec<Food> = match_food_names(catalog, names)
        .into_iter()
        .filter(|f| matches_diet(f, prefs))
        .collect();

    if matched.len() < AI_SUGGESTION_COUNT {
        let mut fillers: Vec<Food> = catalog
            .iter()
            .filter(|f| f.matches_mood(mood))
            .filter(|f| matches_diet(f, prefs))
            .filter(|f| !matched.iter().any(|m| m.id == f.id))
            .cloned()
            .collect();
        fillers.shuffle(&mut rand::thread_rng());
        matched.extend(fillers.into_iter().take(AI_SUGGESTION_COUNT - matched.len()));
    }

    matched.truncate(AI_SUGGESTION_COUNT);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use sofra_core::catalog::seed_catalog;

    #[test]
    fn reconcile_matches_then_backfills_to_three() {
        let catalog = seed_catalog();
        let names = vec!["Ramen".to_string()];
        let prefs = UserPreferences::default();

        let foods = reconcile_foods(&catalog, &names, Mood::Sad, &prefs);
        assert_eq!(foods.len(), AI_SUGGESTION_COUNT);
        assert_eq!(foods[0].id, "ramen");
        // Backfill respects the mood.
        assert!(foods[1..].iter().all(|f| f.matches_mood(Mood::Sad)));
        // No duplicates.
        assert_ne!(foods[1].id, foods[0].id);
        assert_ne!(foods[2].id, foods[0].id);
    }

    #[test]
    fn reconcile_drops_diet_violations_even_when_named() {
        let catalog = seed_catalog();
        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);

        // Adana kebab is named explicitly but is not vegan.
        let names = vec!["Adana Kebap".to_string()];
        let foods = reconcile_foods(&catalog, &names, Mood::Happy, &prefs);
        assert!(foods.iter().all(|f| f.is_vegan));
    }

    #[test]
    fn reconcile_caps_at_three_matches() {
        let catalog = seed_catalog();
        let names = vec![
            "Pizza".to_string(),
            "Makarna".to_string(),
            "Ramen".to_string(),
            "Künefe".to_string(),
        ];
        let foods = reconcile_foods(&catalog, &names, Mood::Happy, &UserPreferences::default());
        assert_eq!(foods.len(), AI_SUGGESTION_COUNT);
    }

    #[test]
    fn reconcile_may_return_fewer_when_nothing_fits() {
        let catalog: Vec<Food> = seed_catalog()
            .into_iter()
            .filter(|f| !f.is_vegan)
            .collect();
        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);

        let foods = reconcile_foods(&catalog, &[], Mood::Happy, &prefs);
        assert!(foods.is_empty());
    }

    #[test]
    fn request_body_uses_camel_case_preferences() {
        let body = RecommendBody {
            mood: MoodBody {
                label: Mood::Happy.label(),
                description: Mood::Happy.description(),
            },
            city: Some("Trabzon"),
            preferences: PreferencesBody {
                is_vegetarian: true,
                is_vegan: false,
                is_gluten_free: false,
            },
            language: "tr",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["preferences"]["isVegetarian"], true);
        assert_eq!(json["city"], "Trabzon");
        assert!(json["mood"]["label"].is_string());
    }

    #[test]
    fn error_payload_parses() {
        let response: RecommendResponse =
            serde_json::from_str(r#"{"error": "upstream quota"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("upstream quota"));
        assert!(response.foods.is_empty());
    }
}
