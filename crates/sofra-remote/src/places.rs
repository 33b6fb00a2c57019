//! Places enrichment adapter.
//!
//! Talks to the backend's Places proxy (Google Places API "new" shape, with
//! the photo URL already resolved server-side) and maps results into the
//! app's restaurant type. Price tiers become currency symbols, coordinates
//! become a human-readable distance, and only the top two reviews are kept.
//!
//! Public boundary returns an empty list on every failure, including quota
//! denial; enrichment is optional and the caller renders nothing extra.

use serde::{Deserialize, Serialize};
use sofra_core::{Quota, QuotaStore, RateLimiter};
use tracing::{debug, warn};

use crate::client::ApiClient;

/// Default search radius in meters for text search.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 2000.0;

/// Default search radius in meters for nearby-by-type search.
pub const DEFAULT_NEARBY_RADIUS_M: f64 = 1500.0;

/// A review attached to a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub relative_time: String,
    pub rating: Option<f64>,
    pub text: String,
    pub author_photo: Option<String>,
}

/// A nearby restaurant, ready for display.
#[derive(Debug, Clone)]
pub struct NearbyRestaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    /// Currency-symbol price tier ("₺".."₺₺₺₺"), empty when unknown or free.
    pub price_level: String,
    pub is_open: Option<bool>,
    /// Formatted distance from the search point, empty when unknown.
    pub distance: String,
    pub photo_url: Option<String>,
    pub types: Vec<String>,
    /// At most two reviews.
    pub reviews: Vec<Review>,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    query: String,
    latitude: f64,
    longitude: f64,
    radius: f64,
    language: &'a str,
}

#[derive(Serialize)]
struct NearbyBody<'a> {
    latitude: f64,
    longitude: f64,
    radius: f64,
    language: &'a str,
}

#[derive(Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    places: Vec<PlaceDto>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceDto {
    id: String,
    display_name: Option<TextValue>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_rating_count: Option<u32>,
    price_level: Option<String>,
    current_opening_hours: Option<OpeningHours>,
    photo_url: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    location: Option<LatLng>,
    #[serde(default)]
    reviews: Vec<ReviewDto>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpeningHours {
    open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDto {
    author_attribution: Option<AuthorAttribution>,
    relative_publish_time_description: Option<String>,
    rating: Option<f64>,
    text: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorAttribution {
    display_name: Option<String>,
    photo_uri: Option<String>,
}

impl PlaceDto {
    fn into_restaurant(self, origin_lat: f64, origin_lon: f64) -> NearbyRestaurant {
        NearbyRestaurant {
            id: self.id,
            name: self.display_name.map(|n| n.text).unwrap_or_default(),
            address: self.formatted_address.unwrap_or_default(),
            rating: self.rating,
            user_ratings_total: self.user_rating_count,
            price_level: map_price_level(self.price_level.as_deref()),
            is_open: self.current_opening_hours.and_then(|h| h.open_now),
            distance: self
                .location
                .map(|l| {
                    format_distance(haversine_km(origin_lat, origin_lon, l.latitude, l.longitude))
                })
                .unwrap_or_default(),
            photo_url: self.photo_url,
            types: self.types,
            reviews: self
                .reviews
                .into_iter()
                .take(2)
                .map(|r| Review {
                    author: r
                        .author_attribution
                        .as_ref()
                        .and_then(|a| a.display_name.clone())
                        .unwrap_or_else(|| "Anonim".to_string()),
                    relative_time: r.relative_publish_time_description.unwrap_or_default(),
                    rating: r.rating,
                    text: r.text.map(|t| t.text).unwrap_or_default(),
                    author_photo: r.author_attribution.and_then(|a| a.photo_uri),
                })
                .collect(),
        }
    }
}

/// Adapter for the backend's Places proxy endpoints.
pub struct PlacesAdapter<S> {
    client: ApiClient,
    limiter: RateLimiter<S>,
}

impl<S: QuotaStore> PlacesAdapter<S> {
    pub fn new(client: ApiClient, limiter: RateLimiter<S>) -> Self {
        Self { client, limiter }
    }

    /// Text search for restaurants serving a food near a point.
    ///
    /// Consumes one Places quota call. Empty on denial or any failure.
    pub async fn search_restaurants(
        &self,
        food_name: &str,
        latitude: f64,
        longitude: f64,
        radius: Option<f64>,
    ) -> Vec<NearbyRestaurant> {
        if !self.consume_quota() {
            return Vec::new();
        }

        let body = SearchBody {
            query: format!("{food_name} restaurant"),
            latitude,
            longitude,
            radius: radius.unwrap_or(DEFAULT_SEARCH_RADIUS_M),
            language: "tr",
        };

        self.run("/api/places/search", &body, latitude, longitude)
            .await
    }

    /// Nearby search restricted to restaurants, no food query.
    pub async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius: Option<f64>,
    ) -> Vec<NearbyRestaurant> {
        if !self.consume_quota() {
            return Vec::new();
        }

        let body = NearbyBody {
            latitude,
            longitude,
            radius: radius.unwrap_or(DEFAULT_NEARBY_RADIUS_M),
            language: "tr",
        };

        self.run("/api/places/nearby", &body, latitude, longitude)
            .await
    }

    /// Calls left on the Places quota today.
    pub fn remaining(&self) -> u32 {
        self.limiter
            .remaining(Quota::Places, self.client.config().places_daily_limit)
    }

    fn consume_quota(&self) -> bool {
        let limit = self.client.config().places_daily_limit;
        let status = self.limiter.check_and_increment(Quota::Places, limit);
        if !status.allowed {
            debug!("Places quota exhausted for today");
        }
        status.allowed
    }

    async fn run<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        latitude: f64,
        longitude: f64,
    ) -> Vec<NearbyRestaurant> {
        let response: PlacesResponse = match self.client.post_json(path, body).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%err, path, "Places request failed");
                return Vec::new();
            }
        };

        if let Some(error) = response.error {
            warn!(%error, path, "Places backend reported an error");
            return Vec::new();
        }

        response
            .places
            .into_iter()
            .map(|p| p.into_restaurant(latitude, longitude))
            .collect()
    }
}

/// Google price tier to a Turkish-lira symbol run.
fn map_price_level(level: Option<&str>) -> String {
    match level {
        Some("PRICE_LEVEL_INEXPENSIVE") => "₺",
        Some("PRICE_LEVEL_MODERATE") => "₺₺",
        Some("PRICE_LEVEL_EXPENSIVE") => "₺₺₺",
        Some("PRICE_LEVEL_VERY_EXPENSIVE") => "₺₺₺₺",
        _ => "",
    }
    .to_string()
}

/// Great-circle distance in kilometers.
fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Meters below one kilometer, otherwise one-decimal kilometers.
fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1} km")
    }
}
