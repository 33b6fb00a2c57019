//! Current-weather provider (Open-Meteo).
//!
//! Weather only flavors suggestions, so failures collapse to `None` and
//! results are cached for fifteen minutes to avoid hammering a free API.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RemoteError, Result};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// How long a fetched observation stays fresh.
const CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Coarse weather condition, refined by temperature when the sky is clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Stormy,
    Snowy,
    Rainy,
    Foggy,
    Cloudy,
    Hot,
    Cold,
    Clear,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Foggy => "foggy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Hot => "hot",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Clear => "clear",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A current-weather observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    /// Rounded temperature in °C.
    pub temperature: i32,
    pub condition: WeatherCondition,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    weather_code: u32,
}

/// Weather provider with a time-bounded in-memory cache.
pub struct WeatherProvider {
    http: reqwest::Client,
    cache: Mutex<Option<(Instant, Weather)>>,
}

impl WeatherProvider {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            cache: Mutex::new(None),
        }
    }

    /// Current weather at a point, or `None` on any failure.
    pub async fn current(&self, latitude: f64, longitude: f64) -> Option<Weather> {
        if let Some(cached) = self.cached() {
            debug!("serving weather from cache");
            return Some(cached);
        }

        match self.fetch(latitude, longitude).await {
            Ok(weather) => {
                self.store(weather);
                Some(weather)
            }
            Err(err) => {
                warn!(%err, "weather fetch failed");
                None
            }
        }
    }

    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Weather> {
        let url = format!(
            "{FORECAST_URL}?latitude={latitude}&longitude={longitude}\
             &current=temperature_2m,weather_code&timezone=auto&forecast_days=1"
        );

        let response: ForecastResponse = self.http.get(&url).send().await?.json().await?;
        let current = response
            .current
            .ok_or_else(|| RemoteError::InvalidResponse("missing current block".into()))?;

        Ok(Weather {
            temperature: current.temperature_2m.round() as i32,
            condition: condition_for(current.weather_code, current.temperature_2m),
        })
    }

    fn cached(&self) -> Option<Weather> {
        let cache = self.cache.lock().ok()?;
        match *cache {
            Some((fetched_at, weather)) if fetched_at.elapsed() < CACHE_TTL => Some(weather),
            _ => None,
        }
    }

    fn store(&self, weather: Weather) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = Some((Instant::now(), weather));
        }
    }
}

impl Default for WeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// WMO weather code to condition, with temperature breaking the clear case
/// into hot/cold/clear.
fn condition_for(code: u32, temperature: f64) -> WeatherCondition {
    match code {
        95.. => WeatherCondition::Stormy,
        71.. => WeatherCondition::Snowy,
        51.. => WeatherCondition::Rainy,
        45.. => WeatherCondition::Foggy,
        1.. => WeatherCondition::Cloudy,
        _ if temperature >= 28.0 => WeatherCondition::Hot,
        _ if temperature <= 10.0 => WeatherCondition::Cold,
        _ => WeatherCondition::Clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wmo_code_ranges_map_to_conditions() {
        assert_eq!(condition_for(99, 20.0), WeatherCondition::Stormy);
        assert_eq!(condition_for(95, 20.0), WeatherCondition::Stormy);
        assert_eq!(condition_for(75, 20.0), WeatherCondition::Snowy);
        assert_eq!(condition_for(61, 20.0), WeatherCondition::Rainy);
        assert_eq!(condition_for(45, 20.0), WeatherCondition::Foggy);
        assert_eq!(condition_for(3, 20.0), WeatherCondition::Cloudy);
    }

    #[test]
    fn clear_sky_refines_by_temperature() {
        assert_eq!(condition_for(0, 30.0), WeatherCondition::Hot);
        assert_eq!(condition_for(0, 28.0), WeatherCondition::Hot);
        assert_eq!(condition_for(0, 5.0), WeatherCondition::Cold);
        assert_eq!(condition_for(0, 10.0), WeatherCondition::Cold);
        assert_eq!(condition_for(0, 20.0), WeatherCondition::Clear);
    }

    #[test]
    fn cloud_codes_win_over_temperature() {
        assert_eq!(condition_for(2, 35.0), WeatherCondition::Cloudy);
    }

    #[test]
    fn cache_returns_stored_observation() {
        let provider = WeatherProvider::new();
        let weather = Weather {
            temperature: 21,
            condition: WeatherCondition::Clear,
        };
        provider.store(weather);
        assert_eq!(provider.cached(), Some(weather));
    }

    #[test]
    fn forecast_response_parses() {
        let response: ForecastResponse = serde_json::from_str(
            r#"{"current": {"temperature_2m": 23.4, "weather_code": 2, "wind_speed_10m": 8.1}}"#,
        )
        .unwrap();
        let current = response.current.unwrap();
        assert_eq!(current.weather_code, 2);
    }
}
