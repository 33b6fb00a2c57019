//! User preferences.
//!
//! One mutable record per installation: dietary flags, notification settings,
//! language, and an optional preferred cuisine. Loaded at startup, mutated
//! through explicit setters, persisted by `sofra-storage`.

use serde::{Deserialize, Serialize};

/// UI language selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Follow the device locale.
    #[default]
    Auto,
    En,
    Tr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn parse(s: &str) -> Option<Language> {
        match s {
            "auto" => Some(Language::Auto),
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            _ => None,
        }
    }
}

/// Time of day for the daily notification, stored as hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTime {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl NotificationTime {
    /// Creates a new notification time.
    ///
    /// # Panics
    /// Panics if hour >= 24 or minute >= 60.
    pub fn new(hour: u8, minute: u8) -> Self {
        assert!(hour < 24, "hour must be 0-23");
        assert!(minute < 60, "minute must be 0-59");
        Self { hour, minute }
    }

    /// Parses an "HH:MM" string.
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        let hour: u8 = h.parse().ok()?;
        let minute: u8 = m.parse().ok()?;
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

impl Default for NotificationTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
        }
    }
}

impl std::fmt::Display for NotificationTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Persisted user preferences.
///
/// The vegan/vegetarian flags are stored independently but coupled at
/// mutation time: turning vegan on forces vegetarian on, and turning
/// vegetarian off forces vegan off. Use the setters; writing the fields
/// directly bypasses the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub notifications_enabled: bool,
    pub notification_time: NotificationTime,
    pub language: Language,
    /// Preferred cuisine identifier; a soft constraint for the engine.
    pub preferred_cuisine: Option<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            notifications_enabled: false,
            notification_time: NotificationTime::default(),
            language: Language::Auto,
            preferred_cuisine: None,
        }
    }
}

impl UserPreferences {
    /// Sets the vegan flag. Turning it on also turns vegetarian on.
    pub fn set_vegan(&mut self, on: bool) {
        self.is_vegan = on;
        if on {
            self.is_vegetarian = true;
        }
    }

    /// Sets the vegetarian flag. Turning it off also turns vegan off.
    pub fn set_vegetarian(&mut self, on: bool) {
        self.is_vegetarian = on;
        if !on {
            self.is_vegan = false;
        }
    }

    /// Sets the gluten-free flag. Independent of the other two.
    pub fn set_gluten_free(&mut self, on: bool) {
        self.is_gluten_free = on;
    }

    /// True when any dietary constraint is active.
    pub fn has_diet_constraints(&self) -> bool {
        self.is_vegetarian || self.is_vegan || self.is_gluten_free
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vegan_on_forces_vegetarian_on() {
        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);
        assert!(prefs.is_vegan);
        assert!(prefs.is_vegetarian);
    }

    #[test]
    fn vegetarian_off_forces_vegan_off() {
        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);
        prefs.set_vegetarian(false);
        assert!(!prefs.is_vegetarian);
        assert!(!prefs.is_vegan);
    }

    #[test]
    fn vegan_off_keeps_vegetarian() {
        let mut prefs = UserPreferences::default();
        prefs.set_vegan(true);
        prefs.set_vegan(false);
        assert!(prefs.is_vegetarian);
        assert!(!prefs.is_vegan);
    }

    #[test]
    fn gluten_free_is_independent() {
        let mut prefs = UserPreferences::default();
        prefs.set_gluten_free(true);
        assert!(prefs.is_gluten_free);
        assert!(!prefs.is_vegetarian);
        assert!(!prefs.is_vegan);
    }

    #[test]
    fn notification_time_parse_and_display() {
        let time = NotificationTime::parse("09:30").unwrap();
        assert_eq!(time, NotificationTime::new(9, 30));
        assert_eq!(time.to_string(), "09:30");
        assert!(NotificationTime::parse("24:00").is_none());
        assert!(NotificationTime::parse("12:60").is_none());
        assert!(NotificationTime::parse("noon").is_none());
    }

    #[test]
    fn malformed_stored_json_falls_back_to_defaults() {
        // Unknown or missing keys must not fail the load.
        let prefs: UserPreferences = serde_json::from_str(r#"{"is_vegan": true}"#).unwrap();
        assert!(prefs.is_vegan);
        assert!(!prefs.is_gluten_free);
        assert_eq!(prefs.language, Language::Auto);
        assert_eq!(prefs.notification_time, NotificationTime::new(12, 0));
    }
}
