//! Mood definitions.
//!
//! Moods are the primary recommendation key. The set is fixed and small;
//! it is not extensible at runtime.

use serde::{Deserialize, Serialize};

/// An emotional state the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Tired,
    Stressed,
    Relaxed,
}

impl Mood {
    /// Returns all moods in display order.
    pub fn all() -> [Mood; 6] {
        [
            Mood::Happy,
            Mood::Sad,
            Mood::Energetic,
            Mood::Tired,
            Mood::Stressed,
            Mood::Relaxed,
        ]
    }

    /// Returns the mood identifier as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
            Mood::Relaxed => "relaxed",
        }
    }

    /// Parses a mood from its identifier.
    ///
    /// Unknown identifiers return `None`; callers that need a total mapping
    /// fall back to [`Mood::Happy`].
    pub fn parse(s: &str) -> Option<Mood> {
        match s.to_lowercase().as_str() {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "energetic" => Some(Mood::Energetic),
            "tired" => Some(Mood::Tired),
            "stressed" => Some(Mood::Stressed),
            "relaxed" => Some(Mood::Relaxed),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Mutlu",
            Mood::Sad => "Üzgün",
            Mood::Energetic => "Enerjik",
            Mood::Tired => "Yorgun",
            Mood::Stressed => "Stresli",
            Mood::Relaxed => "Rahat",
        }
    }

    /// Display emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Energetic => "⚡",
            Mood::Tired => "😴",
            Mood::Stressed => "😤",
            Mood::Relaxed => "😌",
        }
    }

    /// Short first-person description shown on the mood picker.
    pub fn description(&self) -> &'static str {
        match self {
            Mood::Happy => "Harika hissediyorum!",
            Mood::Sad => "Biraz moral bozuk...",
            Mood::Energetic => "Enerji doluyum!",
            Mood::Tired => "Biraz dinlenmeliyim...",
            Mood::Stressed => "Çok yoğun bir gün!",
            Mood::Relaxed => "Huzur içindeyim.",
        }
    }

    /// Canned suggestion messages for this mood (3 variants each).
    pub fn messages(&self) -> [&'static str; 3] {
        match self {
            Mood::Happy => [
                "Mutluluğunuzu kutlayacak lezzetler! 🎉",
                "Keyfinize keyif katacak öneriler! 🌟",
                "Harika hissettiğinizde harika yemekler! ✨",
            ],
            Mood::Sad => [
                "Sizi sarmalayacak comfort food'lar 🤗",
                "Moralinizi yükseltecek lezzetler 💝",
                "İçinizi ısıtacak öneriler 🌈",
            ],
            Mood::Energetic => [
                "Enerjinizi koruyacak sağlıklı seçenekler! 💪",
                "Dinamik ruh halinize uygun lezzetler! ⚡",
                "Performansınızı destekleyecek yemekler! 🏃",
            ],
            Mood::Tired => [
                "Sizi canlandıracak öneriler ☕",
                "Enerji deponuzu dolduracak yemekler 🔋",
                "Yorgunluğunuzu atacak lezzetler 🌟",
            ],
            Mood::Stressed => [
                "Rahatlamanıza yardımcı olacak seçenekler 🧘",
                "Stresi azaltacak lezzetler 🌿",
                "Zihninizi dinlendirecek öneriler 🍃",
            ],
            Mood::Relaxed => [
                "Keyfinize keyif katacak gurme seçenekler 🍷",
                "Huzurlu anlarınız için özel öneriler 🌺",
                "Rahatlamaya devam edecek lezzetler ☀️",
            ],
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_all_moods() {
        for mood in Mood::all() {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Mood::parse("HAPPY"), Some(Mood::Happy));
        assert_eq!(Mood::parse("Tired"), Some(Mood::Tired));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Mood::parse("hangry"), None);
        assert_eq!(Mood::parse(""), None);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Mood::Energetic).unwrap();
        assert_eq!(json, "\"energetic\"");
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Energetic);
    }

    #[test]
    fn every_mood_has_three_messages() {
        for mood in Mood::all() {
            let messages = mood.messages();
            assert_eq!(messages.len(), 3);
            assert!(messages.iter().all(|m| !m.is_empty()));
        }
    }
}
