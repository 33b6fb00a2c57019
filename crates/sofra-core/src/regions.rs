//! Geographic regions and the city lookup table.
//!
//! Cities come from reverse geocoding as free-text names; the lookup is an
//! exact, case-sensitive match on the name as the geocoder reports it.
//! Unknown cities simply disable regional prioritization.

use serde::{Deserialize, Serialize};

/// One of the seven geographic regions used for regional prioritization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Marmara,
    Ege,
    Akdeniz,
    #[serde(rename = "icanadolu")]
    IcAnadolu,
    Karadeniz,
    #[serde(rename = "doguanadolu")]
    DoguAnadolu,
    Guneydogu,
}

impl Region {
    /// Returns all regions.
    pub fn all() -> [Region; 7] {
        [
            Region::Marmara,
            Region::Ege,
            Region::Akdeniz,
            Region::IcAnadolu,
            Region::Karadeniz,
            Region::DoguAnadolu,
            Region::Guneydogu,
        ]
    }

    /// Returns the region code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Marmara => "marmara",
            Region::Ege => "ege",
            Region::Akdeniz => "akdeniz",
            Region::IcAnadolu => "icanadolu",
            Region::Karadeniz => "karadeniz",
            Region::DoguAnadolu => "doguanadolu",
            Region::Guneydogu => "guneydogu",
        }
    }

    /// Parses a region from its code.
    pub fn parse(s: &str) -> Option<Region> {
        match s {
            "marmara" => Some(Region::Marmara),
            "ege" => Some(Region::Ege),
            "akdeniz" => Some(Region::Akdeniz),
            "icanadolu" => Some(Region::IcAnadolu),
            "karadeniz" => Some(Region::Karadeniz),
            "doguanadolu" => Some(Region::DoguAnadolu),
            "guneydogu" => Some(Region::Guneydogu),
            _ => None,
        }
    }

    /// Human-readable region name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Marmara => "Marmara",
            Region::Ege => "Ege",
            Region::Akdeniz => "Akdeniz",
            Region::IcAnadolu => "İç Anadolu",
            Region::Karadeniz => "Karadeniz",
            Region::DoguAnadolu => "Doğu Anadolu",
            Region::Guneydogu => "Güneydoğu Anadolu",
        }
    }

    /// Canned message shown when a suggestion includes a local specialty.
    pub fn message(&self) -> &'static str {
        match self {
            Region::Marmara => "Marmara'nın eşsiz lezzetleri sizin için! 🌊",
            Region::Ege => "Ege'nin sağlıklı Akdeniz mutfağı 🫒",
            Region::Akdeniz => "Akdeniz'in baharatlı lezzetleri 🌶️",
            Region::IcAnadolu => "İç Anadolu'nun geleneksel tatları 🏔️",
            Region::Karadeniz => "Karadeniz'in zengin mutfağı 🐟",
            Region::DoguAnadolu => "Doğu'nun otantik lezzetleri 🏔️",
            Region::Guneydogu => "Güneydoğu'nun efsane mutfağı 🍖",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a city name to its region.
///
/// Not every city is mapped; an unmapped city returns `None` and the caller
/// skips regional prioritization. No fuzzy matching.
pub fn region_for_city(city: &str) -> Option<Region> {
    let region = match city {
        // Marmara
        "İstanbul" | "Bursa" | "Kocaeli" | "Sakarya" | "Edirne" | "Tekirdağ" | "Çanakkale"
        | "Balıkesir" => Region::Marmara,
        // Ege
        "İzmir" | "Aydın" | "Muğla" | "Denizli" | "Manisa" | "Afyon" | "Afyonkarahisar" => {
            Region::Ege
        }
        // Akdeniz
        "Antalya" | "Adana" | "Mersin" | "Hatay" | "Kahramanmaraş" => Region::Akdeniz,
        // İç Anadolu
        "Ankara" | "Konya" | "Eskişehir" | "Kayseri" | "Sivas" | "Nevşehir" => Region::IcAnadolu,
        // Karadeniz
        "Trabzon" | "Samsun" | "Rize" | "Ordu" | "Giresun" | "Artvin" => Region::Karadeniz,
        // Doğu Anadolu
        "Erzurum" | "Van" | "Malatya" | "Elazığ" | "Kars" => Region::DoguAnadolu,
        // Güneydoğu Anadolu
        "Gaziantep" | "Diyarbakır" | "Şanlıurfa" | "Mardin" => Region::Guneydogu,
        _ => return None,
    };
    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cities_resolve() {
        assert_eq!(region_for_city("Trabzon"), Some(Region::Karadeniz));
        assert_eq!(region_for_city("İzmir"), Some(Region::Ege));
        assert_eq!(region_for_city("Gaziantep"), Some(Region::Guneydogu));
        assert_eq!(region_for_city("Ankara"), Some(Region::IcAnadolu));
    }

    #[test]
    fn unknown_city_is_none() {
        assert_eq!(region_for_city("Berlin"), None);
        assert_eq!(region_for_city(""), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // The geocoder provides canonical casing; no normalization happens.
        assert_eq!(region_for_city("trabzon"), None);
        assert_eq!(region_for_city("ISTANBUL"), None);
    }

    #[test]
    fn codes_roundtrip() {
        for region in Region::all() {
            assert_eq!(Region::parse(region.as_str()), Some(region));
        }
    }

    #[test]
    fn serde_matches_codes() {
        for region in Region::all() {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
    }
}
