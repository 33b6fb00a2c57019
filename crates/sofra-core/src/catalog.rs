//! Bundled seed catalog.
//!
//! The remote catalog endpoint is the source of truth; this compiled-in list
//! is the offline fallback and the fixture the engine tests run against.

use crate::food::Food;
use crate::mood::Mood;
use crate::regions::Region;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    emoji: &str,
    category: &str,
    cuisine: &str,
    moods: &[Mood],
    regions: &[Region],
    vegetarian: bool,
    vegan: bool,
    gluten_free: bool,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        emoji: emoji.to_string(),
        category: category.to_string(),
        cuisine: Some(cuisine.to_string()),
        moods: moods.to_vec(),
        regions: regions.to_vec(),
        is_vegetarian: vegetarian,
        is_vegan: vegan,
        is_gluten_free: gluten_free,
    }
}

/// Returns the bundled catalog.
pub fn seed_catalog() -> Vec<Food> {
    use Mood::*;
    use Region::*;

    vec![
        // General dishes
        entry(
            "pizza_veg",
            "Sebzeli Pizza",
            "Bol sebzeli, sağlıklı İtalyan pizzası",
            "🍕",
            "Fast Food",
            "italian",
            &[Happy, Energetic, Relaxed],
            &[],
            true,
            false,
            false,
        ),
        entry(
            "pasta",
            "Makarna",
            "Kremalı veya domatesli soslu nefis makarna",
            "🍝",
            "Ana Yemek",
            "italian",
            &[Happy, Sad, Tired],
            &[],
            true,
            false,
            false,
        ),
        entry(
            "sushi_veg",
            "Sebze Sushi",
            "Avokado ve sebzeli vejetaryen sushi",
            "🍣",
            "Dünya Mutfağı",
            "japanese",
            &[Happy, Relaxed],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "burger",
            "Hamburger",
            "Ev yapımı köfteli, özel soslu burger",
            "🍔",
            "Fast Food",
            "american",
            &[Happy, Energetic, Stressed],
            &[],
            false,
            false,
            false,
        ),
        entry(
            "soup",
            "Mercimek Çorbası",
            "Geleneksel Türk mercimek çorbası",
            "🍲",
            "Geleneksel",
            "turkish",
            &[Sad, Tired, Relaxed],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "kebab_antep",
            "Antep Kebabı",
            "Gaziantep'in meşhur baharatlı kebabı",
            "🍖",
            "Bölgesel",
            "turkish",
            &[Happy, Relaxed, Energetic],
            &[Guneydogu],
            false,
            false,
            true,
        ),
        entry(
            "kunefe",
            "Künefe",
            "Hatay'ın peynirli, şerbetli tatlısı",
            "🍮",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad, Relaxed],
            &[Akdeniz, Guneydogu],
            true,
            false,
            false,
        ),
        entry(
            "chocolate",
            "Çikolata",
            "Sütlü veya bitter, mutluluk veren çikolata",
            "🍫",
            "Tatlı",
            "snack",
            &[Sad, Stressed, Happy],
            &[],
            true,
            false,
            true,
        ),
        entry(
            "icecream",
            "Dondurma",
            "Çeşit çeşit lezzetlerde taze dondurma",
            "🍦",
            "Tatlı",
            "world",
            &[Sad, Happy, Relaxed],
            &[],
            true,
            false,
            true,
        ),
        entry(
            "salad",
            "Yeşil Salata",
            "Taze sebzelerle hazırlanmış sağlıklı salata",
            "🥗",
            "Sağlıklı",
            "world",
            &[Energetic, Relaxed],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "smoothie",
            "Smoothie",
            "Meyveli, vitaminli enerji içeceği",
            "🥤",
            "İçecek",
            "world",
            &[Energetic, Happy],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "coffee",
            "Kahve",
            "Enerji veren sıcak veya soğuk kahve",
            "☕",
            "İçecek",
            "world",
            &[Tired, Stressed],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "tea",
            "Bitki Çayı",
            "Papatya veya nane çayı ile rahatlayın",
            "🍵",
            "İçecek",
            "world",
            &[Stressed, Relaxed, Tired],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "nuts",
            "Kuruyemiş",
            "Ceviz, badem, fındık karışımı",
            "🥜",
            "Atıştırmalık",
            "turkish",
            &[Stressed, Tired, Energetic],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "falafel",
            "Falafel",
            "Nohutlu, baharatlı vegan köfte",
            "🧆",
            "Dünya Mutfağı",
            "middle_eastern",
            &[Happy, Energetic],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "hummus",
            "Humus",
            "Tahin ve nohutlu sağlıklı meze",
            "🥙",
            "Meze",
            "middle_eastern",
            &[Relaxed, Energetic],
            &[],
            true,
            true,
            true,
        ),
        entry(
            "taco",
            "Taco",
            "Meksika usulü acılı etli veya sebzeli taco",
            "🌮",
            "Dünya Mutfağı",
            "mexican",
            &[Happy, Energetic],
            &[],
            false,
            false,
            true,
        ),
        entry(
            "ramen",
            "Ramen",
            "Zengin aromalı, noodle dolu Japon çorbası",
            "🍜",
            "Dünya Mutfağı",
            "japanese",
            &[Happy, Tired, Sad],
            &[],
            false,
            false,
            false,
        ),
        entry(
            "butter_chicken",
            "Butter Chicken",
            "Baharatlı ve kremalı Hint tavuk yemeği",
            "🥘",
            "Dünya Mutfağı",
            "indian",
            &[Happy, Relaxed],
            &[],
            false,
            false,
            true,
        ),
        // Güneydoğu Anadolu
        entry(
            "baklava_antep",
            "Antep Baklavası",
            "Fıstıklı, şerbetli gerçek Antep baklavası",
            "🥮",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad, Relaxed],
            &[Guneydogu],
            true,
            false,
            false,
        ),
        entry(
            "lahmacun_urfa",
            "Urfa Lahmacunu",
            "İnce hamurlu, acılı Urfa lahmacunu",
            "🫓",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic, Tired],
            &[Guneydogu],
            false,
            false,
            false,
        ),
        entry(
            "cig_kofte",
            "Çiğ Köfte",
            "Acılı, baharatlı vejetaryen çiğ köfte",
            "🥙",
            "Bölgesel",
            "turkish",
            &[Energetic, Happy],
            &[Guneydogu],
            true,
            true,
            false,
        ),
        entry(
            "katmer",
            "Katmer",
            "Kaymak ve fıstıklı Gaziantep katmeri",
            "🥞",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Relaxed],
            &[Guneydogu],
            true,
            false,
            false,
        ),
        // Karadeniz
        entry(
            "kuymak",
            "Kuymak (Muhlama)",
            "Karadeniz'in meşhur peynirli mısır unu yemeği",
            "🧀",
            "Bölgesel",
            "turkish",
            &[Sad, Tired, Relaxed],
            &[Karadeniz],
            true,
            false,
            true,
        ),
        entry(
            "hamsi",
            "Hamsi Tava",
            "Karadeniz'in vazgeçilmez taze hamsi",
            "🐟",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic],
            &[Karadeniz],
            false,
            false,
            true,
        ),
        entry(
            "pide_karadeniz",
            "Karadeniz Pidesi",
            "Tereyağlı, yumurtalı Trabzon pidesi",
            "🥖",
            "Bölgesel",
            "turkish",
            &[Happy, Tired, Relaxed],
            &[Karadeniz],
            true,
            false,
            false,
        ),
        entry(
            "laz_boregi",
            "Laz Böreği",
            "Tatlı muhallebili Karadeniz böreği",
            "🥧",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad, Relaxed],
            &[Karadeniz],
            true,
            false,
            false,
        ),
        // Ege
        entry(
            "zeytinyagli",
            "Zeytinyağlılar",
            "Ege'nin sağlıklı zeytinyağlı yemekleri",
            "🫒",
            "Bölgesel",
            "turkish",
            &[Relaxed, Energetic, Happy],
            &[Ege],
            true,
            true,
            true,
        ),
        entry(
            "boyoz",
            "Boyoz",
            "İzmir'in meşhur kahvaltı lezzeti",
            "🥐",
            "Bölgesel",
            "turkish",
            &[Happy, Tired],
            &[Ege],
            true,
            false,
            false,
        ),
        entry(
            "kumru",
            "Kumru",
            "İzmir'in özel sandviçi sucuk ve kaşarlı",
            "🥪",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic],
            &[Ege],
            false,
            false,
            false,
        ),
        entry(
            "lokma",
            "İzmir Lokması",
            "Şerbetli, çıtır çıtır İzmir lokması",
            "🍩",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad],
            &[Ege],
            true,
            false,
            false,
        ),
        // Akdeniz
        entry(
            "adana_kebab",
            "Adana Kebabı",
            "Acılı, el yapımı gerçek Adana kebabı",
            "🍢",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic, Stressed],
            &[Akdeniz],
            false,
            false,
            true,
        ),
        entry(
            "salgam",
            "Şalgam",
            "Adana'nın vazgeçilmez içeceği",
            "🧃",
            "Bölgesel İçecek",
            "turkish",
            &[Energetic, Happy],
            &[Akdeniz],
            true,
            true,
            true,
        ),
        entry(
            "tantuni",
            "Tantuni",
            "Mersin'in meşhur et dürümü",
            "🌯",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic, Tired],
            &[Akdeniz],
            false,
            false,
            false,
        ),
        // İç Anadolu
        entry(
            "manti_kayseri",
            "Kayseri Mantısı",
            "Yoğurtlu, salçalı küçük mantılar",
            "🥟",
            "Bölgesel",
            "turkish",
            &[Sad, Relaxed, Happy],
            &[IcAnadolu],
            true,
            false,
            false,
        ),
        entry(
            "etli_ekmek",
            "Konya Etli Ekmek",
            "Uzun, ince Konya etli ekmeği",
            "🥖",
            "Bölgesel",
            "turkish",
            &[Happy, Tired, Energetic],
            &[IcAnadolu],
            false,
            false,
            false,
        ),
        entry(
            "pastirma",
            "Pastırma",
            "Kayseri'nin dünyaca ünlü pastırması",
            "🥩",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic],
            &[IcAnadolu],
            false,
            false,
            true,
        ),
        entry(
            "ankara_tava",
            "Ankara Tava",
            "Ankara'nın geleneksel et yemeği",
            "🍳",
            "Bölgesel",
            "turkish",
            &[Happy, Tired, Relaxed],
            &[IcAnadolu],
            false,
            false,
            true,
        ),
        // Marmara
        entry(
            "iskender",
            "İskender Kebab",
            "Bursa'nın meşhur tereyağlı iskenderi",
            "🍖",
            "Bölgesel",
            "turkish",
            &[Happy, Relaxed, Tired],
            &[Marmara],
            false,
            false,
            false,
        ),
        entry(
            "inegol_kofte",
            "İnegöl Köfte",
            "Bursa İnegöl'ün özel köftesi",
            "🍖",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic],
            &[Marmara],
            false,
            false,
            true,
        ),
        entry(
            "kestane_sekeri",
            "Kestane Şekeri",
            "Bursa'nın tatlı kestane şekeri",
            "🌰",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad, Relaxed],
            &[Marmara],
            true,
            true,
            true,
        ),
        entry(
            "balik_ekmek",
            "Balık Ekmek",
            "İstanbul Eminönü'nün simgesi",
            "🐟",
            "Bölgesel",
            "turkish",
            &[Happy, Relaxed],
            &[Marmara],
            false,
            false,
            false,
        ),
        entry(
            "kokorec",
            "Kokoreç",
            "İstanbul sokak lezzeti",
            "🌯",
            "Sokak Lezzeti",
            "turkish",
            &[Happy, Energetic, Tired],
            &[Marmara],
            false,
            false,
            true,
        ),
        // Doğu Anadolu
        entry(
            "cag_kebabi",
            "Cağ Kebabı",
            "Erzurum'un yatay döner kebabı",
            "🍖",
            "Bölgesel",
            "turkish",
            &[Happy, Energetic],
            &[DoguAnadolu],
            false,
            false,
            true,
        ),
        entry(
            "kars_gravyer",
            "Kars Gravyeri ile Kahvaltı",
            "Kars'ın ünlü gravyer peyniri",
            "🧀",
            "Bölgesel",
            "turkish",
            &[Happy, Relaxed],
            &[DoguAnadolu],
            true,
            false,
            true,
        ),
        entry(
            "kadayif_dolmasi",
            "Kadayıf Dolması",
            "Malatya'nın cevizli tatlısı",
            "🥮",
            "Bölgesel Tatlı",
            "turkish",
            &[Happy, Sad, Relaxed],
            &[DoguAnadolu],
            true,
            false,
            false,
        ),
        entry(
            "kuru_kayisi",
            "Malatya Kayısısı",
            "Dünyaca ünlü Malatya kuru kayısısı",
            "🍑",
            "Bölgesel",
            "turkish",
            &[Energetic, Happy, Tired],
            &[DoguAnadolu],
            true,
            true,
            true,
        ),
    ]
}

/// Distinct cuisine identifiers present in a catalog, in first-seen order.
pub fn cuisines(catalog: &[Food]) -> Vec<String> {
    let mut seen = Vec::new();
    for food in catalog {
        if let Some(cuisine) = &food.cuisine {
            if !seen.contains(cuisine) {
                seen.push(cuisine.clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let catalog = seed_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_mood_has_candidates() {
        let catalog = seed_catalog();
        for mood in Mood::all() {
            assert!(
                catalog.iter().any(|f| f.matches_mood(mood)),
                "no seed food for mood {mood}"
            );
        }
    }

    #[test]
    fn every_region_has_specialties() {
        let catalog = seed_catalog();
        for region in Region::all() {
            assert!(
                catalog.iter().any(|f| f.is_regional_to(region)),
                "no seed food for region {region}"
            );
        }
    }

    #[test]
    fn kuymak_is_a_tired_karadeniz_food() {
        let catalog = seed_catalog();
        let kuymak = catalog.iter().find(|f| f.id == "kuymak").unwrap();
        assert!(kuymak.matches_mood(Mood::Tired));
        assert!(kuymak.is_regional_to(Region::Karadeniz));
    }

    #[test]
    fn cuisines_are_deduplicated() {
        let catalog = seed_catalog();
        let list = cuisines(&catalog);
        assert!(list.iter().any(|c| c == "turkish"));
        assert!(list.iter().any(|c| c == "japanese"));
        let mut sorted = list.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), list.len());
    }
}
