//! Tafseer (exegesis) and word-meaning collections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TafseerKind {
    Tafseer,
    WordMeanings,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tafseer {
    pub id: &'static str,
    pub filename: &'static str,
    #[serde(rename = "zipFilename")]
    pub zip_filename: Option<&'static str>,
    pub name_en: &'static str,
    pub name_ar: Option<&'static str>,
    pub language: Language,
    #[serde(rename = "type")]
    pub kind: TafseerKind,
    pub author: &'static str,
    pub description: &'static str,
}

const ASSET_PREFIX: &str = "assets/Tafseer";

impl Tafseer {
    pub fn data_key(&self) -> String {
        format!("{}/{}", ASSET_PREFIX, self.filename)
    }

    pub fn archive_key(&self) -> Option<String> {
        self.zip_filename
            .map(|zip| format!("{}/{}", ASSET_PREFIX, zip))
    }
}

pub static TAFSEERS: [Tafseer; 8] = [
    Tafseer {
        id: "word-by-word-english",
        filename: "word_by_word_english.json",
        zip_filename: Some("word_by_word_english.zip"),
        name_en: "Word by Word Translation",
        name_ar: None,
        language: Language::English,
        kind: TafseerKind::WordMeanings,
        author: "Quran.com",
        description: "Arabic to English word-by-word meanings with transliteration",
    },
    Tafseer {
        id: "mufradat",
        filename: "quran_mufradat.json",
        zip_filename: Some("quran_mufradat.zip"),
        name_en: "Quran Mufradat",
        name_ar: Some("مفردات القرآن"),
        language: Language::Arabic,
        kind: TafseerKind::WordMeanings,
        author: "Al-Raghib al-Isfahani",
        description: "Arabic to Arabic word meanings and vocabulary",
    },
    Tafseer {
        id: "ibn-kathir-english",
        filename: "tafseer_ibn_kathir_english.json",
        zip_filename: Some("tafseer_ibn_kathir_english.zip"),
        name_en: "Tafsir Ibn Kathir",
        name_ar: Some("تفسير ابن كثير"),
        language: Language::English,
        kind: TafseerKind::Tafseer,
        author: "Ibn Kathir",
        description: "English translation of Tafsir Ibn Kathir",
    },
    Tafseer {
        id: "maarif-ul-quran",
        filename: "tafseer_maarif_ul_quran_english.json",
        zip_filename: Some("tafseer_maarif_ul_quran_english.zip"),
        name_en: "Ma'ariful Quran",
        name_ar: Some("معارف القرآن"),
        language: Language::English,
        kind: TafseerKind::Tafseer,
        author: "Mufti Muhammad Shafi",
        description: "English translation of Ma'ariful Quran",
    },
    Tafseer {
        id: "al-saddi",
        filename: "tafseer_tafseer-al-saddi.json",
        zip_filename: Some("tafseer_tafseer-al-saddi.zip"),
        name_en: "Tafsir Al-Saddi",
        name_ar: Some("تفسير السعدي"),
        language: Language::Arabic,
        kind: TafseerKind::Tafseer,
        author: "Abdur Rahman Al-Saddi",
        description: "Arabic tafseer by Shaykh Al-Saddi",
    },
    Tafseer {
        id: "al-tabari",
        filename: "tafseer_tafsir-al-tabari.json",
        zip_filename: Some("tafseer_tafsir-al-tabari.zip"),
        name_en: "Tafsir Al-Tabari",
        name_ar: Some("تفسير الطبري"),
        language: Language::Arabic,
        kind: TafseerKind::Tafseer,
        author: "Ibn Jarir Al-Tabari",
        description: "Arabic tafseer by Imam Al-Tabari",
    },
    Tafseer {
        id: "ibn-kathir",
        filename: "tafseer_tafsir-ibn-kathir.json",
        zip_filename: Some("tafseer_tafsir-ibn-kathir.zip"),
        name_en: "Tafsir Ibn Kathir",
        name_ar: Some("تفسير ابن كثير"),
        language: Language::Arabic,
        kind: TafseerKind::Tafseer,
        author: "Ibn Kathir",
        description: "Arabic tafseer by Ibn Kathir",
    },
    Tafseer {
        id: "muyassar",
        filename: "tafseer_tafsir-muyassar.json",
        zip_filename: Some("tafseer_tafsir-muyassar.zip"),
        name_en: "Al-Tafsir Al-Muyassar",
        name_ar: Some("التفسير الميسر"),
        language: Language::Arabic,
        kind: TafseerKind::Tafseer,
        author: "King Fahd Complex",
        description: "Simplified Arabic tafseer",
    },
];

pub fn find_tafseer(id: &str) -> Option<&'static Tafseer> {
    TAFSEERS.iter().find(|t| t.id == id)
}

/// Stored tafseer document: one entry per surah, each holding its ayat.
#[derive(Debug, Deserialize)]
pub struct TafseerDocument {
    #[serde(default)]
    pub surahs: Vec<TafseerSurah>,
}

#[derive(Debug, Deserialize)]
pub struct TafseerSurah {
    pub surah_id: u32,
    #[serde(default)]
    pub surah_name: serde_json::Value,
    #[serde(default)]
    pub ayahs: Vec<serde_json::Value>,
}

impl TafseerDocument {
    pub fn surah(&self, number: u32) -> Option<&TafseerSurah> {
        self.surahs.iter().find(|s| s.surah_id == number)
    }
}

impl TafseerSurah {
    pub fn ayah(&self, number: u32) -> Option<&serde_json::Value> {
        self.ayahs
            .iter()
            .find(|a| a.get("ayah").and_then(|v| v.as_u64()) == Some(u64::from(number)))
    }
}
