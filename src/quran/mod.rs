//! Quran structure: surah metadata and the global ayah index.
//!
//! Every ayah has two addresses: a flat global number in `1..=6236` (canonical
//! recitation order) and an [`AyahRef`] pair of surah number and ayah within
//! that surah. [`AyahIndex`] converts between them.
//!
//! # Example
//!
//! ```
//! use quranapi::quran::{AyahIndex, AyahRef, SURAHS};
//!
//! let index = AyahIndex::new(&SURAHS).unwrap();
//! assert_eq!(index.to_global(2, 1).unwrap(), 8);
//! assert_eq!(index.to_reference(8).unwrap(), AyahRef { surah: 2, ayah: 1 });
//! ```

mod index;
mod surahs;

pub use index::{AyahIndex, SurahRange};
pub use surahs::SURAHS;

use serde::Serialize;

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u32 = 114;

/// Number of ayat across all surahs.
pub const GLOBAL_AYAH_COUNT: u32 = 6236;

/// Pages in the Madani mushaf.
pub const TOTAL_PAGES: u32 = 604;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

/// Static metadata for one surah.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahInfo {
    pub number: u32,
    pub name: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub ayah_count: u32,
    #[serde(rename = "revelationType")]
    pub revelation: Revelation,
}

/// An ayah addressed by surah number and position within the surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AyahRef {
    pub surah: u32,
    pub ayah: u32,
}

impl AyahRef {
    /// File name used for per-ayah audio, e.g. `002255.mp3`.
    pub fn audio_file_name(&self) -> String {
        format!("{:03}{:03}.mp3", self.surah, self.ayah)
    }
}

impl std::fmt::Display for AyahRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_file_name_is_zero_padded() {
        assert_eq!(AyahRef { surah: 1, ayah: 1 }.audio_file_name(), "001001.mp3");
        assert_eq!(AyahRef { surah: 2, ayah: 255 }.audio_file_name(), "002255.mp3");
        assert_eq!(AyahRef { surah: 114, ayah: 6 }.audio_file_name(), "114006.mp3");
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(SURAHS.len() as u32, SURAH_COUNT);
        let total: u32 = SURAHS.iter().map(|s| s.ayah_count).sum();
        assert_eq!(total, GLOBAL_AYAH_COUNT);
        for (i, surah) in SURAHS.iter().enumerate() {
            assert_eq!(surah.number as usize, i + 1);
        }
    }

    #[test]
    fn test_surah_serializes_camel_case() {
        let value = serde_json::to_value(&SURAHS[0]).unwrap();
        assert_eq!(value["ayahCount"], 7);
        assert_eq!(value["revelationType"], "Meccan");
        assert_eq!(value["transliteration"], "Al-Faatiha");
    }
}
