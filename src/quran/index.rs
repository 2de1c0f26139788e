use super::{AyahRef, GLOBAL_AYAH_COUNT, SURAH_COUNT, SurahInfo};
use crate::{Error, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// A surah together with the inclusive global ayah range it occupies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRange {
    #[serde(flatten)]
    pub info: &'static SurahInfo,
    pub start_ayah: u32,
    pub end_ayah: u32,
}

impl SurahRange {
    fn contains(&self, global: u32) -> bool {
        (self.start_ayah..=self.end_ayah).contains(&global)
    }
}

/// Bidirectional mapping between global ayah numbers and [`AyahRef`]s.
///
/// Built once at startup from the static surah table. Construction fails
/// unless the ranges partition `1..=6236` exactly, so lookups on a built
/// index never miss for in-bounds input.
#[derive(Debug, Clone)]
pub struct AyahIndex {
    ranges: Vec<SurahRange>,
}

impl AyahIndex {
    pub fn new(table: &'static [SurahInfo]) -> Result<Self> {
        if table.len() as u32 != SURAH_COUNT {
            return Err(Error::Internal(format!(
                "surah table has {} entries, expected {}",
                table.len(),
                SURAH_COUNT
            )));
        }

        let mut ranges = Vec::with_capacity(table.len());
        let mut next_start = 1u32;
        for (position, info) in table.iter().enumerate() {
            if info.number as usize != position + 1 {
                return Err(Error::Internal(format!(
                    "surah at position {} is numbered {}",
                    position + 1,
                    info.number
                )));
            }
            if info.ayah_count == 0 {
                return Err(Error::Internal(format!(
                    "surah {} has no ayat",
                    info.number
                )));
            }

            let end = next_start + info.ayah_count - 1;
            ranges.push(SurahRange {
                info,
                start_ayah: next_start,
                end_ayah: end,
            });
            next_start = end + 1;
        }

        let last = next_start - 1;
        if last != GLOBAL_AYAH_COUNT {
            return Err(Error::Internal(format!(
                "surah table covers {} ayat, expected {}",
                last, GLOBAL_AYAH_COUNT
            )));
        }

        Ok(Self { ranges })
    }

    pub fn surahs(&self) -> &[SurahRange] {
        &self.ranges
    }

    pub fn surah(&self, number: u32) -> Option<&SurahRange> {
        let position = number.checked_sub(1)? as usize;
        self.ranges.get(position)
    }

    /// Global ayah number for `ayah` within `surah`.
    pub fn to_global(&self, surah: u32, ayah: u32) -> Result<u32> {
        let range = self.surah(surah).ok_or(Error::InvalidSurah(surah))?;
        let max = range.info.ayah_count;

        if ayah < 1 || ayah > max {
            return Err(Error::InvalidAyahInSurah { surah, ayah, max });
        }

        Ok(range.start_ayah + ayah - 1)
    }

    /// Surah and in-surah position of a global ayah number.
    pub fn to_reference(&self, global: u32) -> Result<AyahRef> {
        if !(1..=GLOBAL_AYAH_COUNT).contains(&global) {
            return Err(Error::InvalidGlobalAyah(global));
        }

        let position = self
            .ranges
            .binary_search_by(|range| {
                if range.contains(global) {
                    Ordering::Equal
                } else if global < range.start_ayah {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .map_err(|_| Error::LookupFailed(global))?;

        let range = &self.ranges[position];
        Ok(AyahRef {
            surah: range.info.number,
            ayah: global - range.start_ayah + 1,
        })
    }

    /// Case-insensitive substring match on Arabic name, transliteration and
    /// translation.
    pub fn search(&self, query: &str) -> Vec<&SurahRange> {
        let term = query.trim().to_lowercase();
        self.ranges
            .iter()
            .filter(|range| {
                range.info.name.contains(query.trim())
                    || range.info.transliteration.to_lowercase().contains(&term)
                    || range.info.translation.to_lowercase().contains(&term)
            })
            .collect()
    }
}
