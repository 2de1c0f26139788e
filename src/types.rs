use crate::catalog::{Athan, Language, Muezzin, Reciter, Tafseer, TafseerKind};
use crate::quran::SurahRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReciterList {
    pub count: usize,
    pub reciters: &'static [Reciter],
}

#[derive(Debug, Serialize)]
pub struct ReciterResponse {
    pub reciter: &'static Reciter,
}

#[derive(Debug, Serialize)]
pub struct SurahList<'a> {
    pub count: usize,
    pub surahs: &'a [SurahRange],
}

#[derive(Debug, Serialize)]
pub struct SurahResponse<'a> {
    pub surah: &'a SurahRange,
}

/// Query string of `/api/v1/search`. Both fields are optional here so that
/// a missing one produces a JSON error rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Surah,
    Reciter,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResults<'a> {
    Surahs(Vec<&'a SurahRange>),
    Reciters(Vec<&'static Reciter>),
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Surahs(s) => s.len(),
            SearchResults::Reciters(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub count: usize,
    pub results: SearchResults<'a>,
}

#[derive(Debug, Deserialize)]
pub struct AthanQuery {
    pub muezzin: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthanEntry {
    #[serde(flatten)]
    pub athan: &'static Athan,
    pub audio_url: String,
}

impl From<&'static Athan> for AthanEntry {
    fn from(athan: &'static Athan) -> Self {
        Self {
            athan,
            audio_url: format!("/api/v1/athan/{}", athan.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AthanList {
    pub count: usize,
    pub athans: Vec<AthanEntry>,
}

#[derive(Debug, Serialize)]
pub struct MuezzinList {
    pub count: usize,
    pub muezzins: Vec<Muezzin>,
}

/// The identifying subset of a [`Tafseer`] echoed alongside its content.
#[derive(Debug, Serialize)]
pub struct TafseerRef {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_ar: Option<&'static str>,
    pub language: Language,
}

impl From<&'static Tafseer> for TafseerRef {
    fn from(t: &'static Tafseer) -> Self {
        Self {
            id: t.id,
            name_en: t.name_en,
            name_ar: t.name_ar,
            language: t.language,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TafseerListEntry {
    #[serde(flatten)]
    pub tafseer: TafseerRef,
    #[serde(rename = "type")]
    pub kind: TafseerKind,
}

#[derive(Debug, Serialize)]
pub struct TafseerList {
    pub count: usize,
    pub tafseers: Vec<TafseerListEntry>,
}

#[derive(Debug, Serialize)]
pub struct TafseerDownload {
    #[serde(flatten)]
    pub entry: TafseerListEntry,
    pub download_url: String,
}

#[derive(Debug, Serialize)]
pub struct TafseerDownloadList {
    pub count: usize,
    pub downloads: Vec<TafseerDownload>,
}

#[derive(Debug, Serialize)]
pub struct TafseerEndpoints {
    pub surah: String,
    pub ayah: String,
}

#[derive(Debug, Serialize)]
pub struct TafseerInfo {
    #[serde(flatten)]
    pub tafseer: &'static Tafseer,
    pub endpoints: TafseerEndpoints,
}

#[derive(Debug, Serialize)]
pub struct TafseerSurahBody<'a> {
    pub number: u32,
    pub name: &'a serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayahs: Option<&'a [serde_json::Value]>,
}

#[derive(Debug, Serialize)]
pub struct TafseerSurahResponse<'a> {
    pub tafseer: TafseerRef,
    pub surah: TafseerSurahBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct TafseerAyahResponse<'a> {
    pub tafseer: TafseerRef,
    pub surah: TafseerSurahBody<'a>,
    pub ayah: &'a serde_json::Value,
}
