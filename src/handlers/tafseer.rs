//! Tafseer endpoints.
//!
//! Metadata comes from the static catalog. Surah and ayah lookups load the
//! tafseer's JSON document from the store and slice it; archives are served
//! as ranged downloads.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Response,
};
use serde_json::json;
use crate::{
    Error, Result,
    catalog::{Language, TAFSEERS, Tafseer, TafseerDocument, TafseerKind, find_tafseer},
    serve::{CachePolicy, MediaKind, ServeOptions, serve_object},
    storage::read_to_bytes,
    types::{
        TafseerAyahResponse, TafseerDownload, TafseerDownloadList, TafseerEndpoints, TafseerInfo,
        TafseerList, TafseerListEntry, TafseerSurahBody, TafseerSurahResponse,
    },
};
use super::{API_VERSION, AppState, cached, parse_number};

fn lookup_tafseer(id: &str) -> Result<&'static Tafseer> {
    find_tafseer(id).ok_or_else(|| Error::NotFound(format!("Tafseer '{}'", id)))
}

fn list_entry(t: &'static Tafseer) -> TafseerListEntry {
    TafseerListEntry {
        tafseer: t.into(),
        kind: t.kind,
    }
}

async fn load_document(state: &AppState, tafseer: &Tafseer) -> Result<TafseerDocument> {
    let bytes = read_to_bytes(state.store.as_ref(), &tafseer.data_key())
        .await?
        .ok_or_else(|| Error::NotFound("Tafseer data".to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        Error::Internal(format!("failed to parse tafseer data for {}: {}", tafseer.id, e))
    })
}

pub async fn tafseer_manifest() -> Response {
    let count_kind = |kind: TafseerKind| TAFSEERS.iter().filter(|t| t.kind == kind).count();
    let count_language =
        |language: Language| TAFSEERS.iter().filter(|t| t.language == language).count();

    let tafseers: Vec<_> = TAFSEERS
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "name_en": t.name_en,
                "name_ar": t.name_ar,
                "language": t.language,
                "type": t.kind,
                "author": t.author,
                "description": t.description,
            })
        })
        .collect();

    cached(
        CachePolicy::Daily,
        Json(json!({
            "name": "Quran Tafseer API",
            "version": API_VERSION,
            "total": TAFSEERS.len(),
            "types": {
                "tafseer": count_kind(TafseerKind::Tafseer),
                "word-meanings": count_kind(TafseerKind::WordMeanings),
            },
            "languages": {
                "arabic": count_language(Language::Arabic),
                "english": count_language(Language::English),
            },
            "tafseers": tafseers,
            "endpoints": {
                "manifest": "/api/v1/tafseer/manifest",
                "list": "/api/v1/tafseer/list",
                "tafseer": "/api/v1/tafseer/:tafseerId",
                "surah": "/api/v1/tafseer/:tafseerId/surah/:surahNumber",
                "ayah": "/api/v1/tafseer/:tafseerId/surah/:surahNumber/ayah/:ayahNumber",
                "downloads": "/api/v1/tafseer/downloads",
                "download": "/api/v1/tafseer/download/:tafseerId",
            },
        })),
    )
}

pub async fn tafseer_list() -> Response {
    let tafseers: Vec<_> = TAFSEERS.iter().map(list_entry).collect();
    cached(
        CachePolicy::Daily,
        Json(TafseerList {
            count: tafseers.len(),
            tafseers,
        }),
    )
}

pub async fn tafseer_downloads() -> Response {
    let downloads: Vec<_> = TAFSEERS
        .iter()
        .filter(|t| t.zip_filename.is_some())
        .map(|t| TafseerDownload {
            entry: list_entry(t),
            download_url: format!("/api/v1/tafseer/download/{}", t.id),
        })
        .collect();

    cached(
        CachePolicy::Daily,
        Json(TafseerDownloadList {
            count: downloads.len(),
            downloads,
        }),
    )
}

pub async fn tafseer_download(
    State(state): State<AppState>,
    Path(tafseer_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let tafseer = lookup_tafseer(&tafseer_id)?;
    let (Some(key), Some(filename)) = (tafseer.archive_key(), tafseer.zip_filename) else {
        return Err(Error::NotFound(format!("ZIP download for '{}'", tafseer.id)));
    };

    let options = ServeOptions::new(MediaKind::Zip)
        .cache(CachePolicy::Daily)
        .attachment(filename);

    serve_object(
        state.store.as_ref(),
        &key,
        headers.get(header::RANGE),
        &options,
    )
    .await
}

pub async fn tafseer_info(Path(tafseer_id): Path<String>) -> Result<Response> {
    let tafseer = lookup_tafseer(&tafseer_id)?;

    Ok(cached(
        CachePolicy::Daily,
        Json(TafseerInfo {
            tafseer,
            endpoints: TafseerEndpoints {
                surah: format!("/api/v1/tafseer/{}/surah/:surahNumber", tafseer.id),
                ayah: format!(
                    "/api/v1/tafseer/{}/surah/:surahNumber/ayah/:ayahNumber",
                    tafseer.id
                ),
            },
        }),
    ))
}

pub async fn tafseer_surah(
    State(state): State<AppState>,
    Path((tafseer_id, surah_number)): Path<(String, String)>,
) -> Result<Response> {
    let tafseer = lookup_tafseer(&tafseer_id)?;
    let number = parse_number(&surah_number, "surahNumber")?;
    if state.index.surah(number).is_none() {
        return Err(Error::InvalidSurah(number));
    }

    let document = load_document(&state, tafseer).await?;
    let surah = document
        .surah(number)
        .ok_or_else(|| Error::NotFound(format!("Surah {} in this tafseer", number)))?;

    Ok(cached(
        CachePolicy::Daily,
        Json(TafseerSurahResponse {
            tafseer: tafseer.into(),
            surah: TafseerSurahBody {
                number: surah.surah_id,
                name: &surah.surah_name,
                ayahs: Some(surah.ayahs.as_slice()),
            },
        }),
    ))
}

pub async fn tafseer_ayah(
    State(state): State<AppState>,
    Path((tafseer_id, surah_number, ayah_number)): Path<(String, String, String)>,
) -> Result<Response> {
    let tafseer = lookup_tafseer(&tafseer_id)?;
    let surah_number = parse_number(&surah_number, "surahNumber")?;
    let ayah_number = parse_number(&ayah_number, "ayahNumber")?;
    state.index.to_global(surah_number, ayah_number)?;

    let document = load_document(&state, tafseer).await?;
    let surah = document
        .surah(surah_number)
        .ok_or_else(|| Error::NotFound(format!("Surah {} in this tafseer", surah_number)))?;
    let ayah = surah.ayah(ayah_number).ok_or_else(|| {
        Error::NotFound(format!("Ayah {} in surah {}", ayah_number, surah_number))
    })?;

    Ok(cached(
        CachePolicy::Daily,
        Json(TafseerAyahResponse {
            tafseer: tafseer.into(),
            surah: TafseerSurahBody {
                number: surah.surah_id,
                name: &surah.surah_name,
                ayahs: None,
            },
            ayah,
        }),
    ))
}
