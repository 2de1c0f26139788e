use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Response,
};
use crate::{
    Error, Result,
    catalog::{Reciter, find_reciter},
    quran::AyahRef,
    serve::{MediaKind, ServeOptions, serve_object},
};
use super::{AppState, parse_number};

fn lookup_reciter(id: &str) -> Result<&'static Reciter> {
    find_reciter(id).ok_or_else(|| Error::NotFound("Reciter".to_string()))
}

/// `/api/v1/audio/:reciter_id/:ayah_number`, addressed by global ayah number.
pub async fn ayah_audio(
    State(state): State<AppState>,
    Path((reciter_id, ayah_number)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let reciter = lookup_reciter(&reciter_id)?;
    let global = parse_number(&ayah_number, "ayahNumber")?;
    let ayah = state.index.to_reference(global)?;

    serve_ayah(&state, reciter, ayah, &headers).await
}

/// `/api/v1/audio/:reciter_id/surah/:surah_number/ayah/:ayah_in_surah`
pub async fn ayah_audio_by_surah(
    State(state): State<AppState>,
    Path((reciter_id, surah_number, ayah_in_surah)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Response> {
    let reciter = lookup_reciter(&reciter_id)?;
    let surah = parse_number(&surah_number, "surahNumber")?;
    let ayah = parse_number(&ayah_in_surah, "ayahInSurah")?;

    // validates both numbers against the surah table
    state.index.to_global(surah, ayah)?;

    serve_ayah(&state, reciter, AyahRef { surah, ayah }, &headers).await
}

/// Whole-surah playback would mean stitching many objects into one stream,
/// which this service does not do.
pub async fn surah_audio(Path((reciter_id, _surah)): Path<(String, String)>) -> Result<Response> {
    lookup_reciter(&reciter_id)?;
    Err(Error::Unsupported(
        "Streaming full surahs is not yet supported. Please specify an ayah number.".to_string(),
    ))
}

async fn serve_ayah(
    state: &AppState,
    reciter: &Reciter,
    ayah: AyahRef,
    headers: &HeaderMap,
) -> Result<Response> {
    let key = reciter.audio_key(ayah);
    tracing::debug!(reciter = reciter.id, %ayah, key = %key, "ayah audio");

    serve_object(
        state.store.as_ref(),
        &key,
        headers.get(header::RANGE),
        &ServeOptions::new(MediaKind::Mp3),
    )
    .await
}
