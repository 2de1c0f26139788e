use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
    response::Response,
};
use serde_json::json;
use crate::{
    Error, Result,
    catalog::{ATHAN_BUNDLE_KEY, ATHANS, filter_athans, find_athan, muezzins},
    serve::{CachePolicy, MediaKind, ServeOptions, serve_object},
    types::{AthanEntry, AthanList, AthanQuery, MuezzinList},
};
use super::{API_VERSION, AppState, cached};

pub async fn athan_manifest() -> Response {
    cached(
        CachePolicy::Daily,
        Json(json!({
            "name": "Athan Audio Collection",
            "version": API_VERSION,
            "totalAthans": ATHANS.len(),
            "source": {
                "name": "Assabile",
                "url": "https://www.assabile.com",
                "attribution": "Audio files sourced from Assabile.com",
            },
            "endpoints": {
                "list": "/api/v1/athan/list",
                "audio": "/api/v1/athan/:id",
                "download": "/api/v1/athan/download",
            },
        })),
    )
}

pub async fn athan_muezzins() -> Response {
    let muezzins = muezzins();
    cached(
        CachePolicy::Immutable,
        Json(MuezzinList {
            count: muezzins.len(),
            muezzins,
        }),
    )
}

pub async fn athan_list(Query(query): Query<AthanQuery>) -> Response {
    let athans: Vec<AthanEntry> =
        filter_athans(query.muezzin.as_deref(), query.location.as_deref())
            .into_iter()
            .map(AthanEntry::from)
            .collect();

    cached(
        CachePolicy::Immutable,
        Json(AthanList {
            count: athans.len(),
            athans,
        }),
    )
}

pub async fn athan_audio(
    State(state): State<AppState>,
    Path(athan_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let athan = find_athan(&athan_id).ok_or_else(|| Error::NotFound("Athan".to_string()))?;

    let options = ServeOptions::new(MediaKind::Mp3)
        .header("x-athan-id", athan.id)
        .header("x-muezzin", athan.muezzin)
        .header("x-location", athan.location);

    serve_object(
        state.store.as_ref(),
        &athan.audio_key(),
        headers.get(header::RANGE),
        &options,
    )
    .await
}

pub async fn athan_bundle(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let options = ServeOptions::new(MediaKind::Zip)
        .cache(CachePolicy::Daily)
        .attachment("athan-collection.zip");

    serve_object(
        state.store.as_ref(),
        ATHAN_BUNDLE_KEY,
        headers.get(header::RANGE),
        &options,
    )
    .await
}
