use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use crate::{
    Error, Result,
    types::{SurahList, SurahResponse},
};
use super::{AppState, parse_number};

pub async fn list_surahs(State(state): State<AppState>) -> Response {
    let surahs = state.index.surahs();
    Json(SurahList {
        count: surahs.len(),
        surahs,
    })
    .into_response()
}

pub async fn get_surah(
    State(state): State<AppState>,
    Path(surah_number): Path<String>,
) -> Result<Response> {
    let number = parse_number(&surah_number, "surahNumber")?;
    let surah = state
        .index
        .surah(number)
        .ok_or_else(|| Error::NotFound("Surah".to_string()))?;

    Ok(Json(SurahResponse { surah }).into_response())
}
