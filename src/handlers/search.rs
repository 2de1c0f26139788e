use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use crate::{
    Error, Result,
    catalog::search_reciters,
    types::{SearchKind, SearchQuery, SearchResponse, SearchResults},
};
use super::AppState;

/// `/api/v1/search?q=<query>&type=<surah|reciter>`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Response> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            Error::InvalidInput("Missing required parameter: q (search query)".to_string())
        })?;
    let kind = params.kind.filter(|k| !k.is_empty()).ok_or_else(|| {
        Error::InvalidInput("Missing required parameter: type (surah or reciter)".to_string())
    })?;

    let (kind, results) = match kind.to_lowercase().as_str() {
        "surah" => (
            SearchKind::Surah,
            SearchResults::Surahs(state.index.search(&query)),
        ),
        "reciter" => (
            SearchKind::Reciter,
            SearchResults::Reciters(search_reciters(&query)),
        ),
        _ => {
            return Err(Error::InvalidInput(
                "Invalid type parameter. Must be \"surah\" or \"reciter\"".to_string(),
            ));
        }
    };

    Ok(Json(SearchResponse {
        count: results.len(),
        query,
        kind,
        results,
    })
    .into_response())
}
