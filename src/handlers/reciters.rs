use axum::{Json, extract::Path, response::Response};
use crate::{
    Error, Result,
    catalog::{RECITERS, find_reciter},
    serve::CachePolicy,
    types::{ReciterList, ReciterResponse},
};
use super::cached;

pub async fn list_reciters() -> Response {
    cached(
        CachePolicy::Immutable,
        Json(ReciterList {
            count: RECITERS.len(),
            reciters: &RECITERS,
        }),
    )
}

pub async fn get_reciter(Path(reciter_id): Path<String>) -> Result<Response> {
    let reciter = find_reciter(&reciter_id).ok_or_else(|| Error::NotFound("Reciter".to_string()))?;
    Ok(cached(CachePolicy::Immutable, Json(ReciterResponse { reciter })))
}
