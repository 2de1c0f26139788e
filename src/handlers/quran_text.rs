use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Response,
};
use serde_json::json;
use crate::{
    Error, Result,
    quran::TOTAL_PAGES,
    serve::{CachePolicy, MediaKind, ServeOptions, serve_object},
};
use super::{API_VERSION, AppState, cached, parse_number};

const PAGES_PREFIX: &str = "quran-text/pages";
const BUNDLE_KEY: &str = "quran-text/quran-pages.zip";

pub async fn quran_text_manifest() -> Response {
    cached(
        CachePolicy::Daily,
        Json(json!({
            "name": "Quran Text SVG",
            "version": API_VERSION,
            "totalPages": TOTAL_PAGES,
            "format": "svg",
            "source": {
                "name": "quran-svg",
                "url": "https://github.com/batoulapps/quran-svg",
                "license": "MIT",
                "originalSource": "King Fahd Quran Printing Complex",
            },
            "endpoints": {
                "page": "/api/v1/quran-text/page/:pageNumber",
                "download": "/api/v1/quran-text/download",
            },
            "pageRange": { "first": 1, "last": TOTAL_PAGES },
        })),
    )
}

pub async fn quran_text_page(
    State(state): State<AppState>,
    Path(page_number): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let page = parse_number(&page_number, "pageNumber")?;
    if !(1..=TOTAL_PAGES).contains(&page) {
        return Err(Error::InvalidPage {
            page,
            max: TOTAL_PAGES,
        });
    }

    let options = ServeOptions::new(MediaKind::Svg)
        .header("x-page-number", page)
        .header("x-total-pages", TOTAL_PAGES);

    serve_object(
        state.store.as_ref(),
        &format!("{}/{}.svg", PAGES_PREFIX, page),
        headers.get(header::RANGE),
        &options,
    )
    .await
}

pub async fn quran_text_bundle(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let options = ServeOptions::new(MediaKind::Zip)
        .cache(CachePolicy::Daily)
        .attachment("quran-pages.zip");

    serve_object(
        state.store.as_ref(),
        BUNDLE_KEY,
        headers.get(header::RANGE),
        &options,
    )
    .await
}
