mod athan;
mod audio;
mod quran_text;
mod reciters;
mod search;
mod service_info;
mod surahs;
mod tafseer;

pub use athan::{athan_audio, athan_bundle, athan_list, athan_manifest, athan_muezzins};
pub use audio::{ayah_audio, ayah_audio_by_surah, surah_audio};
pub use quran_text::{quran_text_bundle, quran_text_manifest, quran_text_page};
pub use reciters::{get_reciter, list_reciters};
pub use search::search;
pub use service_info::{api_info, credits, health};
pub use surahs::{get_surah, list_surahs};
pub use tafseer::{
    tafseer_ayah, tafseer_download, tafseer_downloads, tafseer_info, tafseer_list,
    tafseer_manifest, tafseer_surah,
};

use crate::quran::AyahIndex;
use crate::rate_limit::{RateLimiter, rate_limit_middleware};
use crate::serve::CachePolicy;
use crate::storage::ObjectStore;
use crate::{Error, Result};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Service version reported by the info endpoints.
pub const API_VERSION: &str = "1.0.0";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub index: Arc<AyahIndex>,
    pub limiter: Option<Arc<RateLimiter>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, index: AyahIndex) -> Self {
        Self {
            store,
            index: Arc::new(index),
            limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Some(Arc::new(limiter));
        self
    }
}

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let limiter = state.limiter.clone();

    let router = Router::new()
        .route("/", get(api_info))
        .route("/api/health", get(health))
        // Catalog
        .route("/api/v1/reciters", get(list_reciters))
        .route("/api/v1/reciters/:reciter_id", get(get_reciter))
        .route("/api/v1/surahs", get(list_surahs))
        .route("/api/v1/surahs/:surah_number", get(get_surah))
        .route("/api/v1/search", get(search))
        .route("/api/v1/credits", get(credits))
        // Ayah audio
        .route("/api/v1/audio/:reciter_id/:ayah_number", get(ayah_audio))
        .route(
            "/api/v1/audio/:reciter_id/surah/:surah_number",
            get(surah_audio),
        )
        .route(
            "/api/v1/audio/:reciter_id/surah/:surah_number/ayah/:ayah_in_surah",
            get(ayah_audio_by_surah),
        )
        // Mushaf pages
        .route("/api/v1/quran-text/manifest", get(quran_text_manifest))
        .route("/api/v1/quran-text/page/:page_number", get(quran_text_page))
        .route("/api/v1/quran-text/download", get(quran_text_bundle))
        // Athan
        .route("/api/v1/athan/manifest", get(athan_manifest))
        .route("/api/v1/athan/muezzins", get(athan_muezzins))
        .route("/api/v1/athan/list", get(athan_list))
        .route("/api/v1/athan/download", get(athan_bundle))
        .route("/api/v1/athan/:athan_id", get(athan_audio))
        // Tafseer
        .route("/api/v1/tafseer/manifest", get(tafseer_manifest))
        .route("/api/v1/tafseer/list", get(tafseer_list))
        .route("/api/v1/tafseer/downloads", get(tafseer_downloads))
        .route("/api/v1/tafseer/download/:tafseer_id", get(tafseer_download))
        .route("/api/v1/tafseer/:tafseer_id", get(tafseer_info))
        .route(
            "/api/v1/tafseer/:tafseer_id/surah/:surah_number",
            get(tafseer_surah),
        )
        .route(
            "/api/v1/tafseer/:tafseer_id/surah/:surah_number/ayah/:ayah_number",
            get(tafseer_ayah),
        )
        .fallback(not_found)
        .with_state(state);

    let router = match limiter {
        Some(limiter) => {
            router.layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

/// CORS for browser clients: any origin, read-only methods, and the range
/// headers a media player needs to see.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::RANGE])
        .expose_headers([
            header::CONTENT_RANGE,
            header::CONTENT_LENGTH,
            header::ACCEPT_RANGES,
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderName::from_static("x-ratelimit-reset"),
        ])
        .max_age(Duration::from_secs(86400))
}

async fn not_found() -> Error {
    Error::RouteNotFound
}

/// Parse a numeric path segment, naming the parameter on failure.
fn parse_number(value: &str, name: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Invalid {}: must be a number", name)))
}

fn cached(policy: CachePolicy, body: impl IntoResponse) -> Response {
    ([(header::CACHE_CONTROL, policy.header_value())], body).into_response()
}
