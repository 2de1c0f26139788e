use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::quran::{GLOBAL_AYAH_COUNT, SURAH_COUNT};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid surah number: {}. Must be between 1 and {}.", .0, SURAH_COUNT)]
    InvalidSurah(u32),

    #[error("Invalid ayah number: {ayah} for surah {surah}. Must be between 1 and {max}.")]
    InvalidAyahInSurah { surah: u32, ayah: u32, max: u32 },

    #[error("Invalid global ayah number: {}. Must be between 1 and {}.", .0, GLOBAL_AYAH_COUNT)]
    InvalidGlobalAyah(u32),

    #[error("Invalid page number: {page}. Must be between 1 and {max}")]
    InvalidPage { page: u32, max: u32 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("Invalid Range header: {0}")]
    MalformedRange(String),

    #[error("Range Not Satisfiable")]
    UnsatisfiableRange { size: u64 },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Not Found")]
    RouteNotFound,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited { limit: u32, retry_after: u64 },

    #[error("Could not find ayah reference for global ayah {0}")]
    LookupFailed(u32),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

impl Error {
    fn code(&self) -> &'static str {
        match self {
            Error::InvalidSurah(_) => "INVALID_SURAH_NUMBER",
            Error::InvalidAyahInSurah { .. } | Error::InvalidGlobalAyah(_) => {
                "INVALID_AYAH_NUMBER"
            }
            Error::InvalidPage { .. } => "INVALID_PAGE_NUMBER",
            Error::InvalidInput(_) => "BAD_REQUEST",
            Error::Unsupported(_) => "NOT_SUPPORTED",
            Error::MalformedRange(_) | Error::UnsatisfiableRange { .. } => "RANGE_NOT_SATISFIABLE",
            Error::NotFound(_) | Error::RouteNotFound => "NOT_FOUND",
            Error::RateLimited { .. } => "RATE_LIMIT_EXCEEDED",
            Error::LookupFailed(_) | Error::Storage(_) | Error::Io(_) | Error::Internal(_) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidSurah(_)
            | Error::InvalidAyahInSurah { .. }
            | Error::InvalidGlobalAyah(_)
            | Error::InvalidPage { .. }
            | Error::InvalidInput(_)
            | Error::Unsupported(_) => StatusCode::BAD_REQUEST,
            Error::MalformedRange(_) | Error::UnsatisfiableRange { .. } => {
                StatusCode::RANGE_NOT_SATISFIABLE
            }
            Error::NotFound(_) | Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Error::LookupFailed(_) | Error::Storage(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
                code: self.code(),
            },
        };
        let mut response = (status, axum::Json(body)).into_response();

        let headers = response.headers_mut();
        match self {
            Error::UnsatisfiableRange { size } => {
                if let Ok(value) = HeaderValue::from_str(&format!("bytes */{}", size)) {
                    headers.insert(header::CONTENT_RANGE, value);
                }
            }
            Error::RateLimited { limit, retry_after } => {
                headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
                headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
                headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
            }
            _ => {}
        }

        response
    }
}
