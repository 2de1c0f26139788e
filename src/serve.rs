//! Range-aware object serving.
//!
//! [`serve_object`] turns a storage key plus the client's `Range` header into
//! a full (200) or partial (206) streamed response:
//!
//! - no `Range`: a single whole-object fetch;
//! - with `Range`: parse, one metadata lookup for the size, clamp and
//!   validate, then one fetch of exactly the requested bytes.
//!
//! Bodies are never buffered here; the store's stream is handed to axum.

use crate::storage::{ByteRange, ObjectStore};
use crate::{Error, Result};
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::Response;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Mp3,
    Svg,
    Zip,
}

impl MediaKind {
    pub fn content_type(&self) -> &'static str {
        match self {
            MediaKind::Mp3 => "audio/mpeg",
            MediaKind::Svg => "image/svg+xml",
            MediaKind::Zip => "application/zip",
        }
    }

    fn resource(&self) -> &'static str {
        match self {
            MediaKind::Mp3 => "Audio file",
            MediaKind::Svg => "Page",
            MediaKind::Zip => "Download bundle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Objects that never change once uploaded.
    Immutable,
    /// Bundles that are occasionally rebuilt.
    Daily,
}

impl CachePolicy {
    pub fn header_value(&self) -> &'static str {
        match self {
            CachePolicy::Immutable => "public, max-age=31536000, immutable",
            CachePolicy::Daily => "public, max-age=86400",
        }
    }
}

/// How a successful response should be labelled.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub media: MediaKind,
    pub cache: CachePolicy,
    pub attachment: Option<String>,
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

impl ServeOptions {
    pub fn new(media: MediaKind) -> Self {
        Self {
            media,
            cache: CachePolicy::Immutable,
            attachment: None,
            extra_headers: Vec::new(),
        }
    }

    pub fn cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// Serve as a download with the given file name.
    pub fn attachment(mut self, filename: impl Into<String>) -> Self {
        self.attachment = Some(filename.into());
        self
    }

    /// Attach a response header; values that are not valid header text are
    /// skipped.
    pub fn header(mut self, name: &'static str, value: impl ToString) -> Self {
        if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
            self.extra_headers
                .push((HeaderName::from_static(name), value));
        }
        self
    }
}

/// A parsed `Range: bytes=<start>-<end?>` header, not yet checked against
/// the object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: u64,
    pub end: Option<u64>,
}

impl FromStr for RangeSpec {
    type Err = Error;

    /// Accepts a single `bytes=<digits>-<digits?>` range. Suffix ranges
    /// (`bytes=-500`) and multi-range lists are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedRange(s.to_string());

        let spec = s.trim().strip_prefix("bytes=").ok_or_else(malformed)?;
        let (start, end) = spec.split_once('-').ok_or_else(malformed)?;

        let start = parse_digits(start).ok_or_else(malformed)?;
        let end = if end.is_empty() {
            None
        } else {
            Some(parse_digits(end).ok_or_else(malformed)?)
        };

        Ok(Self { start, end })
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl RangeSpec {
    /// Resolve against an object of `size` bytes: open and oversized ends
    /// clamp to the last byte; a start past the end is unsatisfiable.
    pub fn resolve(&self, size: u64) -> Result<ByteRange> {
        if self.start >= size {
            return Err(Error::UnsatisfiableRange { size });
        }

        let last = size - 1;
        let end = self.end.map_or(last, |end| end.min(last));
        if self.start > end {
            return Err(Error::UnsatisfiableRange { size });
        }

        Ok(ByteRange::new(self.start, end))
    }
}

/// Serve `key` from `store`, honouring an optional `Range` header.
pub async fn serve_object(
    store: &dyn ObjectStore,
    key: &str,
    range_header: Option<&HeaderValue>,
    options: &ServeOptions,
) -> Result<Response> {
    let not_found = || Error::NotFound(format!("{} ({})", options.media.resource(), key));

    let Some(range_header) = range_header else {
        tracing::debug!(key, "serving full object");
        let body = store.get(key, None).await?.ok_or_else(not_found)?;
        return build_response(
            StatusCode::OK,
            body.content_length,
            None,
            Body::from_stream(body.stream),
            options,
        );
    };

    let raw = range_header
        .to_str()
        .map_err(|_| Error::MalformedRange("non-ASCII header value".to_string()))?;
    let spec: RangeSpec = raw.parse()?;

    let meta = store.head(key).await?.ok_or_else(not_found)?;
    let range = spec.resolve(meta.size)?;
    tracing::debug!(key, start = range.start, end = range.end, size = meta.size, "serving range");

    let body = store.get(key, Some(range)).await?.ok_or_else(not_found)?;
    let content_range = format!("bytes {}-{}/{}", range.start, range.end, meta.size);

    build_response(
        StatusCode::PARTIAL_CONTENT,
        range.len(),
        Some(content_range),
        Body::from_stream(body.stream),
        options,
    )
}

fn build_response(
    status: StatusCode,
    content_length: u64,
    content_range: Option<String>,
    body: Body,
    options: &ServeOptions,
) -> Result<Response> {
    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, options.media.content_type())
        .header(header::CONTENT_LENGTH, content_length)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, options.cache.header_value());

    if let Some(content_range) = content_range {
        builder = builder.header(header::CONTENT_RANGE, content_range);
    }
    if let Some(filename) = &options.attachment {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        );
    }
    for (name, value) in &options.extra_headers {
        builder = builder.header(name, value);
    }

    builder
        .body(body)
        .map_err(|e| Error::Internal(format!("failed to build response: {}", e)))
}
