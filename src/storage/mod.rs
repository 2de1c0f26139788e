//! Object store abstraction for the immutable audio, page and archive blobs.
//!
//! Objects are addressed by slash-separated keys (e.g.
//! `Husary_128kbps/001001.mp3`) and are never modified after upload. Every
//! backend supports a metadata-only lookup and a body fetch that is either
//! the whole object or an inclusive byte range, delivered as a stream.
//!
//! # Implementations
//!
//! - [`LocalStorage`] - Local filesystem storage
//! - `S3Storage` - S3 and S3-compatible buckets (feature `s3`)
//! - `HttpStorage` - Remote HTTP origin (feature `http`)
//!
//! # Example
//!
//! ```no_run
//! use quranapi::storage::{ByteRange, LocalStorage, ObjectStore};
//! use std::path::PathBuf;
//!
//! # async fn demo() -> quranapi::Result<()> {
//! let storage = LocalStorage::new(PathBuf::from("./data"));
//! if let Some(meta) = storage.head("Husary_128kbps/001001.mp3").await? {
//!     let range = ByteRange::new(0, meta.size.min(1024) - 1);
//!     let _body = storage.get("Husary_128kbps/001001.mp3", Some(range)).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod local;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "s3")]
mod s3;

pub use local::LocalStorage;

#[cfg(feature = "http")]
pub use http::HttpStorage;
#[cfg(feature = "s3")]
pub use s3::S3Storage;

use crate::Result;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::{Stream, TryStreamExt};
use std::pin::Pin;

/// Inclusive byte range `[start, end]` within an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value for an outgoing `Range` request header.
    pub fn to_header(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// Metadata about a stored object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectMeta {
    pub size: u64,
}

pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// A fetched body. `content_length` is the length of `stream`, which for a
/// ranged fetch is the range length rather than the object size.
pub struct ObjectBody {
    pub content_length: u64,
    pub stream: ByteStream,
}

impl std::fmt::Debug for ObjectBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectBody")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Storage backend trait for immutable blobs.
///
/// Missing objects are `Ok(None)`; `Err` is reserved for backend failures.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Metadata-only lookup; never transfers the body.
    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>>;

    /// Fetch the whole object, or exactly `range` when given.
    async fn get(&self, key: &str, range: Option<ByteRange>) -> Result<Option<ObjectBody>>;
}

/// Buffer a whole object. Only for small documents that must be parsed
/// (tafseer JSON); media is always streamed.
pub async fn read_to_bytes(store: &dyn ObjectStore, key: &str) -> Result<Option<Bytes>> {
    let Some(body) = store.get(key, None).await? else {
        return Ok(None);
    };

    let capacity = usize::try_from(body.content_length).unwrap_or(0);
    let buf = body
        .stream
        .try_fold(BytesMut::with_capacity(capacity), |mut buf, chunk| async move {
            buf.extend_from_slice(&chunk);
            Ok(buf)
        })
        .await?;

    Ok(Some(buf.freeze()))
}
