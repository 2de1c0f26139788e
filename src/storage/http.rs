//! HTTP/HTTPS storage backend.
//!
//! Proxies objects from a remote origin that lays files out under a base URL
//! by key. Metadata comes from `HEAD`, ranged bodies from `GET` with a
//! `Range` header; bodies are forwarded as they arrive.

use super::{ByteRange, ObjectBody, ObjectMeta, ObjectStore};
use crate::{Error, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::{Client, StatusCode, header};

pub struct HttpStorage {
    client: Client,
    base_url: String,
}

impl HttpStorage {
    /// Create a new HttpStorage instance.
    ///
    /// * `base_url` - Base URL objects live under (e.g., "https://cdn.example.com/quran/")
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key.trim_start_matches('/'))
    }
}

#[async_trait]
impl ObjectStore for HttpStorage {
    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>> {
        let url = self.object_url(key);
        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|e| Error::Storage(format!("HTTP HEAD request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Storage(format!(
                "HTTP HEAD {} returned {}",
                url,
                response.status()
            )));
        }

        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::Storage("missing Content-Length header".to_string()))?;

        Ok(Some(ObjectMeta { size }))
    }

    async fn get(&self, key: &str, range: Option<ByteRange>) -> Result<Option<ObjectBody>> {
        let url = self.object_url(key);
        let mut request = self.client.get(&url);
        if let Some(r) = range {
            request = request.header(header::RANGE, r.to_header());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Storage(format!("HTTP GET request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // An origin that ignores Range would hand back the whole object.
        let expected = if range.is_some() {
            StatusCode::PARTIAL_CONTENT
        } else {
            StatusCode::OK
        };
        if status != expected {
            return Err(Error::Storage(format!(
                "HTTP GET {} returned {}, expected {}",
                url, status, expected
            )));
        }

        let content_length = match (range, response.content_length()) {
            (Some(r), _) => r.len(),
            (None, Some(len)) => len,
            (None, None) => {
                return Err(Error::Storage("missing Content-Length header".to_string()));
            }
        };

        let stream = response.bytes_stream().map_err(std::io::Error::other);

        Ok(Some(ObjectBody {
            content_length,
            stream: Box::pin(stream),
        }))
    }
}
