//! S3 storage backend.
//!
//! Serves objects straight out of an S3 bucket (or an S3-compatible service
//! such as R2 or MinIO). Range requests are forwarded to S3 so only the
//! requested bytes leave the bucket.

use super::{ByteRange, ObjectBody, ObjectMeta, ObjectStore};
use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use tokio_util::io::ReaderStream;

pub struct S3Storage {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3Storage {
    /// Create a new S3Storage instance.
    ///
    /// # Arguments
    ///
    /// * `bucket` - S3 bucket name
    /// * `prefix` - Key prefix prepended to every object key (may be empty)
    /// * `region` - Optional AWS region (uses SDK defaults if not specified)
    /// * `endpoint` - Optional custom endpoint URL (for S3-compatible services)
    pub async fn new(
        bucket: String,
        prefix: String,
        region: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        let mut config_loader = aws_config::from_env();

        if let Some(region) = region {
            config_loader = config_loader.region(aws_config::Region::new(region));
        }

        let sdk_config = config_loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = endpoint {
            s3_config = s3_config.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(s3_config.build()),
            bucket,
            prefix,
        }
    }

    fn s3_key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}/{}", self.prefix.trim_end_matches('/'), key)
        }
    }
}

#[async_trait]
impl ObjectStore for S3Storage {
    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>> {
        let s3_key = self.s3_key(key);

        let head = match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(&s3_key)
            .send()
            .await
        {
            Ok(head) => head,
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => {
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Storage(format!("S3 head_object failed: {}", e)));
            }
        };

        let size = head.content_length().unwrap_or(0).max(0) as u64;
        Ok(Some(ObjectMeta { size }))
    }

    async fn get(&self, key: &str, range: Option<ByteRange>) -> Result<Option<ObjectBody>> {
        let s3_key = self.s3_key(key);

        let mut request = self.client.get_object().bucket(&self.bucket).key(&s3_key);
        if let Some(r) = range {
            request = request.range(r.to_header());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => {
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Storage(format!("S3 get_object failed: {}", e)));
            }
        };

        let content_length = response.content_length().unwrap_or(0).max(0) as u64;
        let reader = response.body.into_async_read();

        Ok(Some(ObjectBody {
            content_length,
            stream: Box::pin(ReaderStream::new(reader)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(prefix: &str) -> S3Storage {
        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        S3Storage {
            client: Client::from_conf(config),
            bucket: "quran".to_string(),
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn test_s3_key_no_prefix() {
        assert_eq!(storage("").s3_key("athan/x.mp3"), "athan/x.mp3");
    }

    #[test]
    fn test_s3_key_with_prefix() {
        assert_eq!(
            storage("audio/").s3_key("Husary_128kbps/001001.mp3"),
            "audio/Husary_128kbps/001001.mp3"
        );
    }
}
