use super::{ByteRange, ObjectBody, ObjectMeta, ObjectStore};
use crate::{Error, Result};
use async_trait::async_trait;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

/// Objects stored as files under a data directory, one file per key.
pub struct LocalStorage {
    data_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn make_file_path(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(Error::Storage(format!("invalid object key: {}", key)));
        }
        Ok(self.data_dir.join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalStorage {
    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>> {
        let path = self.make_file_path(key)?;
        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(Some(ObjectMeta {
                size: metadata.len(),
            })),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, key: &str, range: Option<ByteRange>) -> Result<Option<ObjectBody>> {
        let path = self.make_file_path(key)?;
        let mut file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Ok(None);
        }
        let size = metadata.len();

        let body = match range {
            Some(r) => {
                file.seek(SeekFrom::Start(r.start)).await?;
                let len = r.len().min(size.saturating_sub(r.start));
                ObjectBody {
                    content_length: len,
                    stream: Box::pin(ReaderStream::new(file.take(len))),
                }
            }
            None => ObjectBody {
                content_length: size,
                stream: Box::pin(ReaderStream::new(file)),
            },
        };

        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::read_to_bytes;
    use futures::TryStreamExt;

    fn storage_with(key: &str, contents: &[u8]) -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(key);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf());
        (dir, storage)
    }

    async fn collect(body: ObjectBody) -> Vec<u8> {
        body.stream
            .map_ok(|chunk| chunk.to_vec())
            .try_concat()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_head() {
        let (_dir, storage) = storage_with("reciter/001001.mp3", &[1u8; 64]);

        let meta = storage.head("reciter/001001.mp3").await.unwrap();
        assert_eq!(meta, Some(ObjectMeta { size: 64 }));
        assert_eq!(storage.head("reciter/001002.mp3").await.unwrap(), None);
        assert_eq!(storage.head("reciter").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_whole_object() {
        let data: Vec<u8> = (0..=255).collect();
        let (_dir, storage) = storage_with("a/b.bin", &data);

        let body = storage.get("a/b.bin", None).await.unwrap().unwrap();
        assert_eq!(body.content_length, 256);
        assert_eq!(collect(body).await, data);
    }

    #[tokio::test]
    async fn test_get_range() {
        let data: Vec<u8> = (0..=255).collect();
        let (_dir, storage) = storage_with("a/b.bin", &data);

        let body = storage
            .get("a/b.bin", Some(ByteRange::new(10, 19)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body.content_length, 10);
        assert_eq!(collect(body).await, data[10..20].to_vec());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let (_dir, storage) = storage_with("a/b.bin", b"x");
        assert!(storage.get("a/c.bin", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let (_dir, storage) = storage_with("a/b.bin", b"x");
        assert!(storage.head("../etc/passwd").await.is_err());
        assert!(storage.head("/etc/passwd").await.is_err());
        assert!(storage.get("a/../../x", None).await.is_err());
    }

    #[tokio::test]
    async fn test_read_to_bytes() {
        let (_dir, storage) = storage_with("doc.json", br#"{"surahs":[]}"#);
        let bytes = read_to_bytes(&storage, "doc.json").await.unwrap().unwrap();
        assert_eq!(&bytes[..], br#"{"surahs":[]}"#);
        assert!(read_to_bytes(&storage, "none.json").await.unwrap().is_none());
    }
}
