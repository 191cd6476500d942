//! Blob storage for uploaded résumés.
//!
//! Wraps the S3 client (MinIO locally, AWS in production) behind a small
//! store handle. Uploads are keyed by a fresh UUID; the original filename
//! travels as object metadata only, so user input never shapes a key.

use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

/// A stored document fetched back from the blob store.
#[derive(Debug)]
pub struct StoredDocument {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Handle to the résumé blob bucket.
#[derive(Clone)]
pub struct BlobStore {
    client: S3Client,
    bucket: String,
}

impl BlobStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    fn object_key(file_id: Uuid) -> String {
        format!("resumes/{file_id}")
    }

    /// Stores raw document bytes and returns the identifier callers later
    /// use to fetch them back.
    pub async fn put(&self, filename: &str, content_type: &str, data: Bytes) -> Result<Uuid> {
        let file_id = Uuid::new_v4();
        let key = Self::object_key(file_id);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .metadata("filename", filename)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Stored {filename} at s3://{}/{key}", self.bucket);
        Ok(file_id)
    }

    /// Fetches stored bytes by identifier. `None` when the id is unknown.
    pub async fn get(&self, file_id: Uuid) -> Result<Option<StoredDocument>> {
        let key = Self::object_key(file_id);

        let object = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
        {
            Ok(object) => object,
            Err(err) => {
                if err.as_service_error().map(|se| se.is_no_such_key()) == Some(true) {
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("S3 fetch failed: {err}"));
            }
        };

        let content_type = object
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| anyhow::anyhow!("S3 body read failed: {e}"))?
            .into_bytes();

        Ok(Some(StoredDocument {
            bytes,
            content_type,
        }))
    }
}
