//! Media storage port - images are delegated to an external object store/CDN.

use async_trait::async_trait;

/// Image upload backend. Returns the public URL of the stored asset.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, MediaError>;
}

/// Media storage errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Media storage is not configured")]
    NotConfigured,

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Upstream returned an unexpected response")]
    Malformed,
}
