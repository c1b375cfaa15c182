//! Cloudinary image uploads.
//!
//! Uses unsigned uploads with a preconfigured upload preset, so no request
//! signing is needed and the API secret never leaves Cloudinary's dashboard.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use blog_core::ports::{MediaError, MediaStorage};

const DEFAULT_FOLDER: &str = "sarkari-blog";

/// Cloudinary account configuration.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub folder: String,
}

impl MediaConfig {
    /// Read configuration from the environment. Returns `None` when the
    /// account is not configured; uploads then fail with a clear error
    /// instead of a half-configured request.
    pub fn from_env() -> Option<Self> {
        let cloud_name = env::var("CLOUDINARY_CLOUD_NAME").ok()?;
        let upload_preset = env::var("CLOUDINARY_UPLOAD_PRESET").ok()?;
        let folder =
            env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.to_string());

        Some(Self {
            cloud_name,
            upload_preset,
            folder,
        })
    }
}

/// Cloudinary-backed media storage.
pub struct CloudinaryStorage {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryStorage {
    pub fn new(config: MediaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
}

#[async_trait]
impl MediaStorage for CloudinaryStorage {
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, MediaError> {
        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        );

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", self.config.folder.clone());

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?
            .error_for_status()
            .map_err(|e| MediaError::Upload(e.to_string()))?;

        let result: UploadResult = response.json().await.map_err(|_| MediaError::Malformed)?;

        tracing::info!(url = %result.secure_url, "Image uploaded");
        Ok(result.secure_url)
    }
}

/// Stand-in used when no media account is configured.
pub struct UnconfiguredStorage;

#[async_trait]
impl MediaStorage for UnconfiguredStorage {
    async fn upload_image(&self, _filename: &str, _bytes: Vec<u8>) -> Result<String, MediaError> {
        Err(MediaError::NotConfigured)
    }
}
