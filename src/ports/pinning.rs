use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ImageSource, TokenMetadata};

#[derive(Debug, Error)]
pub enum PinningError {
    #[error("Pinata API credentials not found in config.json. Please add them to continue.")]
    MissingCredentials,
    #[error("Pinata upload failed with status {status}: {body}")]
    UploadFailed { status: u16, body: String },
    #[error("Failed to download image from {url}: {reason}")]
    DownloadFailed { url: String, reason: String },
    #[error("Failed to read image file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP request failed: {0}")]
    HttpError(String),
    #[error("Unexpected Pinata response: {0}")]
    InvalidResponse(String),
}

/// Content-addressed storage for token art and metadata
#[async_trait]
pub trait PinningPort {
    /// Pin the image and return its gateway URI
    async fn upload_image(&self, source: &ImageSource) -> Result<String, PinningError>;

    /// Pin the metadata JSON and return its gateway URI
    async fn upload_metadata(&self, metadata: &TokenMetadata) -> Result<String, PinningError>;
}
