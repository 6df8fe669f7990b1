//! Pinata API Client
//!
//! HTTP client for pinning token images and metadata JSON to IPFS.

use async_trait::async_trait;
use reqwest::{header, multipart, Body, Client, RequestBuilder, Response};

use crate::config::PinataCredentials;
use crate::domain::{ImageSource, TokenMetadata};
use crate::ports::pinning::{PinningError, PinningPort};
use super::types::{mime_for_file_name, PinResponse};

/// Pinata client configuration
#[derive(Debug, Clone)]
pub struct PinataConfig {
    /// Base URL for the pinning API
    pub api_base_url: String,
    /// Gateway prefix for returned content URIs
    pub gateway_url: String,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.pinata.cloud".to_string(),
            gateway_url: "https://gateway.pinata.cloud/ipfs".to_string(),
        }
    }
}

/// Image body ready for upload; local files are streamed from disk
#[derive(Debug)]
struct ImagePayload {
    body: Body,
    length: u64,
    file_name: String,
    content_type: String,
}

/// Pinata IPFS pinning client
#[derive(Debug, Clone)]
pub struct PinataClient {
    config: PinataConfig,
    credentials: Option<PinataCredentials>,
    http: Client,
}

impl PinataClient {
    /// Create a new Pinata client with default configuration
    pub fn new(credentials: Option<PinataCredentials>) -> Result<Self, PinningError> {
        Self::with_config(PinataConfig::default(), credentials)
    }

    /// Create a new Pinata client with custom configuration
    pub fn with_config(
        config: PinataConfig,
        credentials: Option<PinataCredentials>,
    ) -> Result<Self, PinningError> {
        let http = Client::builder()
            .build()
            .map_err(|e| PinningError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            credentials,
            http,
        })
    }

    fn credentials(&self) -> Result<&PinataCredentials, PinningError> {
        self.credentials
            .as_ref()
            .ok_or(PinningError::MissingCredentials)
    }

    fn authorized(&self, req: RequestBuilder, creds: &PinataCredentials) -> RequestBuilder {
        req.header("pinata_api_key", &creds.api_key)
            .header("pinata_secret_api_key", &creds.secret_api_key)
    }

    /// Fetch remote bytes or read the local file
    async fn load_image(&self, source: &ImageSource) -> Result<ImagePayload, PinningError> {
        let file_name = source.file_name();

        match source {
            ImageSource::Remote(url) => {
                tracing::info!("Downloading remote image: {}", url);
                let download_err = |reason: String| PinningError::DownloadFailed {
                    url: url.to_string(),
                    reason,
                };

                let response = self
                    .http
                    .get(url.clone())
                    .header(header::ACCEPT, "image/*")
                    .send()
                    .await
                    .map_err(|e| download_err(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(download_err(format!("status {}", status)));
                }

                let content_type = response
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("image/png")
                    .to_string();

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| download_err(e.to_string()))?;

                Ok(ImagePayload {
                    length: bytes.len() as u64,
                    body: Body::from(bytes),
                    file_name,
                    content_type,
                })
            }
            ImageSource::Local(path) => {
                let read_err = |source| PinningError::ReadFailed {
                    path: path.display().to_string(),
                    source,
                };
                let file = tokio::fs::File::open(path).await.map_err(read_err)?;
                let length = file.metadata().await.map_err(read_err)?.len();

                Ok(ImagePayload {
                    body: Body::from(file),
                    length,
                    content_type: mime_for_file_name(&file_name).to_string(),
                    file_name,
                })
            }
        }
    }

    /// Surface non-2xx responses verbatim, otherwise parse the pin result
    async fn handle_response(&self, response: Response) -> Result<String, PinningError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Pinata responded {}: {}", status, body);
            return Err(PinningError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        let pinned: PinResponse = response
            .json()
            .await
            .map_err(|e| PinningError::InvalidResponse(e.to_string()))?;

        Ok(pinned.gateway_uri(&self.config.gateway_url))
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl PinningPort for PinataClient {
    async fn upload_image(&self, source: &ImageSource) -> Result<String, PinningError> {
        let creds = self.credentials()?;
        let image = self.load_image(source).await?;

        tracing::debug!(
            file_name = %image.file_name,
            content_type = %image.content_type,
            size = image.length,
            "Pinning image"
        );

        let part = multipart::Part::stream_with_length(image.body, image.length)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| PinningError::HttpError(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/pinning/pinFileToIPFS", self.config.api_base_url);
        let response = self
            .authorized(self.http.post(&url), creds)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PinningError::HttpError(e.to_string()))?;

        let uri = self.handle_response(response).await?;
        tracing::info!("Image uploaded to Pinata: {}", uri);
        Ok(uri)
    }

    async fn upload_metadata(&self, metadata: &TokenMetadata) -> Result<String, PinningError> {
        let creds = self.credentials()?;

        let url = format!("{}/pinning/pinJSONToIPFS", self.config.api_base_url);
        let response = self
            .authorized(self.http.post(&url), creds)
            .json(metadata)
            .send()
            .await
            .map_err(|e| PinningError::HttpError(e.to_string()))?;

        let uri = self.handle_response(response).await?;
        tracing::info!("Metadata uploaded to Pinata: {}", uri);
        Ok(uri)
    }
}
