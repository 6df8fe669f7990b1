//! PumpPortal API Client
//!
//! HTTP client for the PumpPortal local-transaction API. The endpoint builds
//! the transaction; signing stays on this machine.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::ports::trade::{CreateTokenRequest, TradeError, TradePort};
use super::types::TradeLocalRequest;

/// PumpPortal client configuration
#[derive(Debug, Clone)]
pub struct PumpPortalConfig {
    /// Base URL for the PumpPortal API
    pub api_base_url: String,
}

impl Default for PumpPortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pumpportal.fun/api".to_string(),
        }
    }
}

/// PumpPortal trade-construction client
#[derive(Debug, Clone)]
pub struct PumpPortalClient {
    config: PumpPortalConfig,
    http: Client,
}

impl PumpPortalClient {
    /// Create a new PumpPortal client with default configuration
    pub fn new() -> Result<Self, TradeError> {
        Self::with_config(PumpPortalConfig::default())
    }

    /// Create a new PumpPortal client with custom configuration
    pub fn with_config(config: PumpPortalConfig) -> Result<Self, TradeError> {
        let http = Client::builder()
            .build()
            .map_err(|e| TradeError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl TradePort for PumpPortalClient {
    async fn request_create_transaction(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<Vec<u8>, TradeError> {
        let url = format!("{}/trade-local", self.config.api_base_url);
        let body = TradeLocalRequest::from(request);

        tracing::debug!(
            mint = %body.mint,
            amount = body.amount,
            slippage = body.slippage,
            pool = %body.pool,
            "Requesting create transaction"
        );

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TradeError::ApiError(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TradeError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TradeError::ApiError(format!("Failed to read response: {}", e)))?;

        tracing::info!("Received unsigned transaction ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }
}
