use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::domain::TradeParams;

#[derive(Debug, Error)]
pub enum TradeError {
    #[error("Failed to create token on pump.fun: {status} {body}")]
    Rejected { status: u16, body: String },
    #[error("API request failed: {0}")]
    ApiError(String),
}

/// Everything the trade endpoint needs to build a create transaction
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTokenRequest {
    /// Wallet paying for creation and the dev buy
    pub wallet: Pubkey,
    /// Freshly generated mint address
    pub mint: Pubkey,
    pub ticker: String,
    /// Gateway URI of the pinned metadata JSON
    pub metadata_uri: String,
    pub params: TradeParams,
}

/// Remote builder of unsigned token-creation transactions
#[async_trait]
pub trait TradePort {
    /// Returns the serialized, unsigned transaction
    async fn request_create_transaction(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<Vec<u8>, TradeError>;
}
