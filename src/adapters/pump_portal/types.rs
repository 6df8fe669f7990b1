//! PumpPortal Trade Types
//!
//! Request body for the `trade-local` endpoint, which answers with a
//! serialized unsigned transaction for the caller to sign.

use serde::{Deserialize, Serialize};

use crate::ports::trade::CreateTokenRequest;

/// Trade action understood by `trade-local`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Create,
}

/// On-chain metadata for a token being created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTokenMetadata {
    pub name: String,
    pub symbol: String,
    /// URI of the pinned metadata JSON
    pub uri: String,
}

/// Request body for POST /trade-local
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeLocalRequest {
    /// Wallet public key (base58)
    pub public_key: String,
    pub action: TradeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_metadata: Option<CreateTokenMetadata>,
    /// Mint public key (base58)
    pub mint: String,
    /// Sent as the string "true"/"false"
    pub denominated_in_sol: String,
    pub amount: f64,
    pub slippage: f64,
    pub priority_fee: f64,
    pub pool: String,
}

impl From<&CreateTokenRequest> for TradeLocalRequest {
    fn from(request: &CreateTokenRequest) -> Self {
        Self {
            public_key: request.wallet.to_string(),
            action: TradeAction::Create,
            token_metadata: Some(CreateTokenMetadata {
                name: request.ticker.clone(),
                symbol: request.ticker.clone(),
                uri: request.metadata_uri.clone(),
            }),
            mint: request.mint.to_string(),
            denominated_in_sol: request.params.denominated_in_sol.to_string(),
            amount: request.params.amount,
            slippage: request.params.slippage,
            priority_fee: request.params.priority_fee,
            pool: request.params.pool.clone(),
        }
    }
}
