use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::VersionedTransaction};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

/// Solana cluster access
#[async_trait]
pub trait NetworkPort {
    /// Balance in lamports
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, NetworkError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, NetworkError>;

    /// Broadcast a signed transaction with preflight at `processed` commitment
    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, NetworkError>;
}
