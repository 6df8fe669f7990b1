use async_trait::async_trait;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use std::sync::Arc;

use crate::domain::Network;
use crate::ports::network::{NetworkError, NetworkPort};

/// Wrapper around Solana RPC client with async-compatible methods
#[derive(Clone)]
pub struct SolanaClient {
    client: Arc<RpcClient>,
    rpc_url: String,
}

impl SolanaClient {
    /// Create a new Solana RPC client
    pub fn new(rpc_url: String) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(
            rpc_url.clone(),
            CommitmentConfig::confirmed(),
        ));
        Self { client, rpc_url }
    }

    /// Client bound to the cluster's public endpoint
    pub fn for_network(network: Network) -> Self {
        Self::new(network.default_rpc_url().to_string())
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl std::fmt::Debug for SolanaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaClient")
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

#[async_trait]
impl NetworkPort for SolanaClient {
    /// Get SOL balance for a public key
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, NetworkError> {
        let pubkey = *pubkey;

        // Spawn blocking to make sync RPC call async-compatible
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_balance(&pubkey)
                .map_err(|e| NetworkError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| NetworkError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get recent blockhash (needed for transaction building)
    async fn get_latest_blockhash(&self) -> Result<Hash, NetworkError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_latest_blockhash()
                .map_err(|e| NetworkError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| NetworkError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Send a transaction to the network
    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, NetworkError> {
        let tx = transaction.clone();
        let client = Arc::clone(&self.client);

        tokio::task::spawn_blocking(move || {
            client
                .send_transaction_with_config(&tx, send_config())
                .map_err(|e| NetworkError::TransactionError(e.to_string()))
        })
        .await
        .map_err(|e| NetworkError::RpcError(format!("Task join error: {}", e)))?
    }
}

/// Preflight enabled, simulated against the `processed` bank
fn send_config() -> RpcSendTransactionConfig {
    RpcSendTransactionConfig {
        skip_preflight: false,
        preflight_commitment: Some(CommitmentLevel::Processed),
        ..RpcSendTransactionConfig::default()
    }
}
