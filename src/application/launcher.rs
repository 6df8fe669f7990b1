//! Token Launcher
//!
//! Sequences a pump.fun token launch: pin the image, pin the metadata, ask the
//! trade endpoint for an unsigned create transaction, then sign it locally
//! with the wallet and a fresh mint keypair and broadcast it.
//!
//! Every step gates the next one; the first failure aborts the launch and is
//! returned as-is. Nothing is cached between attempts.

use solana_sdk::{
    hash::Hash,
    message::VersionedMessage,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::VersionedTransaction,
};
use thiserror::Error;

use crate::domain::{lamports_to_sol, ImageSource, TokenMetadata, TradeParams, WalletManager};
use crate::ports::network::{NetworkError, NetworkPort};
use crate::ports::pinning::{PinningError, PinningPort};
use crate::ports::trade::{CreateTokenRequest, TradeError, TradePort};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Wallet balance is 0. Please fund wallet {address} before launching a token")]
    InsufficientBalance { address: String },
    #[error(transparent)]
    Pinning(#[from] PinningError),
    #[error(transparent)]
    Trade(#[from] TradeError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("Invalid transaction from trade endpoint: {0}")]
    InvalidTransaction(String),
    #[error("Transaction signing failed: {0}")]
    SigningError(String),
}

/// Result of a successful launch
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchReceipt {
    /// Signature returned by the broadcast
    pub signature: Signature,
    /// Address of the new token mint
    pub mint: Pubkey,
    pub image_uri: String,
    pub metadata_uri: String,
}

/// Orchestrates a token launch over the pinning, trade and network ports
pub struct TokenLauncher<P, T, N> {
    pinning: P,
    trade: T,
    network: N,
    params: TradeParams,
}

impl<P, T, N> TokenLauncher<P, T, N>
where
    P: PinningPort + Send + Sync,
    T: TradePort + Send + Sync,
    N: NetworkPort + Send + Sync,
{
    /// Create a launcher with the default trade parameters
    pub fn new(pinning: P, trade: T, network: N) -> Self {
        Self {
            pinning,
            trade,
            network,
            params: TradeParams::default(),
        }
    }

    pub fn with_params(mut self, params: TradeParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &TradeParams {
        &self.params
    }

    /// Wallet balance in whole SOL; zero is a valid answer
    pub async fn check_balance(&self, wallet: &WalletManager) -> Result<f64, LaunchError> {
        let lamports = self.network.get_balance(&wallet.pubkey()).await?;
        let sol = lamports_to_sol(lamports);
        tracing::info!("Wallet {} balance: {} SOL", wallet.public_key(), sol);
        Ok(sol)
    }

    /// Balance check, then the full submission. An unfunded wallet stops here
    /// without touching the pinning service or the trade endpoint.
    pub async fn launch(
        &self,
        wallet: &WalletManager,
        image: &str,
        ticker: &str,
    ) -> Result<LaunchReceipt, LaunchError> {
        let balance = self.check_balance(wallet).await?;
        ensure_funded(wallet, balance)?;
        self.submit_token(wallet, image, ticker).await
    }

    /// Pin assets, build, sign and broadcast the create transaction
    pub async fn submit_token(
        &self,
        wallet: &WalletManager,
        image: &str,
        ticker: &str,
    ) -> Result<LaunchReceipt, LaunchError> {
        tracing::info!("Preparing submission of {} to pump.fun", ticker);

        let image_uri = self.pinning.upload_image(&ImageSource::parse(image)).await?;

        let metadata = TokenMetadata::for_ticker(ticker, image_uri.clone());
        let metadata_uri = self.pinning.upload_metadata(&metadata).await?;

        // Ephemeral; only its signature ever leaves this process
        let mint = Keypair::new();
        tracing::info!("Generated mint address: {}", mint.pubkey());

        let request = CreateTokenRequest {
            wallet: wallet.pubkey(),
            mint: mint.pubkey(),
            ticker: ticker.to_string(),
            metadata_uri: metadata_uri.clone(),
            params: self.params.clone(),
        };
        let unsigned = self.trade.request_create_transaction(&request).await?;

        let blockhash = self.network.get_latest_blockhash().await?;
        let transaction = sign_create_transaction(&unsigned, blockhash, wallet, &mint)?;

        let signature = self.network.send_transaction(&transaction).await?;
        tracing::info!("Token successfully submitted to pump.fun: {}", signature);

        Ok(LaunchReceipt {
            signature,
            mint: mint.pubkey(),
            image_uri,
            metadata_uri,
        })
    }
}

/// Reject an empty wallet before anything is uploaded
pub fn ensure_funded(wallet: &WalletManager, balance_sol: f64) -> Result<(), LaunchError> {
    if balance_sol <= 0.0 {
        return Err(LaunchError::InsufficientBalance {
            address: wallet.public_key(),
        });
    }
    Ok(())
}

/// Decode the trade endpoint's transaction, attach blockhash and fee payer,
/// and sign with the mint and the wallet
pub fn sign_create_transaction(
    unsigned: &[u8],
    blockhash: Hash,
    wallet: &WalletManager,
    mint: &Keypair,
) -> Result<VersionedTransaction, LaunchError> {
    let transaction: VersionedTransaction = bincode::deserialize(unsigned)
        .map_err(|e| LaunchError::InvalidTransaction(e.to_string()))?;

    let mut message = transaction.message;
    message.set_recent_blockhash(blockhash);
    set_fee_payer(&mut message, wallet.pubkey())?;

    let signers = [mint, wallet.keypair()];
    let signed = VersionedTransaction::try_new(message, &signers[..])
        .map_err(|e| LaunchError::SigningError(e.to_string()))?;

    let required = usize::from(signed.message.header().num_required_signatures);
    let signer_keys = &signed.message.static_account_keys()[..required];
    if !signer_keys.contains(&mint.pubkey()) {
        return Err(LaunchError::SigningError(format!(
            "mint {} is not a required signer",
            mint.pubkey()
        )));
    }

    Ok(signed)
}

/// The fee payer is the first static account key
fn set_fee_payer(message: &mut VersionedMessage, payer: Pubkey) -> Result<(), LaunchError> {
    let keys = match message {
        VersionedMessage::Legacy(m) => &mut m.account_keys,
        VersionedMessage::V0(m) => &mut m.account_keys,
    };

    let Some(first) = keys.first().copied() else {
        return Err(LaunchError::InvalidTransaction(
            "message has no account keys".to_string(),
        ));
    };
    if first == payer {
        return Ok(());
    }

    // Overwriting key 0 would list the wallet twice and drop whatever key 0 was
    if let Some(index) = keys.iter().position(|key| *key == payer) {
        return Err(LaunchError::InvalidTransaction(format!(
            "wallet {} is account {} but the fee payer is {}",
            payer, index, first
        )));
    }

    tracing::warn!("Replacing fee payer {} with wallet {}", first, payer);
    keys[0] = payer;
    Ok(())
}
