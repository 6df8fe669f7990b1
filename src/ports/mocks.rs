//! Recording test doubles for the ports
//!
//! Every mock appends its method name to a shared [`CallLog`] so tests can
//! assert both which adapters were hit and in what order.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{Message, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};

use crate::domain::{ImageSource, TokenMetadata};
use super::network::{NetworkError, NetworkPort};
use super::pinning::{PinningError, PinningPort};
use super::trade::{CreateTokenRequest, TradeError, TradePort};

/// Ordered record of port calls shared between mocks
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// Mock pinning service returning fixed URIs
#[derive(Debug, Clone)]
pub struct MockPinning {
    log: CallLog,
    image_uri: String,
    metadata_uri: String,
    missing_credentials: bool,
    images: Arc<Mutex<Vec<ImageSource>>>,
    metadata: Arc<Mutex<Vec<TokenMetadata>>>,
}

impl MockPinning {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            image_uri: "https://gateway.pinata.cloud/ipfs/QmImage".to_string(),
            metadata_uri: "https://gateway.pinata.cloud/ipfs/QmMetadata".to_string(),
            missing_credentials: false,
            images: Arc::default(),
            metadata: Arc::default(),
        }
    }

    pub fn with_uris(mut self, image_uri: &str, metadata_uri: &str) -> Self {
        self.image_uri = image_uri.to_string();
        self.metadata_uri = metadata_uri.to_string();
        self
    }

    /// Fail every upload as if no API keys were configured
    pub fn without_credentials(mut self) -> Self {
        self.missing_credentials = true;
        self
    }

    pub fn uploaded_images(&self) -> Vec<ImageSource> {
        self.images.lock().unwrap().clone()
    }

    pub fn uploaded_metadata(&self) -> Vec<TokenMetadata> {
        self.metadata.lock().unwrap().clone()
    }
}

#[async_trait]
impl PinningPort for MockPinning {
    async fn upload_image(&self, source: &ImageSource) -> Result<String, PinningError> {
        self.log.record("upload_image");
        if self.missing_credentials {
            return Err(PinningError::MissingCredentials);
        }
        self.images.lock().unwrap().push(source.clone());
        Ok(self.image_uri.clone())
    }

    async fn upload_metadata(&self, metadata: &TokenMetadata) -> Result<String, PinningError> {
        self.log.record("upload_metadata");
        if self.missing_credentials {
            return Err(PinningError::MissingCredentials);
        }
        self.metadata.lock().unwrap().push(metadata.clone());
        Ok(self.metadata_uri.clone())
    }
}

/// Mock trade endpoint that builds an unsigned create transaction per request
#[derive(Debug, Clone)]
pub struct MockTrade {
    log: CallLog,
    rejection: Option<(u16, String)>,
    requests: Arc<Mutex<Vec<CreateTokenRequest>>>,
}

impl MockTrade {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            rejection: None,
            requests: Arc::default(),
        }
    }

    /// Answer every request with the given non-200 status
    pub fn rejecting(mut self, status: u16, body: &str) -> Self {
        self.rejection = Some((status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<CreateTokenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradePort for MockTrade {
    async fn request_create_transaction(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<Vec<u8>, TradeError> {
        self.log.record("request_create_transaction");
        self.requests.lock().unwrap().push(request.clone());

        if let Some((status, ref body)) = self.rejection {
            return Err(TradeError::Rejected {
                status,
                body: body.clone(),
            });
        }

        Ok(unsigned_create_transaction(&request.wallet, &request.mint))
    }
}

/// Mock Solana cluster
#[derive(Debug, Clone)]
pub struct MockNetwork {
    log: CallLog,
    balance: u64,
    blockhash: Hash,
    signature: Signature,
    sent: Arc<Mutex<Vec<VersionedTransaction>>>,
}

impl MockNetwork {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            balance: 0,
            blockhash: Hash::new_from_array([7u8; 32]),
            signature: Signature::from([9u8; 64]),
            sent: Arc::default(),
        }
    }

    pub fn with_balance(mut self, lamports: u64) -> Self {
        self.balance = lamports;
        self
    }

    pub fn with_blockhash(mut self, blockhash: Hash) -> Self {
        self.blockhash = blockhash;
        self
    }

    /// Signature reported back by `send_transaction`
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn sent_transactions(&self) -> Vec<VersionedTransaction> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkPort for MockNetwork {
    async fn get_balance(&self, _pubkey: &Pubkey) -> Result<u64, NetworkError> {
        self.log.record("get_balance");
        Ok(self.balance)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, NetworkError> {
        self.log.record("get_latest_blockhash");
        Ok(self.blockhash)
    }

    async fn send_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, NetworkError> {
        self.log.record("send_transaction");
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(self.signature)
    }
}

/// Serialized unsigned transaction that needs both the payer and the mint to sign,
/// shaped like what the trade endpoint returns
pub fn unsigned_create_transaction(payer: &Pubkey, mint: &Pubkey) -> Vec<u8> {
    let instruction = Instruction::new_with_bytes(
        Pubkey::new_unique(),
        b"create",
        vec![
            AccountMeta::new(*mint, true),
            AccountMeta::new(*payer, true),
        ],
    );
    let message = Message::new(&[instruction], Some(payer));
    let transaction = VersionedTransaction {
        signatures: vec![Signature::default(); message.header.num_required_signatures as usize],
        message: VersionedMessage::Legacy(message),
    };

    bincode::serialize(&transaction).unwrap()
}
