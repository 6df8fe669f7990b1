//! Token Launch Integration Tests
//!
//! Drive the launcher end to end through recording port mocks, and the
//! config/wallet store through a temporary directory:
//! 1. Funded wallet -> pin image -> pin metadata -> build -> sign -> broadcast
//! 2. Unfunded wallet stops before any upload
//! 3. Missing Pinata keys fail before any network call
//! 4. Config bootstrap and wallet create/load round trip
//!
//! All tests are deterministic (no real network calls).

use pump_launch::adapters::pinata::{PinataClient, PinataConfig};
use pump_launch::adapters::storage::FileConfigStore;
use pump_launch::application::{LaunchError, TokenLauncher};
use pump_launch::config::load_config;
use pump_launch::domain::{
    ImageSource, Network, TokenMetadata, WalletError, WalletManager, LAMPORTS_PER_SOL,
};
use pump_launch::ports::mocks::{CallLog, MockNetwork, MockPinning, MockTrade};
use pump_launch::ports::{ConfigStore, PinningError, PinningPort};
use solana_sdk::{hash::Hash, signature::Signature};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

struct Harness {
    log: CallLog,
    pinning: MockPinning,
    trade: MockTrade,
    network: MockNetwork,
}

fn harness(lamports: u64) -> Harness {
    let log = CallLog::new();
    Harness {
        pinning: MockPinning::new(log.clone()),
        trade: MockTrade::new(log.clone()),
        network: MockNetwork::new(log.clone())
            .with_balance(lamports)
            .with_blockhash(Hash::new_from_array([42u8; 32]))
            .with_signature(Signature::from([5u8; 64])),
        log,
    }
}

impl Harness {
    fn launcher(&self) -> TokenLauncher<MockPinning, MockTrade, MockNetwork> {
        TokenLauncher::new(self.pinning.clone(), self.trade.clone(), self.network.clone())
    }
}

// ============================================================================
// Launch flow
// ============================================================================

#[tokio::test]
async fn test_submit_token_calls_each_step_once_in_order() {
    let h = harness(LAMPORTS_PER_SOL);
    let wallet = WalletManager::generate();

    let receipt = h
        .launcher()
        .submit_token(&wallet, "./img.png", "FOO")
        .await
        .unwrap();

    assert_eq!(
        h.log.calls(),
        vec![
            "upload_image",
            "upload_metadata",
            "request_create_transaction",
            "get_latest_blockhash",
            "send_transaction",
        ]
    );

    // Broadcast signature is handed back untouched
    assert_eq!(receipt.signature, Signature::from([5u8; 64]));
}

#[tokio::test]
async fn test_broadcast_transaction_is_signed_with_blockhash() {
    let h = harness(LAMPORTS_PER_SOL);
    let wallet = WalletManager::generate();

    let receipt = h
        .launcher()
        .submit_token(&wallet, "./img.png", "FOO")
        .await
        .unwrap();

    let sent = h.network.sent_transactions();
    assert_eq!(sent.len(), 1);

    let tx = &sent[0];
    assert_eq!(*tx.message.recent_blockhash(), Hash::new_from_array([42u8; 32]));
    assert_eq!(tx.message.static_account_keys()[0], wallet.pubkey());
    assert!(tx.message.static_account_keys().contains(&receipt.mint));
    assert!(tx.verify_with_results().into_iter().all(|ok| ok));
}

#[tokio::test]
async fn test_pinned_inputs_follow_ticker() {
    let h = harness(LAMPORTS_PER_SOL);
    let wallet = WalletManager::generate();

    h.launcher()
        .submit_token(&wallet, "./img.png", "FOO")
        .await
        .unwrap();

    assert_eq!(h.pinning.uploaded_images(), vec![ImageSource::parse("./img.png")]);
    let metadata = h.pinning.uploaded_metadata();
    assert_eq!(
        metadata,
        vec![TokenMetadata::for_ticker(
            "FOO",
            "https://gateway.pinata.cloud/ipfs/QmImage"
        )]
    );

    let requests = h.trade.requests();
    assert_eq!(requests[0].ticker, "FOO");
    assert_eq!(requests[0].metadata_uri, "https://gateway.pinata.cloud/ipfs/QmMetadata");
}

#[tokio::test]
async fn test_each_launch_uses_a_fresh_mint() {
    let h = harness(LAMPORTS_PER_SOL);
    let wallet = WalletManager::generate();
    let launcher = h.launcher();

    let first = launcher.submit_token(&wallet, "./img.png", "FOO").await.unwrap();
    let second = launcher.submit_token(&wallet, "./img.png", "FOO").await.unwrap();

    assert_ne!(first.mint, second.mint);
}

#[tokio::test]
async fn test_launch_with_funded_wallet_checks_balance_first() {
    let h = harness(1);
    let wallet = WalletManager::generate();

    h.launcher().launch(&wallet, "./img.png", "FOO").await.unwrap();

    let calls = h.log.calls();
    assert_eq!(calls.first(), Some(&"get_balance"));
    assert_eq!(calls.len(), 6);
}

#[tokio::test]
async fn test_zero_balance_never_reaches_pinning_or_trade() {
    let h = harness(0);
    let wallet = WalletManager::generate();

    let err = h
        .launcher()
        .launch(&wallet, "./img.png", "FOO")
        .await
        .unwrap_err();

    match err {
        LaunchError::InsufficientBalance { address } => assert_eq!(address, wallet.public_key()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(h.log.calls(), vec!["get_balance"]);
    assert!(h.pinning.uploaded_images().is_empty());
    assert!(h.trade.requests().is_empty());
}

// ============================================================================
// Credentials
// ============================================================================

#[tokio::test]
async fn test_default_config_has_no_pinata_credentials() {
    if std::env::var("PINATA_API_KEY").is_ok() || std::env::var("PINATA_SECRET_API_KEY").is_ok() {
        return;
    }

    let dir = TempDir::new().unwrap();
    let loaded = load_config(dir.path().join("config.json")).unwrap();
    let store = FileConfigStore::from_loaded(&loaded);
    assert!(store.pinata_credentials().is_none());

    // Nothing listens on the discard port, so reaching the network would be an HttpError
    let config = PinataConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        ..PinataConfig::default()
    };
    let client = PinataClient::with_config(config, store.pinata_credentials()).unwrap();

    let err = client
        .upload_image(&ImageSource::parse("https://127.0.0.1:9/img.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, PinningError::MissingCredentials));

    let err = client
        .upload_metadata(&TokenMetadata::for_ticker("FOO", "uri"))
        .await
        .unwrap_err();
    assert!(matches!(err, PinningError::MissingCredentials));
}

// ============================================================================
// Config and wallet store
// ============================================================================

#[test]
fn test_fresh_directory_bootstrap() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let loaded = load_config(&config_path).unwrap();
    assert!(loaded.created);
    let store = FileConfigStore::from_loaded(&loaded);

    // No wallet yet, and loading does not create one
    let err = store.load_wallet(Network::Devnet).unwrap_err();
    assert!(matches!(err, WalletError::NotFound { .. }));
    assert!(!dir.path().join("devnet-wallet.json").exists());

    let info = store.create_wallet(Network::Devnet).unwrap();
    assert_eq!(info.path, dir.path().join("devnet-wallet.json"));

    let wallet = store.load_wallet(Network::Devnet).unwrap();
    assert_eq!(wallet.public_key(), info.address);
}

#[test]
fn test_recreating_wallet_replaces_previous_key() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config(dir.path().join("config.json")).unwrap();
    let store = FileConfigStore::from_loaded(&loaded);

    let first = store.create_wallet(Network::Mainnet).unwrap();
    let second = store.create_wallet(Network::Mainnet).unwrap();

    assert_eq!(first.path, second.path);
    assert_ne!(first.address, second.address);
    assert_eq!(
        store.load_wallet(Network::Mainnet).unwrap().public_key(),
        second.address
    );
}

#[test]
fn test_corrupted_wallet_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config(dir.path().join("config.json")).unwrap();
    let store = FileConfigStore::from_loaded(&loaded);

    // Simulates a crash halfway through writing the key file
    std::fs::write(dir.path().join("devnet-wallet.json"), "[12,34,5").unwrap();

    let err = store.load_wallet(Network::Devnet).unwrap_err();
    assert!(matches!(err, WalletError::LoadError(_)));
}
