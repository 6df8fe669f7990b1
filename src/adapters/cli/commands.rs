//! CLI Command Handlers
//!
//! Wallet creation and token launch for the pump-launch CLI.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::adapters::pinata::PinataClient;
use crate::adapters::pump_portal::PumpPortalClient;
use crate::adapters::solana::SolanaClient;
use crate::adapters::storage::FileConfigStore;
use crate::application::{LaunchError, LaunchReceipt, TokenLauncher};
use crate::config::load_config;
use crate::domain::{Network, WalletManager};
use crate::ports::network::NetworkPort;
use crate::ports::pinning::PinningPort;
use crate::ports::store::ConfigStore;
use crate::ports::trade::TradePort;

const EXAMPLES: &str = "\
Examples:
  Create a wallet:  pump-launch --create-wallet
  Submit a token:   pump-launch --mainnet ./path-to-image.png TOKEN";

/// pump-launch - Manage Solana wallets and launch tokens on pump.fun
#[derive(Parser, Debug)]
#[command(
    name = "pump-launch",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "A CLI tool for managing Solana wallets and tokens with pump.fun",
    long_about = "pump-launch creates per-network Solana wallets, pins token art and \
                  metadata to IPFS through Pinata, and launches the token on pump.fun \
                  by signing the create transaction built by PumpPortal.",
    after_help = EXAMPLES
)]
pub struct CliApp {
    /// Image file path or URL
    #[arg(value_name = "IMAGE")]
    pub image: Option<String>,

    /// Token ticker, also used as name and symbol
    #[arg(value_name = "TICKER")]
    pub ticker: Option<String>,

    /// Use Mainnet (production environment)
    #[arg(long)]
    pub mainnet: bool,

    /// Create a new wallet
    #[arg(long)]
    pub create_wallet: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,

    /// Skip the mainnet confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliApp {
    pub fn network(&self) -> Network {
        Network::from_mainnet_flag(self.mainnet)
    }
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    // Initialize logging based on flags
    init_logging(app.verbose, app.debug)?;

    let network = app.network();
    if network.is_mainnet() && !app.yes {
        confirm_mainnet()?;
    }

    if app.create_wallet {
        return create_wallet_command(&app, network);
    }

    let (image, ticker) = match (app.image.as_deref(), app.ticker.as_deref()) {
        (Some(image), Some(ticker)) => (image, ticker),
        _ => {
            eprintln!("Run with --help for usage information.");
            bail!("Both IMAGE and TICKER are required.");
        }
    };

    launch_command(&app, network, image, ticker).await
}

/// Initialize logging system
fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second call in the same process keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();

    Ok(())
}

/// Block until the user presses Enter; Ctrl+C cancels
fn confirm_mainnet() -> Result<()> {
    println!("WARNING: You are about to perform an operation on the Mainnet.");
    print!("Press Enter to confirm or Ctrl+C to cancel: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}

/// Handle --create-wallet
fn create_wallet_command(app: &CliApp, network: Network) -> Result<()> {
    let loaded = load_config(&app.config).context("Failed to load configuration")?;
    if loaded.created {
        println!("Created default config file: {}", loaded.path.display());
    }
    let store = FileConfigStore::from_loaded(&loaded);

    println!("Creating a new {} wallet...", network);
    let info = store
        .create_wallet(network)
        .context("Failed to create wallet")?;

    println!("Wallet saved to: {}", info.path.display());
    println!("Wallet Address: {}", info.address);
    println!("View on Explorer: {}", info.explorer_url);
    if let Some(faucet) = info.faucet_url {
        println!("To fund your wallet, visit the Solana Faucet: {}", faucet);
    }

    Ok(())
}

/// Handle token submission
async fn launch_command(app: &CliApp, network: Network, image: &str, ticker: &str) -> Result<()> {
    let loaded = load_config(&app.config).context("Failed to load configuration")?;
    if loaded.created {
        println!("Created default config file: {}", loaded.path.display());
    }
    let store = FileConfigStore::from_loaded(&loaded);

    let wallet = store
        .load_wallet(network)
        .context("Failed to load wallet")?;
    println!("Using wallet: {}", wallet.public_key());

    let solana = SolanaClient::new(store.config().rpc_url(network));
    println!("Connected to Solana {} ({})", network, solana.rpc_url());

    let pinata = PinataClient::new(store.pinata_credentials())
        .context("Failed to create Pinata client")?;
    let pump_portal = PumpPortalClient::new()
        .context("Failed to create PumpPortal client")?;
    let launcher = TokenLauncher::new(pinata, pump_portal, solana);

    println!("Preparing submission to pump.fun...");
    let receipt = run_launch(&launcher, &wallet, network, image, ticker).await?;

    println!("Image URI: {}", receipt.image_uri);
    println!("Metadata URI: {}", receipt.metadata_uri);
    println!("Mint: {}", receipt.mint);
    println!(
        "Token creation successful! View transaction: {}",
        network.explorer_tx_url(&receipt.signature.to_string())
    );

    Ok(())
}

/// Balance gate plus submission; an unfunded wallet gets the faucet hint
pub async fn run_launch<P, T, N>(
    launcher: &TokenLauncher<P, T, N>,
    wallet: &WalletManager,
    network: Network,
    image: &str,
    ticker: &str,
) -> Result<LaunchReceipt>
where
    P: PinningPort + Send + Sync,
    T: TradePort + Send + Sync,
    N: NetworkPort + Send + Sync,
{
    match launcher.launch(wallet, image, ticker).await {
        Ok(receipt) => Ok(receipt),
        Err(e @ LaunchError::InsufficientBalance { .. }) => {
            if let Some(faucet) = network.faucet_url() {
                eprintln!("Fund your wallet using {}", faucet);
            }
            Err(e.into())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to submit to pump.fun")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mocks::{CallLog, MockNetwork, MockPinning, MockTrade};
    use clap::CommandFactory;
    use solana_sdk::signature::Signature;
    use tempfile::TempDir;

    fn mock_launcher(log: &CallLog, lamports: u64) -> TokenLauncher<MockPinning, MockTrade, MockNetwork> {
        TokenLauncher::new(
            MockPinning::new(log.clone()),
            MockTrade::new(log.clone()),
            MockNetwork::new(log.clone()).with_balance(lamports),
        )
    }

    #[test]
    fn test_cli_definition_is_valid() {
        CliApp::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let app = CliApp::try_parse_from(["pump-launch", "./img.png", "FOO"]).unwrap();

        assert_eq!(app.image.as_deref(), Some("./img.png"));
        assert_eq!(app.ticker.as_deref(), Some("FOO"));
        assert_eq!(app.network(), Network::Devnet);
        assert!(!app.create_wallet);
        assert_eq!(app.config, PathBuf::from("config.json"));
    }

    #[test]
    fn test_mainnet_and_create_wallet_flags() {
        let app = CliApp::try_parse_from(["pump-launch", "--mainnet", "--create-wallet", "-y"])
            .unwrap();

        assert_eq!(app.network(), Network::Mainnet);
        assert!(app.create_wallet);
        assert!(app.yes);
        assert!(app.image.is_none());
        assert!(app.ticker.is_none());
    }

    #[test]
    fn test_custom_config_path() {
        let app = CliApp::try_parse_from(["pump-launch", "--config", "/tmp/cfg.json", "a.png", "X"])
            .unwrap();
        assert_eq!(app.config, PathBuf::from("/tmp/cfg.json"));
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        let result = CliApp::try_parse_from(["pump-launch", "a.png", "X", "extra"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_launch_zero_balance_stops_before_upload() {
        let log = CallLog::new();
        let wallet = WalletManager::generate();

        let err = run_launch(&mock_launcher(&log, 0), &wallet, Network::Devnet, "./img.png", "FOO")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LaunchError>(),
            Some(LaunchError::InsufficientBalance { .. })
        ));
        assert_eq!(log.calls(), vec!["get_balance"]);
    }

    #[tokio::test]
    async fn test_run_launch_funded_wallet_broadcasts() {
        let log = CallLog::new();
        let wallet = WalletManager::generate();

        let receipt = run_launch(&mock_launcher(&log, 1), &wallet, Network::Devnet, "./img.png", "FOO")
            .await
            .unwrap();

        assert_eq!(log.calls().first(), Some(&"get_balance"));
        assert_eq!(log.calls().last(), Some(&"send_transaction"));
        assert_eq!(receipt.signature, Signature::from([9u8; 64]));
    }

    #[tokio::test]
    async fn test_run_launch_adds_context_to_upload_failures() {
        let log = CallLog::new();
        let launcher = TokenLauncher::new(
            MockPinning::new(log.clone()).without_credentials(),
            MockTrade::new(log.clone()),
            MockNetwork::new(log.clone()).with_balance(1),
        );

        let err = run_launch(&launcher, &WalletManager::generate(), Network::Devnet, "./img.png", "FOO")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to submit to pump.fun"));
        assert_eq!(log.calls(), vec!["get_balance", "upload_image"]);
    }

    #[tokio::test]
    async fn test_missing_ticker_fails_before_touching_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.json");
        let app = CliApp::try_parse_from([
            "pump-launch",
            "--config",
            config.to_str().unwrap(),
            "./img.png",
        ])
        .unwrap();

        let err = execute(app).await.unwrap_err();

        assert!(err.to_string().contains("IMAGE and TICKER are required"));
        assert!(!config.exists());
        assert!(!dir.path().join("devnet-wallet.json").exists());
    }
}
