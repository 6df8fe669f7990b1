use std::path::PathBuf;

use crate::config::PinataCredentials;
use crate::domain::{Network, WalletError, WalletManager};

/// Details of a freshly created wallet, for display
#[derive(Debug, Clone, PartialEq)]
pub struct WalletInfo {
    pub path: PathBuf,
    pub address: String,
    pub explorer_url: String,
    /// Only set for networks that have a faucet
    pub faucet_url: Option<String>,
}

/// Local config and per-network keypair files
pub trait ConfigStore {
    /// Generate a keypair and write it to the network's wallet file, overwriting any existing one
    fn create_wallet(&self, network: Network) -> Result<WalletInfo, WalletError>;

    /// Read the network's wallet file; never creates one
    fn load_wallet(&self, network: Network) -> Result<WalletManager, WalletError>;

    /// Pinata key pair, `None` when either key is missing
    fn pinata_credentials(&self) -> Option<PinataCredentials>;
}
