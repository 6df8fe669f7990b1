//! File-backed config and wallet store
//!
//! Wallet paths in the config are resolved against the config file's directory,
//! with `~` expanded to the home directory.

use std::path::{Path, PathBuf};

use crate::config::{Config, LoadedConfig, PinataCredentials};
use crate::domain::{Network, WalletError, WalletManager};
use crate::ports::store::{ConfigStore, WalletInfo};

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    config: Config,
    base_dir: PathBuf,
}

impl FileConfigStore {
    pub fn new(config: Config, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    pub fn from_loaded(loaded: &LoadedConfig) -> Self {
        Self::new(loaded.config.clone(), loaded.base_dir())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute-or-base-relative path of the network's wallet file
    pub fn wallet_path(&self, network: Network) -> PathBuf {
        let configured = &self.config.network(network).wallet;
        let expanded = shellexpand::tilde(configured).to_string();
        let path = Path::new(&expanded);

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn create_wallet(&self, network: Network) -> Result<WalletInfo, WalletError> {
        let path = self.wallet_path(network);
        let wallet = WalletManager::generate();

        if path.exists() {
            tracing::warn!("Overwriting existing wallet file: {}", path.display());
        }
        wallet.save_to_file(&path)?;

        let address = wallet.public_key();
        tracing::info!("New {} wallet created: {}", network, address);

        Ok(WalletInfo {
            explorer_url: network.explorer_address_url(&address),
            faucet_url: network.faucet_url().map(str::to_string),
            path,
            address,
        })
    }

    fn load_wallet(&self, network: Network) -> Result<WalletManager, WalletError> {
        let path = self.wallet_path(network);
        let wallet = WalletManager::from_file(&path)?;
        tracing::info!("Wallet loaded successfully from: {}", path.display());
        Ok(wallet)
    }

    fn pinata_credentials(&self) -> Option<PinataCredentials> {
        self.config.pinata.credentials()
    }
}
