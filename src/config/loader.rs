//! Configuration Loader
//!
//! Loads the JSON config file holding per-network wallet paths and Pinata
//! credentials. A default skeleton is written when the file does not exist yet.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Network;

/// Main configuration structure matching config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub devnet: NetworkSection,
    pub mainnet: NetworkSection,
    #[serde(default)]
    pub pinata: PinataSection,
}

/// Per-network wallet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSection {
    /// Wallet keypair path (NEVER commit this file!)
    pub wallet: String,
    /// Optional RPC endpoint, falls back to the public cluster endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl NetworkSection {
    fn with_wallet(wallet: &str) -> Self {
        Self {
            wallet: wallet.to_string(),
            rpc_url: None,
        }
    }
}

/// Pinata API credentials section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinataSection {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub secret_api_key: String,
}

/// Resolved Pinata key pair, only built when both halves are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinataCredentials {
    pub api_key: String,
    pub secret_api_key: String,
}

impl PinataSection {
    /// Get credentials with environment variable fallback
    /// Checks PINATA_API_KEY / PINATA_SECRET_API_KEY when the config value is empty
    pub fn credentials(&self) -> Option<PinataCredentials> {
        let api_key = non_empty_or_env(&self.api_key, "PINATA_API_KEY")?;
        let secret_api_key = non_empty_or_env(&self.secret_api_key, "PINATA_SECRET_API_KEY")?;

        Some(PinataCredentials {
            api_key,
            secret_api_key,
        })
    }
}

fn non_empty_or_env(value: &str, var: &str) -> Option<String> {
    if !value.trim().is_empty() {
        return Some(value.to_string());
    }
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            devnet: NetworkSection::with_wallet("devnet-wallet.json"),
            mainnet: NetworkSection::with_wallet("mainnet-wallet.json"),
            pinata: PinataSection::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Outcome of [`load_config`]
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Path the config was read from
    pub path: PathBuf,
    /// True when the file did not exist and a default skeleton was written
    pub created: bool,
}

impl LoadedConfig {
    /// Directory that relative wallet paths are resolved against
    pub fn base_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Load configuration from a JSON file, writing the default skeleton if absent
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LoadedConfig, ConfigError> {
    let path = path.as_ref();
    let io_err = |source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    };

    let mut created = false;
    if !path.exists() {
        let skeleton = serde_json::to_string_pretty(&Config::default()).map_err(|source| {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::write(path, skeleton).map_err(io_err)?;
        tracing::info!("Created default config file: {}", path.display());
        created = true;
    }

    let content = std::fs::read_to_string(path).map_err(io_err)?;
    let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        created,
    })
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        for network in [Network::Devnet, Network::Mainnet] {
            let section = self.network(network);

            if section.wallet.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{}.wallet cannot be empty",
                    network
                )));
            }

            if let Some(ref url) = section.rpc_url {
                if url.trim().is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "{}.rpcUrl cannot be empty when set",
                        network
                    )));
                }
            }
        }

        Ok(())
    }

    /// Section for the given network
    pub fn network(&self, network: Network) -> &NetworkSection {
        match network {
            Network::Devnet => &self.devnet,
            Network::Mainnet => &self.mainnet,
        }
    }

    /// Get RPC URL with environment variable override
    /// Checks SOLANA_RPC_URL env var first, then the config value, then the cluster default
    pub fn rpc_url(&self, network: Network) -> String {
        std::env::var("SOLANA_RPC_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.network(network).rpc_url.clone())
            .unwrap_or_else(|| network.default_rpc_url().to_string())
    }
}
