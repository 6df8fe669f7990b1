//! Token launch types
//!
//! Metadata pinned to IPFS, the image input, and the fixed trade parameters
//! sent to PumpPortal when creating a token.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Off-chain token metadata pinned as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Gateway URI of the pinned image
    pub image: String,
}

impl TokenMetadata {
    /// Metadata for a ticker: the ticker doubles as name and symbol
    pub fn for_ticker(ticker: &str, image_uri: impl Into<String>) -> Self {
        Self {
            name: ticker.to_string(),
            symbol: ticker.to_string(),
            description: format!("This is {} token.", ticker),
            image: image_uri.into(),
        }
    }
}

/// Where the token image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(reqwest::Url),
    Local(PathBuf),
}

impl ImageSource {
    /// Anything that parses as an absolute URL is fetched remotely, the rest is a file path
    pub fn parse(input: &str) -> Self {
        match reqwest::Url::parse(input) {
            Ok(url) => ImageSource::Remote(url),
            Err(_) => ImageSource::Local(PathBuf::from(input)),
        }
    }

    /// File name reported to the pinning service
    pub fn file_name(&self) -> String {
        let name = match self {
            ImageSource::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_string),
            ImageSource::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
        };

        name.filter(|n| !n.is_empty())
            .unwrap_or_else(|| "image.png".to_string())
    }
}

/// Parameters of the initial dev buy bundled with token creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParams {
    /// Buy amount, in SOL when `denominated_in_sol`
    pub amount: f64,
    /// Slippage in percent
    pub slippage: f64,
    /// Priority fee in SOL
    pub priority_fee: f64,
    /// Bonding-curve pool identifier
    pub pool: String,
    pub denominated_in_sol: bool,
}

impl Default for TradeParams {
    fn default() -> Self {
        Self {
            amount: 0.2,
            slippage: 10.0,
            priority_fee: 0.0005,
            pool: "pump".to_string(),
            denominated_in_sol: true,
        }
    }
}
