use serde::{Deserialize, Serialize};
use std::fmt;

pub use solana_sdk::native_token::{lamports_to_sol, LAMPORTS_PER_SOL};

/// Solana cluster the CLI operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Devnet,
    Mainnet,
}

impl Network {
    pub fn from_mainnet_flag(mainnet: bool) -> Self {
        if mainnet {
            Network::Mainnet
        } else {
            Network::Devnet
        }
    }

    /// Name used for config keys and wallet file names
    pub fn name(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Public RPC endpoint for the cluster
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://api.devnet.solana.com",
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
        }
    }

    /// Default wallet file name, e.g. `devnet-wallet.json`
    pub fn default_wallet_file(&self) -> String {
        format!("{}-wallet.json", self.name())
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!(
            "https://explorer.solana.com/address/{}?cluster={}",
            address,
            self.name()
        )
    }

    pub fn explorer_tx_url(&self, signature: &str) -> String {
        match self {
            Network::Mainnet => format!("https://solscan.io/tx/{}", signature),
            Network::Devnet => format!("https://solscan.io/tx/{}?cluster=devnet", signature),
        }
    }

    /// Faucet for funding test wallets; mainnet has none
    pub fn faucet_url(&self) -> Option<&'static str> {
        match self {
            Network::Devnet => Some("https://faucet.solana.com"),
            Network::Mainnet => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Network::from_mainnet_flag(true), Network::Mainnet);
        assert_eq!(Network::from_mainnet_flag(false), Network::Devnet);
    }

    #[test]
    fn test_wallet_file_names() {
        assert_eq!(Network::Devnet.default_wallet_file(), "devnet-wallet.json");
        assert_eq!(Network::Mainnet.default_wallet_file(), "mainnet-wallet.json");
    }

    #[test]
    fn test_faucet_only_on_devnet() {
        assert!(Network::Devnet.faucet_url().is_some());
        assert!(Network::Mainnet.faucet_url().is_none());
    }

    #[test]
    fn test_explorer_links() {
        let url = Network::Devnet.explorer_address_url("Abc");
        assert_eq!(url, "https://explorer.solana.com/address/Abc?cluster=devnet");

        let tx = Network::Mainnet.explorer_tx_url("sig123");
        assert_eq!(tx, "https://solscan.io/tx/sig123");
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(1), 1e-9);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
    }
}
