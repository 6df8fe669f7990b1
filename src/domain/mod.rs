//! Domain Layer - Core types for the pump-launch CLI
//!
//! This module contains domain types with no network access. Wallet
//! keypairs are read from and written to local files.
//! All external interactions happen through the ports layer.

pub mod network;
pub mod token;
pub mod wallet;

pub use network::{lamports_to_sol, Network, LAMPORTS_PER_SOL};
pub use token::{ImageSource, TokenMetadata, TradeParams};
pub use wallet::{WalletError, WalletManager};
