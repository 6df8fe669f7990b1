//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Storage: JSON config and keypair files
//! - Solana: RPC client and wallet management
//! - Pinata: IPFS pinning of token art and metadata
//! - PumpPortal: token-creation transaction builder
//! - CLI: Command-line interface

pub mod storage;
pub mod solana;
pub mod pinata;
pub mod pump_portal;
pub mod cli;

pub use storage::FileConfigStore;
pub use solana::SolanaClient;
pub use pinata::PinataClient;
pub use pump_portal::PumpPortalClient;
pub use cli::CliApp;
