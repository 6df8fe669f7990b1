//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Local config and wallet files
//! - IPFS pinning (Pinata)
//! - Token-creation transaction building (PumpPortal)
//! - Solana RPC access

pub mod store;
pub mod pinning;
pub mod trade;
pub mod network;
pub mod mocks;

pub use store::{ConfigStore, WalletInfo};
pub use pinning::{PinningError, PinningPort};
pub use trade::{CreateTokenRequest, TradeError, TradePort};
pub use network::{NetworkError, NetworkPort};
