//! pump-launch - Solana wallet and pump.fun token launch library
//!
//! Creates per-network wallets, pins token art and metadata to IPFS, and
//! signs and broadcasts the create transaction built by PumpPortal.
//!
//! # Modules
//!
//! - `domain`: Core types (Network, TokenMetadata, TradeParams, WalletManager)
//! - `ports`: Trait abstractions (ConfigStore, PinningPort, TradePort, NetworkPort)
//! - `adapters`: External implementations (files, Solana, Pinata, PumpPortal, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Token launcher use case

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
