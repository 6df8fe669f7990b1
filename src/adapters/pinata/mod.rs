//! Pinata Adapter
//!
//! Implementation of the PinningPort for the Pinata IPFS pinning service.
//! Uploads token images (local files or remote URLs) and metadata JSON,
//! returning gateway URIs.

mod client;
mod types;

pub use client::{PinataClient, PinataConfig};
pub use types::PinResponse;
