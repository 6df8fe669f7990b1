//! PumpPortal Adapter
//!
//! Implementation of the TradePort for PumpPortal's `trade-local` API, which
//! returns unsigned pump.fun transactions.
//!
//! # Example
//!
//! ```ignore
//! use pump_launch::adapters::pump_portal::PumpPortalClient;
//! use pump_launch::ports::{CreateTokenRequest, TradePort};
//!
//! let client = PumpPortalClient::new()?;
//! let unsigned = client.request_create_transaction(&request).await?;
//! let tx: VersionedTransaction = bincode::deserialize(&unsigned)?;
//! ```

mod client;
mod types;

pub use client::{PumpPortalClient, PumpPortalConfig};
pub use types::{CreateTokenMetadata, TradeAction, TradeLocalRequest};
