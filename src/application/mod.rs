//! Application Layer - Use cases
//!
//! The token launcher sequences pinning, transaction building, signing and broadcast.

pub mod launcher;

pub use launcher::{ensure_funded, sign_create_transaction, LaunchError, LaunchReceipt, TokenLauncher};
