//! Configuration Module
//!
//! Loads and validates configuration from the JSON config file.

pub mod loader;

pub use loader::{
    Config, ConfigError, LoadedConfig, NetworkSection, PinataCredentials, PinataSection,
    load_config,
};
