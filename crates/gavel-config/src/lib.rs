//! # Gavel Config
//!
//! Layered configuration for the gavel workspace: TOML files first,
//! environment variables on top.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
