//! # Gavel Core
//!
//! Core types, traits, and error definitions for the gavel auction
//! persistence layer. This crate provides the domain entities and the
//! foundational abstractions shared by the configuration and repository
//! crates.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
