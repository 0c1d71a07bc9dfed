//! Result type aliases for the gavel workspace.

use crate::GavelError;

/// A specialized `Result` type for gavel operations.
pub type GavelResult<T> = Result<T, GavelError>;
