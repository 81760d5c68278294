//! Convenience result type alias for Lumiere.

use crate::error::AppError;

/// A specialized `Result` type for Lumiere operations.
pub type AppResult<T> = Result<T, AppError>;
