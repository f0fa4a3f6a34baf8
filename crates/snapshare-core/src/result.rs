//! Convenience result type alias for SnapShare.

use crate::error::AppError;

/// A specialized `Result` type for SnapShare operations.
pub type AppResult<T> = Result<T, AppError>;
