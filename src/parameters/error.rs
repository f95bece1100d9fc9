//! Parameter error types
//!
//! Provides error types for parameter store operations.

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// Invalid configuration (e.g., name too long, unknown parameter)
    #[error("invalid parameter configuration")]
    InvalidConfig,
    /// Store is full
    #[error("parameter store full")]
    StoreFull,
    /// Read-only parameter cannot be modified
    #[error("parameter is read-only")]
    ReadOnly,
}
