//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by location construction, country queries, and routing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A location field was rejected at construction time.
    #[error("invalid location: {0}")]
    Validation(String),

    /// An algorithm was called with inputs it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A location was passed to a country it does not belong to.
    #[error("location '{0}' does not belong to this country")]
    Domain(String),

    /// A renderer could not persist its diagram.
    #[error("failed to render to {target}: {message}")]
    Render {
        /// Where the diagram was meant to go.
        target: String,
        /// Underlying failure.
        message: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
