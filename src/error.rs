//! Error types for configuration assembly.
//!
//! Everything here is a local construction-time validation failure surfaced
//! by [`ClientConfigBuilder::build`](crate::ClientConfigBuilder::build).
//! Nothing is retriable and nothing is swallowed: an invalid configuration
//! never produces a [`ClientConfig`](crate::ClientConfig).

use crate::config::TlsVersion;

/// Validation failure raised while assembling a client configuration.
///
/// ## Example
///
/// ```rust
/// use strata_client_config::{ClientConfig, ConfigError};
///
/// let err = ClientConfig::builder()
///     .client_name("my client")
///     .build()
///     .unwrap_err();
///
/// assert!(matches!(err, ConfigError::InvalidClientName { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The client name would be rejected when the connection registers
    /// itself at the server.
    ///
    /// Names must be non-empty printable ASCII without spaces.
    #[error("invalid client name {name:?}: {reason}")]
    InvalidClientName {
        /// The offending name.
        name: String,
        /// The rule the name violates.
        reason: &'static str,
    },

    /// The TLS protocol version range has its lower bound above its upper
    /// bound.
    #[error("invalid TLS protocol range: {min} is above {max}")]
    InvalidProtocolRange {
        /// Configured lower bound.
        min: TlsVersion,
        /// Configured upper bound.
        max: TlsVersion,
    },

    /// Connection pool sizing bounds are inconsistent.
    #[error("invalid pool bounds: {reason}")]
    InvalidPoolBounds {
        /// The bound relation that is violated.
        reason: &'static str,
    },
}

/// A specialized `Result` type for configuration assembly.
pub type Result<T> = std::result::Result<T, ConfigError>;
