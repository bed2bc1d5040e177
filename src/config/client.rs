//! Immutable client configuration snapshot.

use std::sync::Arc;
use std::time::Duration;

use super::builder::ClientConfigBuilder;
use super::pool::PoolConfig;
use super::tls::{HostnameVerifier, SslParameters, TlsSocketFactory};

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default timeout for blocking read operations.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Immutable snapshot of Strata client connection parameters.
///
/// A `ClientConfig` is produced once, either by [`ClientConfig::new`] with
/// every field at its default, or by driving
/// [`ClientConfig::builder`](ClientConfig::builder) through its fluent
/// calls and finishing with `build()`. After that the snapshot never
/// changes: accessors are read-only and cloning is cheap because the
/// capability references are shared.
///
/// The snapshot carries parameters only. Establishing connections, pooling
/// them, and performing TLS handshakes is the job of the connection
/// factory that consumes this object (host and port are supplied to it
/// separately).
///
/// ## Example
///
/// ```rust
/// use strata_client_config::ClientConfig;
///
/// let config = ClientConfig::new();
/// assert_eq!(config.client_name(), None);
/// assert!(config.pool_config().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) client_name: Option<String>,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) ssl: bool,
    pub(crate) hostname_verifier: Option<Arc<dyn HostnameVerifier>>,
    pub(crate) ssl_parameters: Option<SslParameters>,
    pub(crate) ssl_socket_factory: Option<Arc<dyn TlsSocketFactory>>,
    pub(crate) pool_config: Option<PoolConfig>,
}

impl ClientConfig {
    /// Creates a configuration with every field at its default.
    ///
    /// Equivalent to `ClientConfig::builder().build()` with no
    /// intermediate calls, but infallible: defaults always validate.
    pub fn new() -> Self {
        Self {
            client_name: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            ssl: false,
            hostname_verifier: None,
            ssl_parameters: None,
            ssl_socket_factory: None,
            pool_config: Some(PoolConfig::default()),
        }
    }

    /// Opens a builder for assembling a custom configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the name this connection registers at the server, if one
    /// was configured.
    #[inline]
    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    /// Returns the timeout for establishing a connection.
    ///
    /// Zero means no timeout.
    #[inline]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the timeout for blocking read operations.
    ///
    /// Zero means no timeout.
    #[inline]
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns `true` if connections should use TLS.
    #[inline]
    pub fn ssl_enabled(&self) -> bool {
        self.ssl
    }

    /// Returns the hostname verifier, if one was configured.
    #[inline]
    pub fn hostname_verifier(&self) -> Option<&Arc<dyn HostnameVerifier>> {
        self.hostname_verifier.as_ref()
    }

    /// Returns the TLS parameter bundle, if one was configured.
    #[inline]
    pub fn ssl_parameters(&self) -> Option<&SslParameters> {
        self.ssl_parameters.as_ref()
    }

    /// Returns the TLS socket factory, if one was configured.
    #[inline]
    pub fn ssl_socket_factory(&self) -> Option<&Arc<dyn TlsSocketFactory>> {
        self.ssl_socket_factory.as_ref()
    }

    /// Returns `true` if connections should be pooled.
    #[inline]
    pub fn pooling_enabled(&self) -> bool {
        self.pool_config.is_some()
    }

    /// Returns the connection pool configuration.
    ///
    /// Present by default; the default pool configuration applies even
    /// when the builder's pooling block was never entered.
    #[inline]
    pub fn pool_config(&self) -> Option<&PoolConfig> {
        self.pool_config.as_ref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.client_name(), None);
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.read_timeout(), DEFAULT_READ_TIMEOUT);
        assert!(!config.ssl_enabled());
        assert!(config.hostname_verifier().is_none());
        assert!(config.ssl_parameters().is_none());
        assert!(config.ssl_socket_factory().is_none());
        assert!(config.pooling_enabled());
        assert_eq!(config.pool_config(), Some(&PoolConfig::default()));
    }

    #[test]
    fn test_default_matches_new() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.read_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_clone_preserves_values() {
        let config = ClientConfig::new();
        let cloned = config.clone();
        assert_eq!(cloned.connect_timeout(), config.connect_timeout());
        assert_eq!(cloned.pool_config(), config.pool_config());
    }
}
