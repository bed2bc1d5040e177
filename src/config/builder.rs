//! Fluent builder for [`ClientConfig`].

use std::sync::Arc;
use std::time::Duration;

use super::client::{ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use super::pool::PoolConfig;
use super::tls::{HostnameVerifier, SslParameters, TlsSocketFactory};
use crate::error::{ConfigError, Result};

/// Accumulates connection parameters and produces an immutable
/// [`ClientConfig`].
///
/// The builder is a short-lived, single-owner accumulator: every call
/// consumes it and returns either the builder itself or a scoped
/// sub-builder. TLS settings are grouped under [`use_ssl`](Self::use_ssl)
/// and pool settings under [`use_pooling`](Self::use_pooling); both groups
/// merge into the snapshot in one step when `build()` runs.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use strata_client_config::{AcceptAllHostnames, ClientConfig, PoolConfig};
///
/// let config = ClientConfig::builder()
///     .client_name("orders-api")
///     .connect_timeout(Duration::from_secs(5))
///     .use_ssl()
///     .hostname_verifier(Arc::new(AcceptAllHostnames))
///     .and()
///     .use_pooling()
///     .pool_config(PoolConfig::builder().max_connections(16).build())
///     .build()?;
///
/// assert!(config.ssl_enabled());
/// assert_eq!(config.client_name(), Some("orders-api"));
/// # Ok::<(), strata_client_config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ClientConfigBuilder {
    client_name: Option<String>,
    connect_timeout: Duration,
    read_timeout: Duration,
    ssl: bool,
    hostname_verifier: Option<Arc<dyn HostnameVerifier>>,
    ssl_parameters: Option<SslParameters>,
    ssl_socket_factory: Option<Arc<dyn TlsSocketFactory>>,
    pool_config: PoolConfig,
}

impl ClientConfigBuilder {
    /// Creates a builder with every field at its default.
    pub fn new() -> Self {
        Self {
            client_name: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            ssl: false,
            hostname_verifier: None,
            ssl_parameters: None,
            ssl_socket_factory: None,
            pool_config: PoolConfig::default(),
        }
    }

    /// Sets the name this connection registers at the server.
    ///
    /// Validated at `build()` time: the server rejects names that are
    /// empty or contain characters outside printable ASCII (including
    /// spaces). [`default_client_name`](crate::default_client_name)
    /// always passes.
    #[must_use]
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Sets the timeout for establishing a connection.
    ///
    /// Zero means no timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the timeout for blocking read operations.
    ///
    /// Zero means no timeout.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Enables TLS and opens the TLS configuration block.
    ///
    /// The returned sub-builder is the only place hostname verifier, TLS
    /// parameters, and socket factory can be set, so those capabilities
    /// can never be configured with TLS disabled. Return to this builder
    /// with [`TlsConfigBuilder::and`].
    pub fn use_ssl(mut self) -> TlsConfigBuilder {
        self.ssl = true;
        TlsConfigBuilder { parent: self }
    }

    /// Opens the connection pool configuration block.
    ///
    /// Pooling is on by default with a standard [`PoolConfig`]; this block
    /// exists to replace that configuration. Return to this builder with
    /// [`PoolingConfigBuilder::and`], or finish directly with its
    /// `build()`.
    pub fn use_pooling(self) -> PoolingConfigBuilder {
        PoolingConfigBuilder { parent: self }
    }

    /// Validates the accumulated state and freezes it into a
    /// [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidClientName`] if the configured name is
    ///   empty or not printable ASCII without spaces.
    /// - [`ConfigError::InvalidProtocolRange`] if the TLS parameter
    ///   bundle's minimum protocol version is above its maximum.
    /// - [`ConfigError::InvalidPoolBounds`] if the pool sizing bounds are
    ///   inconsistent.
    pub fn build(self) -> Result<ClientConfig> {
        if let Some(name) = &self.client_name {
            validate_client_name(name)?;
        }
        if let Some(parameters) = &self.ssl_parameters {
            if let (Some(min), Some(max)) =
                (parameters.min_protocol_version, parameters.max_protocol_version)
            {
                if min > max {
                    return Err(ConfigError::InvalidProtocolRange { min, max });
                }
            }
        }
        self.pool_config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            client_name = self.client_name.as_deref(),
            ssl = self.ssl,
            "client configuration built"
        );

        Ok(ClientConfig {
            client_name: self.client_name,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            ssl: self.ssl,
            hostname_verifier: self.hostname_verifier,
            ssl_parameters: self.ssl_parameters,
            ssl_socket_factory: self.ssl_socket_factory,
            pool_config: Some(self.pool_config),
        })
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped builder for the TLS block of a client configuration.
///
/// Obtained from [`ClientConfigBuilder::use_ssl`], which is also what
/// enables TLS. All previously accumulated parent state is preserved;
/// [`and`](Self::and) hands control back to the parent builder.
#[derive(Debug)]
pub struct TlsConfigBuilder {
    parent: ClientConfigBuilder,
}

impl TlsConfigBuilder {
    /// Sets the hostname verifier applied during the handshake.
    #[must_use]
    pub fn hostname_verifier(mut self, verifier: Arc<dyn HostnameVerifier>) -> Self {
        self.parent.hostname_verifier = Some(verifier);
        self
    }

    /// Sets the TLS parameter bundle.
    #[must_use]
    pub fn ssl_parameters(mut self, parameters: SslParameters) -> Self {
        self.parent.ssl_parameters = Some(parameters);
        self
    }

    /// Sets the factory that wraps TCP streams in TLS sessions.
    #[must_use]
    pub fn ssl_socket_factory(mut self, factory: Arc<dyn TlsSocketFactory>) -> Self {
        self.parent.ssl_socket_factory = Some(factory);
        self
    }

    /// Closes the TLS block and returns to the parent builder.
    pub fn and(self) -> ClientConfigBuilder {
        self.parent
    }
}

/// Scoped builder for the connection pool block of a client configuration.
///
/// Obtained from [`ClientConfigBuilder::use_pooling`]. Either return to
/// the parent with [`and`](Self::and) or finish directly with
/// [`build`](Self::build).
#[derive(Debug)]
pub struct PoolingConfigBuilder {
    parent: ClientConfigBuilder,
}

impl PoolingConfigBuilder {
    /// Replaces the default pool configuration.
    #[must_use]
    pub fn pool_config(mut self, config: PoolConfig) -> Self {
        self.parent.pool_config = config;
        self
    }

    /// Closes the pooling block and returns to the parent builder.
    pub fn and(self) -> ClientConfigBuilder {
        self.parent
    }

    /// Closes the pooling block and builds the configuration.
    ///
    /// Shorthand for `and().build()`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ClientConfigBuilder::build`].
    pub fn build(self) -> Result<ClientConfig> {
        self.and().build()
    }
}

fn validate_client_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidClientName {
            name: name.to_owned(),
            reason: "must not be empty",
        });
    }
    if !name.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ConfigError::InvalidClientName {
            name: name.to_owned(),
            reason: "must be printable ASCII without spaces",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::config::tls::{AcceptAllHostnames, TlsVersion};

    #[test]
    fn test_build_with_defaults() {
        let config = ClientConfigBuilder::new().build().unwrap();
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.read_timeout(), Duration::from_secs(2));
        assert!(!config.ssl_enabled());
        assert!(config.pooling_enabled());
    }

    #[test]
    fn test_setters_overwrite_defaults() {
        let config = ClientConfigBuilder::new()
            .client_name("orders-api")
            .connect_timeout(Duration::from_millis(250))
            .read_timeout(Duration::from_secs(1))
            .build()
            .unwrap();

        assert_eq!(config.client_name(), Some("orders-api"));
        assert_eq!(config.connect_timeout(), Duration::from_millis(250));
        assert_eq!(config.read_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_timeout_means_no_timeout() {
        let config = ClientConfigBuilder::new()
            .connect_timeout(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(config.connect_timeout(), Duration::ZERO);
    }

    #[test]
    fn test_use_ssl_enables_tls() {
        let config = ClientConfigBuilder::new().use_ssl().and().build().unwrap();
        assert!(config.ssl_enabled());
        // Entering the block does not conjure capabilities
        assert!(config.hostname_verifier().is_none());
        assert!(config.ssl_socket_factory().is_none());
    }

    #[test]
    fn test_tls_block_preserves_parent_state() {
        let config = ClientConfigBuilder::new()
            .client_name("orders-api")
            .connect_timeout(Duration::from_secs(7))
            .use_ssl()
            .hostname_verifier(Arc::new(AcceptAllHostnames))
            .and()
            .build()
            .unwrap();

        assert_eq!(config.client_name(), Some("orders-api"));
        assert_eq!(config.connect_timeout(), Duration::from_secs(7));
        assert!(config.hostname_verifier().is_some());
    }

    #[test]
    fn test_pooling_block_builds_directly() {
        let pool = PoolConfig::builder().max_connections(4).max_idle(4).build();
        let config = ClientConfigBuilder::new()
            .use_pooling()
            .pool_config(pool.clone())
            .build()
            .unwrap();
        assert_eq!(config.pool_config(), Some(&pool));
    }

    #[test]
    fn test_pooling_block_returns_to_parent() {
        let pool = PoolConfig::builder().max_connections(4).max_idle(2).build();
        let config = ClientConfigBuilder::new()
            .use_pooling()
            .pool_config(pool.clone())
            .and()
            .client_name("orders-api")
            .build()
            .unwrap();
        assert_eq!(config.client_name(), Some("orders-api"));
        assert_eq!(config.pool_config(), Some(&pool));
    }

    #[test_case("orders-api" => true ; "plain name")]
    #[test_case("orders/1.2" => true ; "slash and dots")]
    #[test_case("" => false ; "empty")]
    #[test_case("orders api" => false ; "space")]
    #[test_case("orders\napi" => false ; "newline")]
    #[test_case("ordérs" => false ; "non ascii")]
    fn client_name_accepted(name: &str) -> bool {
        ClientConfigBuilder::new().client_name(name).build().is_ok()
    }

    #[test]
    fn test_invalid_client_name_error() {
        let err = ClientConfigBuilder::new()
            .client_name("bad name")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClientName { .. }));
    }

    #[test]
    fn test_inverted_protocol_range_rejected() {
        let parameters = SslParameters::builder()
            .min_protocol_version(TlsVersion::Tls13)
            .max_protocol_version(TlsVersion::Tls12)
            .build();
        let err = ClientConfigBuilder::new()
            .use_ssl()
            .ssl_parameters(parameters)
            .and()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidProtocolRange {
                min: TlsVersion::Tls13,
                max: TlsVersion::Tls12,
            }
        );
    }

    #[test]
    fn test_invalid_pool_bounds_rejected() {
        let pool = PoolConfig::builder().max_connections(2).max_idle(4).build();
        let err = ClientConfigBuilder::new()
            .use_pooling()
            .pool_config(pool)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPoolBounds { .. }));
    }

    #[test]
    fn test_last_setter_wins() {
        let config = ClientConfigBuilder::new()
            .connect_timeout(Duration::from_secs(1))
            .connect_timeout(Duration::from_secs(9))
            .build()
            .unwrap();
        assert_eq!(config.connect_timeout(), Duration::from_secs(9));
    }
}
