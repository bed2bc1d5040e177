//! Connection pool sizing for the Strata client.

use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Configuration for the client connection pool.
///
/// The pool itself lives in the connection layer; this bundle only
/// describes how it should be sized and timed. The default configuration
/// is what [`ClientConfig`](crate::ClientConfig) carries when the pooling
/// block of the builder is never entered.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use strata_client_config::PoolConfig;
///
/// let pool = PoolConfig::builder()
///     .max_connections(32)
///     .max_idle(16)
///     .pool_timeout(Duration::from_secs(5))
///     .build();
///
/// assert!(pool.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PoolConfig {
    /// Maximum connections the pool will open per host.
    #[builder(default = 8)]
    pub max_connections: u32,

    /// Maximum idle connections kept ready for reuse.
    #[builder(default = 8)]
    pub max_idle: u32,

    /// Idle connections the pool maintains eagerly.
    #[builder(default = 0)]
    pub min_idle: u32,

    /// Timeout waiting for a free connection from an exhausted pool.
    #[builder(default = Duration::from_secs(30))]
    pub pool_timeout: Duration,

    /// Idle time after which a connection is closed and reaped.
    #[builder(default = Duration::from_secs(60))]
    pub idle_timeout: Duration,

    /// Whether connections are health-checked when checked out.
    #[builder(default = false)]
    pub test_on_check_out: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PoolConfig {
    /// Checks that the sizing bounds are internally consistent.
    ///
    /// Required: `max_connections >= 1`, `max_idle <= max_connections`,
    /// `min_idle <= max_idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolBounds`] naming the violated
    /// relation.
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidPoolBounds {
                reason: "max_connections must be at least 1",
            });
        }
        if self.max_idle > self.max_connections {
            return Err(ConfigError::InvalidPoolBounds {
                reason: "max_idle must not exceed max_connections",
            });
        }
        if self.min_idle > self.max_idle {
            return Err(ConfigError::InvalidPoolBounds {
                reason: "min_idle must not exceed max_idle",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_default_values() {
        let pool = PoolConfig::default();
        assert_eq!(pool.max_connections, 8);
        assert_eq!(pool.max_idle, 8);
        assert_eq!(pool.min_idle, 0);
        assert_eq!(pool.pool_timeout, Duration::from_secs(30));
        assert_eq!(pool.idle_timeout, Duration::from_secs(60));
        assert!(!pool.test_on_check_out);
        assert!(pool.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let pool = PoolConfig::builder()
            .max_connections(32)
            .max_idle(16)
            .min_idle(2)
            .idle_timeout(Duration::from_secs(120))
            .test_on_check_out(true)
            .build();

        assert_eq!(pool.max_connections, 32);
        assert_eq!(pool.max_idle, 16);
        assert_eq!(pool.min_idle, 2);
        assert_eq!(pool.idle_timeout, Duration::from_secs(120));
        assert!(pool.test_on_check_out);
    }

    #[test_case(8, 8, 0 => true ; "defaults")]
    #[test_case(1, 1, 1 => true ; "single connection")]
    #[test_case(0, 0, 0 => false ; "zero max connections")]
    #[test_case(8, 9, 0 => false ; "max idle above max connections")]
    #[test_case(8, 4, 5 => false ; "min idle above max idle")]
    fn bounds(max_connections: u32, max_idle: u32, min_idle: u32) -> bool {
        PoolConfig::builder()
            .max_connections(max_connections)
            .max_idle(max_idle)
            .min_idle(min_idle)
            .build()
            .validate()
            .is_ok()
    }
}
