//! Client identity string for server-side connection listings.

use std::sync::OnceLock;

/// Library name used in the default client name.
const LIB_NAME: &str = "strata-rust";

/// Library version from Cargo.toml.
const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cached default client name (computed once on first access).
static DEFAULT_CLIENT_NAME: OnceLock<String> = OnceLock::new();

/// Returns the library's default client name.
///
/// Format: `strata-rust/0.1.0`. A server-side connection listing shows
/// this name when the caller opts in:
///
/// ```rust
/// use strata_client_config::{ClientConfig, default_client_name};
///
/// let config = ClientConfig::builder()
///     .client_name(default_client_name())
///     .build()?;
///
/// assert_eq!(config.client_name(), Some(default_client_name()));
/// # Ok::<(), strata_client_config::ConfigError>(())
/// ```
///
/// It is never applied implicitly: a configuration built without
/// `client_name()` has no name.
pub fn default_client_name() -> &'static str {
    DEFAULT_CLIENT_NAME.get_or_init(|| format!("{}/{}", LIB_NAME, LIB_VERSION))
}
