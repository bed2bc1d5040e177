//! TLS capability types carried by the client configuration.
//!
//! The configuration stores these and forwards them to the connection
//! layer; it never interprets them and never performs a handshake itself.

use std::fmt;
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// TLS protocol versions the Strata client can negotiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TlsVersion {
    /// TLS 1.2.
    Tls12,
    /// TLS 1.3.
    Tls13,
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsVersion::Tls12 => f.write_str("TLSv1.2"),
            TlsVersion::Tls13 => f.write_str("TLSv1.3"),
        }
    }
}

/// TLS parameter bundle applied when a secure connection is established.
///
/// All fields are optional restrictions; an empty bundle leaves every
/// decision to the connector's defaults.
///
/// ## Example
///
/// ```rust
/// use strata_client_config::{SslParameters, TlsVersion};
///
/// let parameters = SslParameters::builder()
///     .alpn_protocols(vec!["strata/1".into()])
///     .min_protocol_version(TlsVersion::Tls12)
///     .server_name("cache.internal")
///     .build();
///
/// assert!(parameters.version_range_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct SslParameters {
    /// ALPN protocols offered during the handshake, in preference order.
    #[builder(default)]
    pub alpn_protocols: Vec<String>,

    /// Cipher suite names the handshake is restricted to.
    ///
    /// Empty means the connector's default suite list.
    #[builder(default)]
    pub cipher_suites: Vec<String>,

    /// Lowest protocol version accepted.
    pub min_protocol_version: Option<TlsVersion>,

    /// Highest protocol version accepted.
    pub max_protocol_version: Option<TlsVersion>,

    /// Overrides the SNI name derived from the connection host.
    #[builder(into)]
    pub server_name: Option<String>,
}

impl SslParameters {
    /// Returns `true` if the configured protocol version range is
    /// satisfiable.
    ///
    /// A range is unsatisfiable only when both bounds are set and the
    /// lower bound is above the upper bound.
    pub fn version_range_valid(&self) -> bool {
        match (self.min_protocol_version, self.max_protocol_version) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Returns `true` if a cipher suite restriction is configured.
    pub fn restricts_cipher_suites(&self) -> bool {
        !self.cipher_suites.is_empty()
    }
}

/// Hostname check applied against the peer certificate during the TLS
/// handshake.
///
/// This is an opaque capability: the configuration stores it and the
/// connection layer invokes it. Implementations must be callable from any
/// thread because a built [`ClientConfig`](crate::ClientConfig) is shared
/// freely.
pub trait HostnameVerifier: fmt::Debug + Send + Sync {
    /// Returns `true` if `hostname` is acceptable for the presented
    /// session.
    fn verify(&self, hostname: &str) -> bool;
}

/// Verifier that accepts every hostname.
///
/// **WARNING**: This disables hostname verification entirely and makes
/// connections vulnerable to man-in-the-middle attacks. Only use this for
/// local development with self-signed certificates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllHostnames;

impl HostnameVerifier for AcceptAllHostnames {
    fn verify(&self, _hostname: &str) -> bool {
        true
    }
}

/// Byte stream produced by a [`TlsSocketFactory`].
pub trait TlsStream: Read + Write + Send {}

impl<T> TlsStream for T where T: Read + Write + Send {}

/// Factory that wraps an established TCP stream in a TLS session.
///
/// Implemented by the connection layer (or by tests); the configuration
/// only carries the capability and forwards it at connect time.
pub trait TlsSocketFactory: fmt::Debug + Send + Sync {
    /// Wraps `stream` in a TLS session negotiated for `server_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handshake fails.
    fn wrap(&self, stream: TcpStream, server_name: &str) -> io::Result<Box<dyn TlsStream>>;
}
