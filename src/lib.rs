//! # Strata Client Configuration
//!
//! Connection configuration for the Strata key-value store client.
//!
//! This crate defines the immutable [`ClientConfig`] snapshot and the
//! builder family that assembles it. A connection factory (the `strata`
//! connector crates) consumes the snapshot to establish actual
//! connections; host and port are supplied to the factory separately and
//! are not part of this object.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use strata_client_config::{AcceptAllHostnames, ClientConfig, PoolConfig, SslParameters};
//!
//! fn main() -> Result<(), strata_client_config::ConfigError> {
//!     let config = ClientConfig::builder()
//!         .client_name("orders-api")
//!         .connect_timeout(Duration::from_secs(5))
//!         .read_timeout(Duration::from_secs(2))
//!         .use_ssl()
//!         .hostname_verifier(Arc::new(AcceptAllHostnames))
//!         .ssl_parameters(SslParameters::builder().server_name("cache.internal").build())
//!         .and()
//!         .use_pooling()
//!         .pool_config(PoolConfig::builder().max_connections(16).build())
//!         .build()?;
//!
//!     assert_eq!(config.client_name(), Some("orders-api"));
//!     assert!(config.ssl_enabled());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Snapshot semantics**: `build()` freezes the accumulated state once;
//!   the resulting [`ClientConfig`] is immutable and safe to share across
//!   threads.
//! - **Scoped blocks**: TLS settings live behind
//!   [`use_ssl()`](ClientConfigBuilder::use_ssl) and pool settings behind
//!   [`use_pooling()`](ClientConfigBuilder::use_pooling); `and()` returns
//!   to the parent builder.
//! - **Defaults**: 2 second connect and read timeouts, pooling on with a
//!   standard [`PoolConfig`], everything else absent until set.
//!
//! ## Features
//!
//! - `tracing`: emit a `tracing` debug event when a configuration is built

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod ident;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use config::{
    AcceptAllHostnames, ClientConfig, ClientConfigBuilder, HostnameVerifier, PoolConfig,
    PoolingConfigBuilder, SslParameters, TlsConfigBuilder, TlsSocketFactory, TlsStream,
    TlsVersion, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT,
};
pub use error::{ConfigError, Result};
pub use ident::default_client_name;
