//! Configuration types for the Strata client.
//!
//! This module provides:
//! - [`ClientConfig`]: immutable snapshot of connection parameters
//! - [`ClientConfigBuilder`]: fluent accumulator with scoped TLS and
//!   pooling blocks
//! - [`PoolConfig`]: connection pool sizing
//! - [`SslParameters`] and the TLS capability traits

mod builder;
mod client;
mod pool;
mod tls;

pub use builder::{ClientConfigBuilder, PoolingConfigBuilder, TlsConfigBuilder};
pub use client::{ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
pub use pool::PoolConfig;
pub use tls::{
    AcceptAllHostnames, HostnameVerifier, SslParameters, TlsSocketFactory, TlsStream, TlsVersion,
};
