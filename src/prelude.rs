//! Prelude module for convenient imports.
//!
//! ```rust
//! use strata_client_config::prelude::*;
//! ```

pub use crate::{
    config::{
        AcceptAllHostnames, ClientConfig, ClientConfigBuilder, HostnameVerifier, PoolConfig,
        PoolingConfigBuilder, SslParameters, TlsConfigBuilder, TlsSocketFactory, TlsStream,
        TlsVersion,
    },
    error::{ConfigError, Result},
    ident::default_client_name,
};
