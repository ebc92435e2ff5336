//! Configuration management: defaults, validation, loading from environment.

pub mod app_config;
pub mod validation;

pub use app_config::AppConfig;

/// Default bind address.
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_SERVER_PORT: u16 = 3000;
