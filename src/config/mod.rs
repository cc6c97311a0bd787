//! Pluggable configuration providers and server settings.
//!
//! ```rust,no_run
//! use gemini_chat::config::{
//!     CompositeConfigProvider, EnvConfigProvider, MemoryConfigProvider, ServerSettings,
//! };
//!
//! # async fn example() -> Result<(), gemini_chat::ConfigError> {
//! let provider = CompositeConfigProvider::new()
//!     .with(EnvConfigProvider::new())
//!     .with(MemoryConfigProvider::new().value("bind.address", "0.0.0.0:8080"));
//! let settings = ServerSettings::load(&provider).await?;
//! # Ok(())
//! # }
//! ```

pub mod composite;
pub mod env;
pub mod memory;
pub mod provider;
pub mod settings;

pub use composite::CompositeConfigProvider;
pub use env::EnvConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::{ConfigProvider, ConfigProviderExt};
pub use settings::{LogSettings, ServerSettings};

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Value present but unusable
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The key with invalid value
        key: String,
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
