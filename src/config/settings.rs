//! Server settings resolved from a [`ConfigProvider`].

use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;

use super::provider::{ConfigProvider, ConfigProviderExt};
use super::{ConfigError, ConfigResult, EnvConfigProvider};
use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Everything the server binary needs at startup.
///
/// A missing API key is not a startup error: requests fail with an upstream
/// error instead, so the UI can still list models and file types.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub timeout: Duration,
    pub bind_address: SocketAddr,
    pub max_upload_bytes: usize,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
            json: false,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            log: LogSettings::default(),
        }
    }
}

impl ServerSettings {
    /// Loads settings from process environment variables.
    pub async fn from_env() -> ConfigResult<Self> {
        Self::load(&EnvConfigProvider::new()).await
    }

    pub async fn load(provider: &dyn ConfigProvider) -> ConfigResult<Self> {
        let defaults = Self::default();

        let api_key = provider.get_raw("google.api.key").await?.map(SecretString::from);

        let base_url = provider
            .get_raw("gemini.base.url")
            .await?
            .unwrap_or(defaults.base_url);

        let timeout = provider
            .get_parsed::<u64>("gemini.timeout.secs")
            .await?
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let bind_address = provider
            .get_parsed::<SocketAddr>("bind.address")
            .await?
            .unwrap_or(defaults.bind_address);

        let max_upload_mb = provider
            .get_parsed::<usize>("max.upload.mb")
            .await?
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);
        if max_upload_mb == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max.upload.mb".into(),
                message: "must be at least 1".into(),
            });
        }
        let max_upload_bytes = max_upload_mb.checked_mul(1024 * 1024).ok_or_else(|| {
            ConfigError::InvalidValue {
                key: "max.upload.mb".into(),
                message: format!("{max_upload_mb} MB overflows the byte limit"),
            }
        })?;

        let log = LogSettings {
            level: provider
                .get_raw("log.level")
                .await?
                .unwrap_or(defaults.log.level),
            json: provider
                .get_parsed::<bool>("log.json")
                .await?
                .unwrap_or(defaults.log.json),
        };

        tracing::debug!(
            provider = provider.name(),
            has_api_key = api_key.is_some(),
            %base_url,
            %bind_address,
            max_upload_mb,
            "settings loaded"
        );

        Ok(Self {
            api_key,
            base_url,
            timeout,
            bind_address,
            max_upload_bytes,
            log,
        })
    }
}
