//! In-Memory Configuration Provider
//!
//! Useful for tests and code-defined configuration.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::ConfigResult;
use super::provider::ConfigProvider;

/// In-memory configuration provider
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value during construction
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.get_mut().insert(key.into(), value.into());
        self
    }

    /// Insert a value after construction
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data.write().await.insert(key.into(), value.into());
    }
}

#[async_trait::async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_provider() {
        let provider = MemoryConfigProvider::new().value("log.level", "debug");
        assert_eq!(provider.get_raw("log.level").await.unwrap().as_deref(), Some("debug"));

        provider.insert("log.json", "true").await;
        assert_eq!(provider.get_raw("log.json").await.unwrap().as_deref(), Some("true"));
        assert_eq!(provider.get_raw("missing").await.unwrap(), None);
    }
}
