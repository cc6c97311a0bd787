use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtin;
use super::spec::{ModelConfig, ModelId};

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

/// Process-wide built-in catalog.
pub fn registry() -> &'static ModelRegistry {
    REGISTRY.get_or_init(builtin::catalog)
}

/// Ordered, immutable-after-construction model catalog.
///
/// Always holds at least one entry, so [`ModelRegistry::resolve`] cannot fail.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelConfig>,
    by_id: HashMap<ModelId, usize>,
}

impl ModelRegistry {
    /// Starts a catalog whose first entry, `default`, is the fallback.
    pub fn with_default(default: ModelConfig) -> Self {
        let mut registry = Self {
            models: Vec::new(),
            by_id: HashMap::new(),
        };
        registry.register(default);
        registry
    }

    pub fn builtins() -> Self {
        builtin::catalog()
    }

    pub fn with(mut self, model: ModelConfig) -> Self {
        self.register(model);
        self
    }

    fn register(&mut self, model: ModelConfig) {
        // Duplicate ids are an authoring error; lookups see the later entry.
        self.by_id.insert(model.id.clone(), self.models.len());
        self.models.push(model);
    }

    /// All models in display order.
    pub fn list(&self) -> &[ModelConfig] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn default_model(&self) -> &ModelConfig {
        &self.models[0]
    }

    pub fn get(&self, id: &str) -> Option<&ModelConfig> {
        self.by_id.get(id).map(|&idx| &self.models[idx])
    }

    /// Resolves a client-supplied id, falling back to the default model when
    /// the id is empty or unknown.
    pub fn resolve(&self, candidate: Option<&str>) -> &ModelConfig {
        let candidate = candidate.unwrap_or_default();
        if candidate.is_empty() {
            return self.default_model();
        }

        match self.get(candidate) {
            Some(model) => model,
            None => {
                let fallback = self.default_model();
                tracing::debug!(
                    requested = candidate,
                    resolved = %fallback.id,
                    "unknown model id, using default"
                );
                fallback
            }
        }
    }
}
