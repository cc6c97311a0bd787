use super::registry::ModelRegistry;
use super::spec::ModelConfig;

pub const DEFAULT_MODEL_ID: &str = "gemini-2.0-flash";

/// Catalog order is display order; the first entry is the default.
pub fn catalog() -> ModelRegistry {
    ModelRegistry::with_default(gemini_2_0_flash())
        .with(gemini_2_5_pro())
        .with(gemini_2_5_flash())
}

fn gemini_2_0_flash() -> ModelConfig {
    ModelConfig::new(
        DEFAULT_MODEL_ID,
        "Gemini 2.0 Flash",
        "Next-generation features, speed and realtime streaming.",
    )
}

fn gemini_2_5_pro() -> ModelConfig {
    ModelConfig::new(
        "gemini-2.5-pro",
        "Gemini 2.5 Pro",
        "Stronger thinking and reasoning, multimodal understanding and advanced coding.",
    )
}

fn gemini_2_5_flash() -> ModelConfig {
    ModelConfig::new(
        "gemini-2.5-flash",
        "Gemini 2.5 Flash",
        "Adaptive thinking at a lower cost.",
    )
}
