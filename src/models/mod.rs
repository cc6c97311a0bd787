//! Model catalog and identifier resolution.

mod builtin;
mod registry;
mod spec;

pub use builtin::DEFAULT_MODEL_ID;
pub use registry::{ModelRegistry, registry};
pub use spec::{ModelConfig, ModelId};
