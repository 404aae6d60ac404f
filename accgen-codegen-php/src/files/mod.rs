//! Generated PHP files.

mod key_registry;
mod methods_trait;

pub use key_registry::KeyRegistryClass;
pub use methods_trait::MethodsTrait;
