#![deny(missing_docs)]
//! web2native React Native engine: mapping registry, transform passes, and
//! the conversion orchestrator.

/// Conversion orchestrator.
pub mod convert;
/// Mapping registry for element and attribute substitutions.
pub mod registry;
/// Transform passes (elements, attributes, style, reformat).
pub mod transform;

pub use convert::{convert, convert_with_registry};
pub use registry::{ElementMapping, RegistryConfig, RenameRule, default_native_registry};
pub use web2native_core::ConvertError;
