#![deny(missing_docs)]
//! web2native core: tag line classification, inline style parsing, and the
//! text transform pipeline.

/// Core error types.
pub mod error;
/// Text transform pipeline seam.
pub mod pipeline;
/// Inline style string parsing utilities.
pub mod style;
/// Markup tag line classification utilities.
pub mod tag;

pub use error::ConvertError;
pub use pipeline::{TextTransform, TransformPipeline};
pub use style::{StyleDeclaration, camel_case, parse_declarations};
pub use tag::{TagLine, classify_line, is_name_boundary};
