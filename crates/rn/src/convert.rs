//! Conversion orchestrator.
//!
//! Composes the transform passes into a single pure call: import header
//! prepend, element rewriting, style object conversion, attribute/event
//! renames, then reformatting over the combined text.
//!
//! The style converter runs before the attribute rename so that only
//! `style="..."` attributes present in the source are converted to objects;
//! a renamed `className` value survives as literal `style="..."` text and is
//! never re-parsed.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use web2native_core::ConvertError;
use web2native_core::pipeline::{TextTransform, TransformPipeline};

use crate::registry::{ElementMapping, RegistryConfig, RenameRule, default_native_registry};
use crate::transform::{attributes, elements, reformat, style};

/// Process-wide default registry, built once on first use.
static DEFAULT_REGISTRY: Lazy<RegistryConfig> = Lazy::new(default_native_registry);

/// Converts web component source text to React Native source text.
///
/// The only failure is [`ConvertError::EmptyInput`] for empty or
/// all-whitespace input; malformed markup passes through the textual
/// substitutions best-effort.
pub fn convert(input: &str) -> Result<String, ConvertError> {
    convert_with_registry(input, &DEFAULT_REGISTRY)
}

/// Converts using a caller-supplied registry.
pub fn convert_with_registry(
    input: &str,
    registry: &RegistryConfig,
) -> Result<String, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let source = format!("{}\n\n{}", registry.import_statement(), input);
    log::debug!(
        "converting {} bytes with {} element mappings",
        source.len(),
        registry.elements.len()
    );

    Ok(build_pipeline(registry).run(&source))
}

/// Element rewriting pass.
struct ElementPass {
    mappings: Vec<ElementMapping>,
}

impl TextTransform for ElementPass {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(elements::rewrite_elements(input, &self.mappings))
    }
}

/// Single-shot style object conversion pass.
struct StylePass;

impl TextTransform for StylePass {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(style::convert_first_style_attribute(input))
    }
}

/// Attribute and event rename pass.
struct RenamePass {
    style_attribute: RenameRule,
    press_event: RenameRule,
}

impl TextTransform for RenamePass {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let renamed = attributes::rename_attribute(input, &self.style_attribute);
        Cow::Owned(attributes::rename_event(&renamed, &self.press_event))
    }
}

/// Reindentation pass.
struct ReformatPass;

impl TextTransform for ReformatPass {
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(reformat::reformat(input))
    }
}

/// Assembles the fixed pass order: elements, style object, renames, reformat.
fn build_pipeline(registry: &RegistryConfig) -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.add_transform(ElementPass {
        mappings: registry.elements.clone(),
    });
    pipeline.add_transform(StylePass);
    pipeline.add_transform(RenamePass {
        style_attribute: registry.style_attribute.clone(),
        press_event: registry.press_event.clone(),
    });
    pipeline.add_transform(ReformatPass);
    pipeline
}
