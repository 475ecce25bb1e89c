//! Inline style string to style object conversion.
//!
//! Rewrites `style="background-color: red; padding: 4px;"` into
//! `style={{backgroundColor: 'red', padding: '4px'}}`. Values stay quoted
//! string literals; no unit or type inference happens.

use std::fmt::Write as _;

use web2native_core::style::{camel_case, parse_declarations};

/// Converts the first `style="..."` attribute to `style={{...}}`.
///
/// Only the first occurrence in the whole input is converted; later style
/// attributes stay as literal `style="..."` text (single-shot, not a loop).
/// Text without a `style="..."` attribute passes through unchanged.
pub fn convert_first_style_attribute(input: &str) -> String {
    const OPEN: &str = "style=\"";

    let Some(start) = input.find(OPEN) else {
        return input.to_string();
    };
    let value_start = start + OPEN.len();
    let Some(quote) = input[value_start..].find('"') else {
        // Unterminated attribute value; leave the text alone.
        return input.to_string();
    };

    let value = &input[value_start..value_start + quote];
    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..start]);
    out.push_str("style={{");
    out.push_str(&style_object_body(value));
    out.push_str("}}");
    out.push_str(&input[value_start + quote + 1..]);
    out
}

/// Renders declarations as `camelProp: 'value'` pairs joined by `, `.
fn style_object_body(css: &str) -> String {
    let mut body = String::new();
    for declaration in parse_declarations(css) {
        if !body.is_empty() {
            body.push_str(", ");
        }
        write!(
            body,
            "{}: '{}'",
            camel_case(&declaration.property),
            declaration.value
        )
        .ok();
    }
    body
}
