//! Element name rewriting.
//!
//! Rewrites `<name ...>` / `</name>` pairs for every mapped element by plain
//! substring scanning. An opening match requires the name to be followed by
//! whitespace or `>`, so a mapped name never matches inside a longer
//! identifier (`<h1` stays put in `<h1x>`), and `<div/>` written without a
//! space is left alone.

use crate::registry::ElementMapping;
use web2native_core::tag::is_name_boundary;

/// Applies every element mapping, in declaration order.
pub fn rewrite_elements(input: &str, mappings: &[ElementMapping]) -> String {
    let mut text = input.to_string();
    for mapping in mappings {
        text = rewrite_opening_tags(&text, &mapping.web, &mapping.native);
        text = text.replace(
            &format!("</{}>", mapping.web),
            &format!("</{}>", mapping.native),
        );
    }
    text
}

/// Rewrites `<web` to `<native` at whole-token boundaries.
fn rewrite_opening_tags(input: &str, web: &str, native: &str) -> String {
    let needle = format!("<{web}");
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(&needle) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + needle.len()..];
        match after.chars().next() {
            Some(c) if is_name_boundary(c) => {
                out.push('<');
                out.push_str(native);
            }
            // Name continues (or the text ends): not a whole tag name.
            _ => out.push_str(&needle),
        }
        rest = after;
    }

    out.push_str(rest);
    out
}
