//! Transform passes over source text.
//!
//! - `elements`: web element name to native component rewriting.
//! - `attributes`: className/onClick token renames.
//! - `style`: inline style string to style object conversion.
//! - `reformat`: one-tag-per-line reindentation.

/// className/onClick token renames.
pub mod attributes;
/// Element name rewriting.
pub mod elements;
/// One-tag-per-line reindentation.
pub mod reformat;
/// Inline style string to style object conversion.
pub mod style;
