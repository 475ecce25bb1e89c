//! One-tag-per-line reindentation.
//!
//! Pure text operation over the tag boundary characters `<`, `>`, `/`:
//! explode the markup so every tag sits on its own line, drop blank lines,
//! then walk the lines with a two-space indent tracked by nesting depth.
//! Attributes are never parsed.

use web2native_core::tag::{TagLine, classify_line};

/// Indent unit per nesting level.
const INDENT: &str = "  ";

/// Reformats markup to one tag per line, indented by nesting depth.
///
/// Closing tags out-dent before they are emitted; opening tags indent the
/// lines after them; self-closing tags change nothing. The depth counter may
/// go negative on over-closed input; the rendered prefix clamps at zero and
/// later opens recover from the base level.
pub fn reformat(input: &str) -> String {
    let mut depth: i32 = 0;
    let mut lines: Vec<String> = Vec::new();

    for raw in explode_tags(input).lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let tag = classify_line(line);
        if matches!(tag, TagLine::Closing) {
            depth -= 1;
        }

        let mut rendered = INDENT.repeat(depth.max(0) as usize);
        rendered.push_str(line);
        lines.push(rendered);

        if matches!(
            tag,
            TagLine::Opening {
                self_closing: false
            }
        ) {
            depth += 1;
        }
    }

    lines.join("\n")
}

/// Inserts a newline before every `<` and after every `>`.
fn explode_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for c in input.chars() {
        match c {
            '<' => {
                out.push('\n');
                out.push('<');
            }
            '>' => {
                out.push('>');
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    out
}
