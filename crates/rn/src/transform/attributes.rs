//! Attribute and event token renames.
//!
//! Both renames are context-free text substitutions applied everywhere in
//! the input: the attribute rename targets the assignment form
//! (`className=`), the event rename targets the bare token (`onClick`),
//! independent of tag context.

use crate::registry::RenameRule;

/// Rewrites every `web=` attribute token to `native=`.
pub fn rename_attribute(input: &str, rule: &RenameRule) -> String {
    input.replace(&format!("{}=", rule.web), &format!("{}=", rule.native))
}

/// Rewrites every bare occurrence of the event token.
pub fn rename_event(input: &str, rule: &RenameRule) -> String {
    input.replace(&rule.web, &rule.native)
}
