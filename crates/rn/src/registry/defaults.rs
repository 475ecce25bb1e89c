//! Default registry configuration for React Native output.
//!
//! This module provides the fixed web to React Native mapping table used
//! when no custom registry is supplied: block and list containers flatten to
//! `View`, text-bearing elements flatten to `Text`.

use super::types::{ElementMapping, RegistryConfig, RenameRule};

/// Creates the default web to React Native registry.
///
/// Element mappings are listed in substitution order; the order is fixed and
/// observable, though the default targets are disjoint from the sources so
/// no entry can rewrite another's output.
///
/// # Example
///
/// ```
/// use web2native_rn::registry::defaults::default_native_registry;
///
/// let registry = default_native_registry();
/// assert_eq!(registry.native_for("div"), Some("View"));
/// assert!(registry.is_mapped_element("h3"));
/// ```
pub fn default_native_registry() -> RegistryConfig {
    let elements = [
        ("div", "View"),
        ("p", "Text"),
        ("span", "Text"),
        ("button", "TouchableOpacity"),
        ("input", "TextInput"),
        ("img", "Image"),
        ("ul", "View"),
        ("li", "View"),
        ("h1", "Text"),
        ("h2", "Text"),
        ("h3", "Text"),
        ("h4", "Text"),
        ("h5", "Text"),
        ("h6", "Text"),
    ]
    .into_iter()
    .map(|(web, native)| ElementMapping {
        web: web.to_string(),
        native: native.to_string(),
    })
    .collect();

    RegistryConfig {
        elements,
        style_attribute: RenameRule {
            web: "className".to_string(),
            native: "style".to_string(),
        },
        press_event: RenameRule {
            web: "onClick".to_string(),
            native: "onPress".to_string(),
        },
        import_module: "react-native".to_string(),
        import_components: ["View", "Text", "TouchableOpacity", "TextInput", "Image"]
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
