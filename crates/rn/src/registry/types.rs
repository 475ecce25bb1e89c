//! Registry type definitions for element and attribute mappings.

use serde::{Deserialize, Serialize};

/// Configuration for the conversion registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Element mappings, applied in declaration order.
    pub elements: Vec<ElementMapping>,
    /// Style-holding attribute rename (`className` to `style`).
    pub style_attribute: RenameRule,
    /// Click-to-press event rename (`onClick` to `onPress`).
    pub press_event: RenameRule,
    /// Module the import header pulls components from.
    pub import_module: String,
    /// Component names emitted in the import header, in order.
    pub import_components: Vec<String>,
}

/// A single web element to native component mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMapping {
    /// Web tag name (e.g., "div").
    pub web: String,
    /// Native component name (e.g., "View").
    pub native: String,
}

/// A token rename applied across the whole text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenameRule {
    /// Token as written in web source (e.g., "onClick").
    pub web: String,
    /// Replacement token (e.g., "onPress").
    pub native: String,
}

impl RegistryConfig {
    /// Parses a registry configuration from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Native component name for a web element, if mapped.
    pub fn native_for(&self, web: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|m| m.web == web)
            .map(|m| m.native.as_str())
    }

    /// Check whether a web element name is mapped.
    pub fn is_mapped_element(&self, web: &str) -> bool {
        self.elements.iter().any(|m| m.web == web)
    }

    /// Import statement pulling the registry's components from its module.
    pub fn import_statement(&self) -> String {
        format!(
            "import {{ {} }} from '{}';",
            self.import_components.join(", "),
            self.import_module
        )
    }
}
