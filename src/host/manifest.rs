use serde::Serialize;

use crate::host::{NodeDescriptor, NodeRegistry, registry};

pub const PLUGIN_NAME: &str = "File Format Converter";
pub const PLUGIN_DESCRIPTION: &str = "A comprehensive file format conversion plugin supporting SVG to image \
    conversion and image to icon formats (ICO/ICNS) with high-quality output and multiple size variants";
pub const PLUGIN_TAGS: [&str; 4] = ["svg", "image", "icon", "conversion"];

/// Plugin metadata the host reads when loading the plugin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Project git URL
    pub repository: String,
    pub nodes: Vec<NodeDescriptor>,
}

impl PluginManifest {
    pub fn for_registry(registry: &NodeRegistry) -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: PLUGIN_DESCRIPTION.to_string(),
            tags: PLUGIN_TAGS.iter().map(|t| t.to_string()).collect(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
            nodes: registry.descriptors(),
        }
    }
}

/// Manifest of the process-wide registry.
pub fn manifest() -> PluginManifest {
    PluginManifest::for_registry(registry())
}
