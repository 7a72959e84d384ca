use crate::style::StyleMap;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Configuration of a single collapsible panel.
///
/// Every field has a default, so `[sections.collapsible]` may be omitted or
/// partially filled in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollapsibleConfig {
    #[serde(default = "default_true")]
    pub initially_open: bool,
    /// External open intent. When set it overrides `initially_open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub title_style: StyleMap,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub content_style: StyleMap,
}

impl Default for CollapsibleConfig {
    fn default() -> Self {
        Self {
            initially_open: true,
            open: None,
            style: StyleMap::default(),
            title_style: StyleMap::default(),
            content_style: StyleMap::default(),
        }
    }
}

/// One panel shown in the demo gallery.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SectionConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub collapsible: CollapsibleConfig,
}

/// Demo gallery contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "GalleryConfig::default_heading")]
    pub heading: String,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

impl GalleryConfig {
    fn default_heading() -> String {
        "Components".to_string()
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heading: Self::default_heading(),
            sections: Vec::new(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub gallery: GalleryConfig,
}
