use shared_types::{AppConfig, CollapsibleConfig, GalleryConfig, SectionConfig, StyleMap};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read and parse `config.toml` once; later calls return the cached value.
///
/// A missing or unparseable file falls back to the default configuration.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}), using built-in gallery");
            AppConfig::default()
        }
    })
}

fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            tracing::debug!(sections = config.gallery.sections.len(), "loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using defaults");
            AppConfig::default()
        }
    }
}

/// Sections to render: the configured ones, or a built-in showcase when
/// the config defines none.
pub fn gallery_sections(gallery: &GalleryConfig) -> Vec<SectionConfig> {
    if gallery.sections.is_empty() {
        default_sections()
    } else {
        gallery.sections.clone()
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            title: "Click me to open/close the content".to_string(),
            body: "This is the content".to_string(),
            collapsible: CollapsibleConfig {
                style: StyleMap::new()
                    .with("border", "1px solid")
                    .with("padding", "15px"),
                content_style: StyleMap::new().with("padding-top", "15px"),
                ..Default::default()
            },
        },
        SectionConfig {
            title: "Starts closed".to_string(),
            body: "Opening this panel measures its content and animates to that height."
                .to_string(),
            collapsible: CollapsibleConfig {
                initially_open: false,
                ..Default::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(parse_config("gallery = ["), AppConfig::default());
    }

    #[test]
    fn valid_toml_is_used() {
        let config = parse_config(
            r#"
            [gallery]
            heading = "FAQ"

            [[gallery.sections]]
            title = "Shipping"
            body = "Two to five days."
            "#,
        );
        assert_eq!(config.gallery.heading, "FAQ");
        assert_eq!(config.gallery.sections.len(), 1);
    }

    #[test]
    fn empty_gallery_uses_builtin_sections() {
        let sections = gallery_sections(&GalleryConfig::default());
        assert_eq!(sections.len(), 2);
        assert!(sections[0].collapsible.initially_open);
        assert!(!sections[1].collapsible.initially_open);
    }

    #[test]
    fn configured_sections_win() {
        let gallery = GalleryConfig {
            sections: vec![SectionConfig {
                title: "Only".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let sections = gallery_sections(&gallery);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Only");
    }
}
