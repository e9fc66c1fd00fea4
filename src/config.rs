use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub catalog: CatalogConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClassifierConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Also request a category for items that carry a description.
    pub categorize: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in demo catalog is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Item ids whose reviews are shown expanded.
    pub expanded: Vec<u32>,
    pub expand_all: bool,
    pub format: OutputFormat,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://is450-sentiment-analysis-392732146202.asia-southeast1.run.app".into(),
            timeout_seconds: 30,
            categorize: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    tracing::info!("Config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert!(!config.classifier.enabled);
        assert_eq!(config.classifier.timeout_seconds, 30);
        assert!(config.catalog.path.is_none());
        assert!(config.display.expanded.is_empty());
        assert_eq!(config.display.format, OutputFormat::Table);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::parse(
            r#"
            [classifier]
            enabled = true
            base_url = "http://localhost:8000"

            [display]
            expanded = [1, 4]
            format = "json"
            "#,
        )
        .unwrap();
        assert!(config.classifier.enabled);
        assert_eq!(config.classifier.base_url, "http://localhost:8000");
        assert_eq!(config.classifier.timeout_seconds, 30);
        assert!(!config.classifier.categorize);
        assert_eq!(config.display.expanded, vec![1, 4]);
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Config::parse("[display]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load("/nonexistent/reviewrank.toml");
        assert!(config.catalog.path.is_none());
    }
}
