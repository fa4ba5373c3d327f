use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StacksConfig {
    /// Known items offered by search before any user suggestions.
    #[serde(default)]
    pub catalog: Vec<String>,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per key. Falls back to
    /// `$XDG_DATA_HOME/stacks` when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of autocomplete rows
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_suggestions: default_max_suggestions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// A swipe commits once it travels further than `row_width / threshold_divisor`.
    #[serde(default = "default_threshold_divisor")]
    pub threshold_divisor: f32,
    /// Duration of the fly-off and snap-back animations.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    /// Row width assumed by `stk swipe` when `--width` is not given.
    #[serde(default = "default_row_width")]
    pub row_width: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        SwipeConfig {
            threshold_divisor: default_threshold_divisor(),
            animation_ms: default_animation_ms(),
            row_width: default_row_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "warn" or "stacks=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_max_suggestions() -> usize {
    5
}

fn default_threshold_divisor() -> f32 {
    3.0
}

fn default_animation_ms() -> u64 {
    250
}

fn default_row_width() -> f32 {
    80.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: StacksConfig = toml::from_str("").unwrap();
        assert!(config.catalog.is_empty());
        assert!(config.store.dir.is_none());
        assert_eq!(config.search.max_suggestions, 5);
        assert_eq!(config.swipe.threshold_divisor, 3.0);
        assert_eq!(config.swipe.animation_ms, 250);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: StacksConfig = toml::from_str(
            r#"
catalog = ["Bulbasaur", "Ivysaur"]

[swipe]
threshold_divisor = 4.0

[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog, vec!["Bulbasaur", "Ivysaur"]);
        assert_eq!(config.swipe.threshold_divisor, 4.0);
        assert_eq!(config.swipe.animation_ms, 250);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
    }
}
