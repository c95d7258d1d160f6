use std::path::PathBuf;

use serde::Deserialize;

use crate::preview::PreviewStyle;
use crate::snippets::table::TableFormat;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize, Clone)]
pub struct PreviewConfig {
    #[serde(default = "default_mark_background")]
    pub highlight_background: String,
    #[serde(default = "default_mark_foreground")]
    pub highlight_foreground: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            highlight_background: default_mark_background(),
            highlight_foreground: default_mark_foreground(),
        }
    }
}

fn default_mark_background() -> String {
    "yellow".to_string()
}

fn default_mark_foreground() -> String {
    "black".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TableConfig {
    #[serde(default)]
    pub format: TableFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration after path expansion, ready for use.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub preview: PreviewStyle,
    pub table_format: TableFormat,
    pub logging: LoggingConfig,
}
