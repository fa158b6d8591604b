use scribe_editor::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "scribe.config.json";

/// Scribe configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Format used by `export` when `--to` is not given
    #[serde(default = "default_export_format")]
    pub default_export_format: ExportFormat,

    /// Directory exported files are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "scribe_editor=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_export_format() -> ExportFormat {
    ExportFormat::Txt
}

fn default_export_dir() -> String {
    "exports".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the export directory
    pub fn get_export_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.export_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_export_format: default_export_format(),
            export_dir: default_export_dir(),
            log_level: default_log_level(),
        }
    }
}
