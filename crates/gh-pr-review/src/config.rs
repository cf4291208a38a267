//! Application configuration
//!
//! Configuration loaded from a `.gh-pr-review.toml` file. The diff engine
//! itself never reads configuration; the values here are passed to it as
//! explicit parameters.

use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-pr-review.toml";

/// Application configuration loaded from .gh-pr-review.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Hunk line count above which a file is suppressed as "large"
    #[serde(default = "default_large_file_line_threshold")]
    pub large_file_line_threshold: usize,

    /// Show every file, including generated and large ones
    #[serde(default)]
    pub show_all: bool,

    /// Where the rendered review page is written
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_large_file_line_threshold() -> usize {
    gh_diff_engine::DEFAULT_LARGE_FILE_LINE_THRESHOLD
}

fn default_output_path() -> String {
    env::temp_dir()
        .join("gh-pr-review.html")
        .to_string_lossy()
        .to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            large_file_line_threshold: default_large_file_line_threshold(),
            show_all: false,
            output_path: default_output_path(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

/// Load config file content from CWD first, then home directory
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}

/// Path to the config file in the home directory, if HOME is set
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
