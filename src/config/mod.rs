//! Configuration loading for the analyzer CLI.
//!
//! Config files are YAML:
//!
//! ```yaml
//! profile: baseline
//! format: json
//! ```

pub mod types;

pub use types::AnalyzerConfig;

use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// File names probed in the working directory by [`load_from_default`].
pub const DEFAULT_CONFIG_FILES: &[&str] = &[".pss-analyzer.yaml", ".pss-analyzer.yml"];

/// Load configuration from a YAML string.
pub fn load_from_str(content: &str) -> Result<AnalyzerConfig, ConfigError> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))
}

/// Load configuration from a YAML file.
pub fn load_from_file(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&content)
}

/// Try the default config locations in `dir`. Unreadable or invalid files
/// are logged and skipped.
pub fn load_from_default(dir: &Path) -> Option<AnalyzerConfig> {
    for filename in DEFAULT_CONFIG_FILES {
        let path = dir.join(filename);
        if !path.exists() {
            continue;
        }
        match load_from_file(&path) {
            Ok(config) => return Some(config),
            Err(e) => log::warn!("ignoring {}: {}", path.display(), e),
        }
    }
    None
}

/// Load the explicit config file if one was given, otherwise the default
/// locations in the working directory, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    Ok(load_from_default(&cwd).unwrap_or_default())
}
