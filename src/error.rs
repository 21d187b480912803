use thiserror::Error;

/// Errors surfaced by the analyzer and its command-line front end.
#[derive(Debug, Error)]
pub enum PssError {
    /// The requested profile is not `baseline` or `restricted`.
    #[error("Invalid profile '{0}': expected 'baseline' or 'restricted'")]
    InvalidProfile(String),

    /// The manifest is not valid YAML.
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tool(#[from] crate::tool::PssHelperError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParsingFailed(String),
}

pub type Result<T> = std::result::Result<T, PssError>;
