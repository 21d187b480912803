use crate::analyzer::formatter::OutputFormat;
use crate::analyzer::types::Profile;
use serde::{Deserialize, Serialize};

/// Analyzer configuration.
///
/// Only picks the defaults handed to the analyzer; the analysis itself never
/// reads configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Profile used when none is given on the command line.
    #[serde(default)]
    pub profile: Profile,

    /// Report format used when none is given on the command line.
    #[serde(default)]
    pub format: OutputFormat,
}

impl AnalyzerConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
