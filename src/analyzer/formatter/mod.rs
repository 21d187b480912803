//! Output formatters for analysis results.

pub mod json;
pub mod plain;

use crate::analyzer::types::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Plain,
    /// JSON output (the AnalysisResult wire shape).
    Json,
    /// GitHub Actions annotations.
    Github,
}

/// Format an analysis result to a string.
pub fn format_result_to_string(result: &AnalysisResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain::format(result),
        OutputFormat::Json => json::format(result),
        OutputFormat::Github => plain::format_github(result),
    }
}

/// Format and print an analysis result.
pub fn format_result(result: &AnalysisResult, format: OutputFormat) {
    print!("{}", format_result_to_string(result, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::ValueEnum;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("GITHUB", true), Ok(OutputFormat::Github));
        assert!(OutputFormat::from_str("sarif", true).is_err());

        let format: OutputFormat = serde_yaml::from_str("plain").unwrap();
        assert_eq!(format, OutputFormat::Plain);
    }
}
