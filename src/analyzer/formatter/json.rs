//! JSON formatter.

use crate::analyzer::types::AnalysisResult;

/// Format an analysis result as pretty-printed JSON.
pub fn format(result: &AnalysisResult) -> String {
    let mut output = serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}
