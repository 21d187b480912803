//! Plain text formatter.

use crate::analyzer::types::AnalysisResult;

/// Format an analysis result as plain text.
///
/// Locations are shown relative to the document root, so a Deployment issue
/// reads `spec.template.spec.containers[0]...`.
pub fn format(result: &AnalysisResult) -> String {
    let mut output = String::new();

    for issue in &result.issues {
        output.push_str(&format!(
            "[{}] {} ({}) {} - {}\n",
            issue.level,
            issue.id,
            issue.resource_label(),
            issue.document_path(),
            issue.message,
        ));

        output.push_str("  Recommended patch:\n");
        for line in issue.recommended_patch.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }

    if result.issues.is_empty() {
        output.push_str(&format!(
            "No PSS violations found for profile {}.\n",
            result.profile
        ));
    } else {
        output.push_str(&format!(
            "\nFound {} issue(s) for profile {}.\n",
            result.issue_count, result.profile
        ));
    }

    output
}

/// Format for GitHub Actions annotations.
pub fn format_github(result: &AnalysisResult) -> String {
    let mut output = String::new();

    for issue in &result.issues {
        output.push_str(&format!(
            "::{} title={}::{} {}: {}\n",
            issue.level,
            issue.id,
            issue.resource_label(),
            issue.document_path(),
            issue.message,
        ));
    }

    output
}
