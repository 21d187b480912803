//! Manifest analysis orchestration.
//!
//! Ties together parsing, pod spec extraction and the rule set. Each call is
//! self-contained: no state survives between calls, so analyses may run
//! concurrently without coordination.

use crate::analyzer::extract::{ResourceIdentity, extract_pod_spec};
use crate::analyzer::parser::yaml::{non_empty_documents, parse_documents, parse_file};
use crate::analyzer::rules;
use crate::analyzer::types::{AnalysisResult, Issue, Profile};
use crate::error::Result;
use serde_yaml::Value;
use std::path::Path;

/// Profile used when the caller does not choose one.
pub const DEFAULT_PROFILE: &str = "restricted";

/// Analyze a manifest string against a profile name.
///
/// The profile is validated before anything is parsed, so an invalid profile
/// fails without partial results. YAML syntax errors are returned unchanged.
pub fn analyze(manifest: &str, profile: &str) -> Result<AnalysisResult> {
    let profile: Profile = profile.parse()?;
    analyze_with_profile(manifest, profile)
}

/// Analyze a manifest string against an already-validated profile.
pub fn analyze_with_profile(manifest: &str, profile: Profile) -> Result<AnalysisResult> {
    let documents = parse_documents(manifest)?;
    Ok(analyze_documents(&documents, profile))
}

/// Analyze a manifest file.
pub fn analyze_file(path: &Path, profile: &str) -> Result<AnalysisResult> {
    let profile: Profile = profile.parse()?;
    let documents = parse_file(path)?;
    Ok(analyze_documents(&documents, profile))
}

/// Analyze already-parsed documents.
///
/// Empty documents are skipped. Issues keep document order, then rule order.
pub fn analyze_documents(documents: &[Value], profile: Profile) -> AnalysisResult {
    let issues: Vec<Issue> = non_empty_documents(documents)
        .into_iter()
        .flat_map(|doc| analyze_document(doc, profile))
        .collect();

    log::debug!(
        "analyzed {} document(s) against {} profile: {} issue(s)",
        documents.len(),
        profile,
        issues.len()
    );

    AnalysisResult::new(profile, issues)
}

/// Analyze one document and stamp its issues with the document's identity.
pub fn analyze_document(document: &Value, profile: Profile) -> Vec<Issue> {
    let identity = ResourceIdentity::from_document(document);
    let pod_spec = extract_pod_spec(document);

    let issues: Vec<Issue> = rules::evaluate(&pod_spec, profile)
        .into_iter()
        .map(|issue| issue.stamped(&identity))
        .collect();

    log::debug!(
        "{} {}: {} container(s), {} issue(s)",
        identity.kind.as_deref().unwrap_or("<no kind>"),
        identity.identifier().as_deref().unwrap_or("<no name>"),
        pod_spec.containers.len(),
        issues.len()
    );

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PssError;

    const COMPLIANT_POD: &str = r#"
apiVersion: v1
kind: Pod
metadata:
  name: compliant
spec:
  containers:
  - name: app
    image: app:1.0
    securityContext:
      allowPrivilegeEscalation: false
      runAsNonRoot: true
"#;

    #[test]
    fn test_invalid_profile_rejected_before_parsing() {
        let err = analyze("kind: Pod\nspec: [unclosed\n", "privileged").unwrap_err();
        assert!(matches!(err, PssError::InvalidProfile(ref p) if p == "privileged"));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let err = analyze("kind: Pod\nspec: [unclosed\n", "baseline").unwrap_err();
        assert!(matches!(err, PssError::Parse(_)));
    }

    #[test]
    fn test_compliant_pod() {
        let result = analyze(COMPLIANT_POD, "restricted").unwrap();
        assert_eq!(result.profile, Profile::Restricted);
        assert_eq!(result.issue_count, 0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_manifest() {
        let result = analyze("", DEFAULT_PROFILE).unwrap();
        assert_eq!(result.issue_count, 0);
    }

    #[test]
    fn test_issues_stamped_with_identity() {
        let yaml = r#"
kind: DaemonSet
metadata:
  name: node-agent
  namespace: kube-system
spec:
  template:
    spec:
      hostNetwork: true
      containers:
      - name: agent
        securityContext:
          allowPrivilegeEscalation: false
"#;
        let result = analyze(yaml, "baseline").unwrap();
        assert_eq!(result.issue_count, 1);
        let issue = &result.issues[0];
        assert_eq!(issue.id.as_str(), "PSS-BASELINE-hostNetwork");
        assert_eq!(issue.resource_kind.as_deref(), Some("DaemonSet"));
        assert_eq!(issue.resource_name.as_deref(), Some("node-agent"));
        assert_eq!(issue.resource_namespace.as_deref(), Some("kube-system"));
        assert_eq!(issue.document_path(), "spec.template.spec.hostNetwork");
    }

    #[test]
    fn test_multi_document_order() {
        let yaml = format!(
            "{}---\nkind: Pod\nmetadata:\n  name: second\nspec:\n  hostPID: true\n  containers: []\n",
            COMPLIANT_POD
        );
        let result = analyze(&yaml, "restricted").unwrap();
        assert_eq!(result.issue_count, 1);
        assert_eq!(result.issues[0].resource_name.as_deref(), Some("second"));
        assert_eq!(result.issues[0].path, "spec.hostPID");
    }

    #[test]
    fn test_non_mapping_document_yields_no_findings() {
        let result = analyze("just some text\n---\n- a\n- b\n", "restricted").unwrap();
        assert_eq!(result.issue_count, 0);
    }
}
