//! Core types for the PSS analyzer.
//!
//! - `Profile` - The Pod Security Standards tier being evaluated
//! - `Severity` - Issue severity levels
//! - `RuleId` - Stable rule-instance identifiers (e.g., "PSS-PRIVILEGED")
//! - `Issue` - A single rule violation, addressable within its document
//! - `AnalysisResult` - The aggregated report of one analysis call

use crate::analyzer::extract::metadata::ResourceIdentity;
use crate::analyzer::extract::pod_spec::WorkloadKind;
use crate::error::PssError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pod Security Standards profile selected for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Minimally restrictive tier: host namespaces, hostPath, privileged
    /// and escalation rules.
    Baseline,
    /// Hardened tier: everything in baseline plus non-root and capability rules.
    #[default]
    Restricted,
}

impl Profile {
    /// Get the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Restricted => "restricted",
        }
    }

    /// Upper-cased tier name used inside profile-scoped rule ids.
    pub fn id_segment(&self) -> &'static str {
        match self {
            Self::Baseline => "BASELINE",
            Self::Restricted => "RESTRICTED",
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profile {
    type Err = PssError;

    /// Profiles are matched exactly; "Restricted" or " baseline" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(Self::Baseline),
            "restricted" => Ok(Self::Restricted),
            other => Err(PssError::InvalidProfile(other.to_string())),
        }
    }
}

/// Severity levels for issues.
///
/// Every built-in rule reports a violation of the selected profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
}

impl Severity {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stable rule-instance identifier (e.g., "PSS-RESTRICTED-hostPID").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of a rule whose identifier carries the profile tier, e.g.
    /// `PSS-BASELINE-hostNetwork`.
    pub fn profile_scoped(profile: Profile, suffix: &str) -> Self {
        Self(format!("PSS-{}-{}", profile.id_segment(), suffix))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id belongs to a restricted-only rule.
    pub fn is_restricted_only(&self) -> bool {
        self.0 == RUN_AS_NON_ROOT_ID || self.0 == CAPABILITIES_ID
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub const PRIVILEGED_ID: &str = "PSS-PRIVILEGED";
pub const ALLOW_PRIV_ESC_ID: &str = "PSS-ALLOW_PRIV_ESC";
pub const RUN_AS_NON_ROOT_ID: &str = "PSS-RESTRICTED-RUN_AS_NON_ROOT";
pub const CAPABILITIES_ID: &str = "PSS-RESTRICTED-CAPS";

/// One rule violation found in a manifest document.
///
/// Rules produce issues without resource identity; the analyzer stamps the
/// `resource_*` fields from the owning document afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: RuleId,
    pub level: Severity,
    /// Dot/bracket location of the offending field, relative to the pod spec
    /// (`spec.containers[0].securityContext.privileged`). For controller
    /// kinds use [`Issue::document_path`] to address the source document.
    pub path: String,
    pub message: String,
    /// Advisory YAML fragment. Never parsed or applied.
    pub recommended_patch: String,
    pub resource_kind: Option<String>,
    pub resource_name: Option<String>,
    pub resource_namespace: Option<String>,
}

impl Issue {
    /// Create an error-level issue with no resource identity.
    pub fn error(
        id: impl Into<RuleId>,
        path: impl Into<String>,
        message: impl Into<String>,
        recommended_patch: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            level: Severity::Error,
            path: path.into(),
            message: message.into(),
            recommended_patch: recommended_patch.into(),
            resource_kind: None,
            resource_name: None,
            resource_namespace: None,
        }
    }

    /// Fill in resource identity fields that the rule left unset.
    pub fn stamped(mut self, identity: &ResourceIdentity) -> Self {
        if self.resource_kind.is_none() {
            self.resource_kind = identity.kind.clone();
        }
        if self.resource_name.is_none() {
            self.resource_name = identity.name.clone();
        }
        if self.resource_namespace.is_none() {
            self.resource_namespace = identity.namespace.clone();
        }
        self
    }

    /// Location of the offending field within the source document.
    ///
    /// `path` is relative to the extracted pod spec; controller kinds nest
    /// that spec deeper (`spec.template.spec` for a Deployment), so the
    /// leading `spec` segment is replaced with the kind's pod spec prefix.
    pub fn document_path(&self) -> String {
        let kind = WorkloadKind::from_kind(self.resource_kind.as_deref().unwrap_or_default());
        match self.path.strip_prefix("spec") {
            Some(rest) if rest.is_empty() || rest.starts_with('.') => {
                format!("{}{}", kind.pod_spec_path(), rest)
            }
            _ => self.path.clone(),
        }
    }

    /// `Kind/name` label for display; unknown parts render as `-`.
    pub fn resource_label(&self) -> String {
        format!(
            "{}/{}",
            self.resource_kind.as_deref().unwrap_or("-"),
            self.resource_name.as_deref().unwrap_or("-"),
        )
    }
}

/// The report produced by one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub profile: Profile,
    /// Always equal to `issues.len()`.
    pub issue_count: usize,
    /// Document order, then rule-evaluation order within a document.
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    /// Build a result; the count is derived from the issue list.
    pub fn new(profile: Profile, issues: Vec<Issue>) -> Self {
        Self {
            profile,
            issue_count: issues.len(),
            issues,
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issues whose id starts with the given prefix (e.g., "PSS-RESTRICTED-").
    pub fn issues_for<'a>(&'a self, id_prefix: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.id.as_str().starts_with(id_prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_str() {
        assert_eq!("baseline".parse::<Profile>().unwrap(), Profile::Baseline);
        assert_eq!("restricted".parse::<Profile>().unwrap(), Profile::Restricted);
        assert!(matches!(
            "privileged".parse::<Profile>(),
            Err(PssError::InvalidProfile(p)) if p == "privileged"
        ));
        assert!("Restricted".parse::<Profile>().is_err());
        assert_eq!(Profile::default(), Profile::Restricted);
    }

    #[test]
    fn test_profile_scoped_id() {
        assert_eq!(
            RuleId::profile_scoped(Profile::Baseline, "hostNetwork").as_str(),
            "PSS-BASELINE-hostNetwork"
        );
        assert_eq!(
            RuleId::profile_scoped(Profile::Restricted, "hostPath").as_str(),
            "PSS-RESTRICTED-hostPath"
        );
        assert!(RuleId::new(CAPABILITIES_ID).is_restricted_only());
        assert!(!RuleId::profile_scoped(Profile::Restricted, "hostPID").is_restricted_only());
    }

    #[test]
    fn test_stamp_only_fills_unset_fields() {
        let identity = ResourceIdentity {
            kind: Some("Pod".to_string()),
            name: Some("web".to_string()),
            namespace: None,
        };
        let mut issue = Issue::error(PRIVILEGED_ID, "spec.containers[0]", "msg", "patch");
        issue.resource_name = Some("preset".to_string());

        let issue = issue.stamped(&identity);
        assert_eq!(issue.resource_kind.as_deref(), Some("Pod"));
        assert_eq!(issue.resource_name.as_deref(), Some("preset"));
        assert_eq!(issue.resource_namespace, None);
    }

    #[test]
    fn test_document_path() {
        let identity = ResourceIdentity {
            kind: Some("CronJob".to_string()),
            name: None,
            namespace: None,
        };
        let issue = Issue::error(
            ALLOW_PRIV_ESC_ID,
            "spec.containers[1].securityContext.allowPrivilegeEscalation",
            "msg",
            "patch",
        )
        .stamped(&identity);
        assert_eq!(
            issue.document_path(),
            "spec.jobTemplate.spec.template.spec.containers[1].securityContext.allowPrivilegeEscalation"
        );

        let pod = Issue::error("PSS-BASELINE-hostPID", "spec.hostPID", "msg", "patch")
            .stamped(&ResourceIdentity::default());
        assert_eq!(pod.document_path(), "spec.hostPID");
    }

    #[test]
    fn test_issue_serializes_camel_case_with_nulls() {
        let issue = Issue::error("PSS-BASELINE-hostIPC", "spec.hostIPC", "m", "p");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["id"], "PSS-BASELINE-hostIPC");
        assert_eq!(json["level"], "error");
        assert_eq!(json["recommendedPatch"], "p");
        assert!(json.get("resourceKind").unwrap().is_null());
        assert!(json.get("resourceName").unwrap().is_null());
        assert!(json.get("resourceNamespace").unwrap().is_null());
    }

    #[test]
    fn test_result_count_matches_issues() {
        let issues = vec![
            Issue::error(PRIVILEGED_ID, "a", "m", "p"),
            Issue::error(RUN_AS_NON_ROOT_ID, "b", "m", "p"),
        ];
        let result = AnalysisResult::new(Profile::Restricted, issues);
        assert_eq!(result.issue_count, 2);
        assert!(result.has_issues());
        assert_eq!(result.issues_for("PSS-RESTRICTED-").count(), 1);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["profile"], "restricted");
        assert_eq!(json["issueCount"], 2);
    }
}
