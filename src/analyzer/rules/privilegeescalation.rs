//! Privilege escalation detection.

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::{Rule, security_context_path};
use crate::analyzer::types::{ALLOW_PRIV_ESC_ID, Issue, Profile};

/// Flags containers that do not set `allowPrivilegeEscalation: false`.
///
/// Absence of the field counts as a violation. Applies to every profile.
pub struct PrivilegeEscalationRule;

impl Rule for PrivilegeEscalationRule {
    fn key(&self) -> &'static str {
        "privilege-escalation"
    }

    fn check(&self, pod_spec: &PodSpec, _profile: Profile) -> Vec<Issue> {
        pod_spec
            .containers
            .iter()
            .enumerate()
            .filter(|(_, container)| container.security_context.allow_privilege_escalation)
            .map(|(index, container)| {
                Issue::error(
                    ALLOW_PRIV_ESC_ID,
                    format!("{}.allowPrivilegeEscalation", security_context_path(index)),
                    format!(
                        "Container '{}' allows privilege escalation (allowPrivilegeEscalation is not false)",
                        container.name
                    ),
                    "securityContext:\n  allowPrivilegeEscalation: false\n",
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(yaml: &str) -> PodSpec {
        PodSpec::from_value(&serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_absent_field_is_violation() {
        let spec = pod("containers:\n- name: app\n");
        let issues = PrivilegeEscalationRule.check(&spec, Profile::Baseline);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].path,
            "spec.containers[0].securityContext.allowPrivilegeEscalation"
        );
    }

    #[test]
    fn test_explicit_values() {
        let spec = pod(r#"
containers:
- name: locked
  securityContext:
    allowPrivilegeEscalation: false
- name: open
  securityContext:
    allowPrivilegeEscalation: true
"#);
        let issues = PrivilegeEscalationRule.check(&spec, Profile::Restricted);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'open'"));
        assert!(issues[0].path.starts_with("spec.containers[1]"));
    }
}
