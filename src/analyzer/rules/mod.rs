//! The built-in Pod Security Standards rule set.
//!
//! Rules are independent of one another and run in a fixed order. Within a
//! rule, containers and volumes are visited in declaration order so that
//! issue paths stay stable between runs.

pub mod capabilities;
pub mod hostnamespace;
pub mod hostpath;
pub mod privileged;
pub mod privilegeescalation;
pub mod runasnonroot;

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::types::{Issue, Profile};

/// A check run against one extracted pod spec.
pub trait Rule: Send + Sync {
    /// Short unique key (e.g., "host-namespaces").
    fn key(&self) -> &'static str;

    /// Whether the rule is evaluated under the given profile.
    fn applies_to(&self, _profile: Profile) -> bool {
        true
    }

    /// Run the rule. Never fails; missing fields are already defaulted.
    fn check(&self, pod_spec: &PodSpec, profile: Profile) -> Vec<Issue>;
}

/// Built-in rules in evaluation order.
pub static BUILTIN_RULES: &[&dyn Rule] = &[
    &hostnamespace::HostNamespaceRule,
    &hostpath::HostPathRule,
    &privileged::PrivilegedRule,
    &privilegeescalation::PrivilegeEscalationRule,
    &runasnonroot::RunAsNonRootRule,
    &capabilities::CapabilitiesRule,
];

/// Get the built-in rules in evaluation order.
pub fn builtin_rules() -> &'static [&'static dyn Rule] {
    BUILTIN_RULES
}

/// Evaluate every rule that applies to `profile` against a pod spec.
///
/// Returned issues carry no resource identity yet.
pub fn evaluate(pod_spec: &PodSpec, profile: Profile) -> Vec<Issue> {
    builtin_rules()
        .iter()
        .filter(|rule| rule.applies_to(profile))
        .flat_map(|rule| {
            let issues = rule.check(pod_spec, profile);
            log::trace!("{}: {} issue(s)", rule.key(), issues.len());
            issues
        })
        .collect()
}

/// Path of a container's security context within the pod spec.
pub(crate) fn security_context_path(index: usize) -> String {
    format!("spec.containers[{}].securityContext", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pod(yaml: &str) -> PodSpec {
        PodSpec::from_value(&serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_rule_keys_unique() {
        let keys: HashSet<_> = builtin_rules().iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), builtin_rules().len());
    }

    #[test]
    fn test_only_restricted_rules_are_gated() {
        let baseline: Vec<_> = builtin_rules()
            .iter()
            .filter(|r| r.applies_to(Profile::Baseline))
            .map(|r| r.key())
            .collect();
        assert_eq!(
            baseline,
            vec![
                "host-namespaces",
                "host-path-volumes",
                "privileged-container",
                "privilege-escalation"
            ]
        );
        assert!(builtin_rules().iter().all(|r| r.applies_to(Profile::Restricted)));
    }

    #[test]
    fn test_evaluation_order() {
        let spec = pod(r#"
hostIPC: true
volumes:
- name: host
  hostPath:
    path: /etc
containers:
- name: app
  securityContext:
    privileged: true
    capabilities:
      add: [SYS_ADMIN]
"#);
        let ids: Vec<_> = evaluate(&spec, Profile::Restricted)
            .into_iter()
            .map(|i| i.id.0)
            .collect();
        assert_eq!(
            ids,
            vec![
                "PSS-RESTRICTED-hostIPC",
                "PSS-RESTRICTED-hostPath",
                "PSS-PRIVILEGED",
                "PSS-ALLOW_PRIV_ESC",
                "PSS-RESTRICTED-RUN_AS_NON_ROOT",
                "PSS-RESTRICTED-CAPS",
            ]
        );
    }

    #[test]
    fn test_empty_spec_is_compliant() {
        assert!(evaluate(&PodSpec::default(), Profile::Restricted).is_empty());
        assert!(evaluate(&PodSpec::default(), Profile::Baseline).is_empty());
    }

    #[test]
    fn test_baseline_never_emits_restricted_ids() {
        let spec = pod(r#"
containers:
- name: app
  securityContext:
    runAsUser: 0
    capabilities:
      add: [NET_ADMIN, SYS_ADMIN]
"#);
        let issues = evaluate(&spec, Profile::Baseline);
        assert!(issues.iter().all(|i| !i.id.as_str().starts_with("PSS-RESTRICTED-")));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id.as_str(), "PSS-ALLOW_PRIV_ESC");
    }
}
