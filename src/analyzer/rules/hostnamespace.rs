//! Host network/PID/IPC namespace sharing.

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::Rule;
use crate::analyzer::types::{Issue, Profile, RuleId};

/// Flags `hostNetwork`, `hostPID` and `hostIPC` set to true.
/// Applies to every profile.
pub struct HostNamespaceRule;

impl Rule for HostNamespaceRule {
    fn key(&self) -> &'static str {
        "host-namespaces"
    }

    fn check(&self, pod_spec: &PodSpec, profile: Profile) -> Vec<Issue> {
        pod_spec
            .host_namespaces()
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(field, _)| {
                Issue::error(
                    RuleId::profile_scoped(profile, field),
                    format!("spec.{}", field),
                    format!(
                        "Pod shares the host's {} namespace ({}: true)",
                        namespace_label(field),
                        field
                    ),
                    format!("spec:\n  {}: false\n", field),
                )
            })
            .collect()
    }
}

fn namespace_label(field: &str) -> &'static str {
    match field {
        "hostNetwork" => "network",
        "hostPID" => "PID",
        _ => "IPC",
    }
}
