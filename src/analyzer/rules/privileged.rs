//! Privileged container detection.

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::{Rule, security_context_path};
use crate::analyzer::types::{Issue, PRIVILEGED_ID, Profile};

/// Flags containers running with `privileged: true`. Applies to every profile.
pub struct PrivilegedRule;

impl Rule for PrivilegedRule {
    fn key(&self) -> &'static str {
        "privileged-container"
    }

    fn check(&self, pod_spec: &PodSpec, _profile: Profile) -> Vec<Issue> {
        pod_spec
            .containers
            .iter()
            .enumerate()
            .filter(|(_, container)| container.security_context.privileged)
            .map(|(index, container)| {
                Issue::error(
                    PRIVILEGED_ID,
                    format!("{}.privileged", security_context_path(index)),
                    format!("Container '{}' is running in privileged mode", container.name),
                    "securityContext:\n  privileged: false\n",
                )
            })
            .collect()
    }
}
