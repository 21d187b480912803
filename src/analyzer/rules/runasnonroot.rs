//! Run as non-root detection (restricted profile only).

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::{Rule, security_context_path};
use crate::analyzer::types::{Issue, Profile, RUN_AS_NON_ROOT_ID};

/// Flags containers that may run as root: `runAsNonRoot` is not `true` and
/// `runAsUser` is absent or 0. Reported at the security context itself.
pub struct RunAsNonRootRule;

impl Rule for RunAsNonRootRule {
    fn key(&self) -> &'static str {
        "run-as-non-root"
    }

    fn applies_to(&self, profile: Profile) -> bool {
        profile.is_restricted()
    }

    fn check(&self, pod_spec: &PodSpec, _profile: Profile) -> Vec<Issue> {
        pod_spec
            .containers
            .iter()
            .enumerate()
            .filter(|(_, container)| container.security_context.may_run_as_root())
            .map(|(index, container)| {
                Issue::error(
                    RUN_AS_NON_ROOT_ID,
                    security_context_path(index),
                    format!(
                        "Container '{}' may run as root (runAsNonRoot is not true and runAsUser is unset or 0)",
                        container.name
                    ),
                    "securityContext:\n  runAsNonRoot: true\n  runAsUser: 1000\n",
                )
            })
            .collect()
    }
}
