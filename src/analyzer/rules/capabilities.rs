//! Added Linux capabilities detection (restricted profile only).

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::{Rule, security_context_path};
use crate::analyzer::types::{CAPABILITIES_ID, Issue, Profile};

/// The only capability the restricted profile allows a container to add.
pub const ALLOWED_CAPABILITY: &str = "NET_BIND_SERVICE";

/// Flags containers adding any capability other than `NET_BIND_SERVICE`.
/// One issue per container, naming every offending capability.
pub struct CapabilitiesRule;

impl Rule for CapabilitiesRule {
    fn key(&self) -> &'static str {
        "added-capabilities"
    }

    fn applies_to(&self, profile: Profile) -> bool {
        profile.is_restricted()
    }

    fn check(&self, pod_spec: &PodSpec, _profile: Profile) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (index, container) in pod_spec.containers.iter().enumerate() {
            let forbidden = forbidden_capabilities(&container.security_context.capabilities_add);
            if forbidden.is_empty() {
                continue;
            }

            issues.push(Issue::error(
                CAPABILITIES_ID,
                format!("{}.capabilities.add", security_context_path(index)),
                format!(
                    "Container '{}' adds forbidden capabilities: {}",
                    container.name,
                    forbidden.join(", ")
                ),
                "capabilities:\n  drop:\n    - ALL\n",
            ));
        }

        issues
    }
}

/// Capabilities other than [`ALLOWED_CAPABILITY`], in declaration order.
pub fn forbidden_capabilities(added: &[String]) -> Vec<&str> {
    added
        .iter()
        .map(String::as_str)
        .filter(|cap| *cap != ALLOWED_CAPABILITY)
        .collect()
}
