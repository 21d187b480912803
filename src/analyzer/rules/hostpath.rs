//! hostPath volume detection.

use crate::analyzer::extract::container::PodSpec;
use crate::analyzer::rules::Rule;
use crate::analyzer::types::{Issue, Profile, RuleId};

/// Flags every volume that mounts a host path. Applies to every profile.
pub struct HostPathRule;

impl Rule for HostPathRule {
    fn key(&self) -> &'static str {
        "host-path-volumes"
    }

    fn check(&self, pod_spec: &PodSpec, profile: Profile) -> Vec<Issue> {
        pod_spec
            .volumes
            .iter()
            .enumerate()
            .filter(|(_, volume)| volume.host_path)
            .map(|(index, volume)| {
                let name = volume.name.as_deref().unwrap_or("<unnamed>");
                Issue::error(
                    RuleId::profile_scoped(profile, "hostPath"),
                    format!("spec.volumes[{}].hostPath", index),
                    format!("Volume '{}' mounts a hostPath", name),
                    format!(
                        "volumes:\n  - name: {}\n    emptyDir: {{}}  # or a configMap/secret/PVC instead of hostPath\n",
                        name
                    ),
                )
            })
            .collect()
    }
}
