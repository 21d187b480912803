//! `pss_helper` tool - Pod Security Standards analysis for agent dispatchers
//!
//! Exposes the analyzer as a JSON-in / JSON-out call. Registering the tool
//! with a dispatcher (MCP server, agent framework, HTTP handler) is left to
//! the host; this module only owns the argument schema and the call.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analyzer::{DEFAULT_PROFILE, analyze};

/// Arguments for the pss_helper tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PssHelperArgs {
    /// One or more `---`-separated Kubernetes manifests
    pub manifest: String,

    /// "baseline" or "restricted" (default)
    #[serde(default)]
    pub profile: Option<String>,
}

/// Error type for the pss_helper tool
#[derive(Debug, thiserror::Error)]
#[error("pss_helper error: {0}")]
pub struct PssHelperError(String);

/// Tool to check workload manifests against a Pod Security Standards profile
#[derive(Debug, Clone, Copy, Default)]
pub struct PssHelperTool;

impl PssHelperTool {
    pub const NAME: &'static str = "pss_helper";

    /// Tool description and JSON schema of the arguments.
    pub fn definition(&self) -> serde_json::Value {
        json!({
            "name": Self::NAME,
            "description": "Check Kubernetes workload manifests (Pod, Deployment, ReplicaSet, \
                StatefulSet, DaemonSet, Job, CronJob) against a Pod Security Standards profile. \
                Returns JSON with `profile`, `issueCount` and `issues`; each issue has an id, \
                a dot/bracket `path` into the pod spec, a message and a `recommendedPatch` \
                YAML fragment.",
            "parameters": {
                "type": "object",
                "properties": {
                    "manifest": {
                        "type": "string",
                        "description": "YAML manifest text; multiple documents separated by ---"
                    },
                    "profile": {
                        "type": "string",
                        "enum": ["baseline", "restricted"],
                        "description": "Profile to evaluate. Default is 'restricted'."
                    }
                },
                "required": ["manifest"]
            }
        })
    }

    /// Run the analysis and return the result as pretty JSON.
    pub fn call(&self, args: PssHelperArgs) -> Result<String, PssHelperError> {
        let profile = args.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
        let result =
            analyze(&args.manifest, profile).map_err(|e| PssHelperError(e.to_string()))?;

        log::info!(
            "{}: {} issue(s) for profile {}",
            Self::NAME,
            result.issue_count,
            result.profile
        );

        serde_json::to_string_pretty(&result).map_err(|e| PssHelperError(e.to_string()))
    }

    /// Decode raw JSON arguments, then [`call`](Self::call).
    pub fn call_json(&self, raw_args: &str) -> Result<String, PssHelperError> {
        let args: PssHelperArgs = serde_json::from_str(raw_args)
            .map_err(|e| PssHelperError(format!("invalid arguments: {}", e)))?;
        self.call(args)
    }
}
