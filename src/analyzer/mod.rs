//! Pod Security Standards analysis.
//!
//! # Pipeline
//!
//! 1. `parser` splits a manifest stream into generic YAML documents
//! 2. `extract` locates the pod spec of each document and reads it into
//!    typed views with explicit defaults
//! 3. `rules` evaluates the fixed rule set for the selected profile
//! 4. `analyze` stamps each issue with its document's identity and
//!    aggregates the report
//!
//! # Rules
//!
//! | id | applies to | path |
//! |---|---|---|
//! | `PSS-<PROFILE>-hostNetwork/hostPID/hostIPC` | both | `spec.<field>` |
//! | `PSS-<PROFILE>-hostPath` | both | `spec.volumes[i].hostPath` |
//! | `PSS-PRIVILEGED` | both | `spec.containers[i].securityContext.privileged` |
//! | `PSS-ALLOW_PRIV_ESC` | both | `spec.containers[i].securityContext.allowPrivilegeEscalation` |
//! | `PSS-RESTRICTED-RUN_AS_NON_ROOT` | restricted | `spec.containers[i].securityContext` |
//! | `PSS-RESTRICTED-CAPS` | restricted | `spec.containers[i].securityContext.capabilities.add` |
//!
//! Privileged and privilege-escalation checks run under `baseline` too,
//! which is broader than the upstream Pod Security Standards.

pub mod analyze;
pub mod extract;
pub mod formatter;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use analyze::{
    DEFAULT_PROFILE, analyze, analyze_document, analyze_documents, analyze_file,
    analyze_with_profile,
};
pub use extract::{PodSpec, ResourceIdentity, WorkloadKind, extract_pod_spec};
pub use formatter::{OutputFormat, format_result, format_result_to_string};
pub use types::{AnalysisResult, Issue, Profile, RuleId, Severity};
