//! # PSS Analyzer
//!
//! Checks Kubernetes workload manifests against the Pod Security Standards
//! `baseline` and `restricted` profiles.
//!
//! ## Features
//!
//! - **Workload-aware**: finds the pod template inside Pods, Deployments,
//!   ReplicaSets, StatefulSets, DaemonSets, Jobs and CronJobs
//! - **Addressable findings**: every issue carries a stable id and a
//!   dot/bracket path to the offending field
//! - **Remediation**: each issue proposes a YAML patch (advisory only)
//! - **Multiple outputs**: JSON, plain text, GitHub Actions annotations
//!
//! ## Example
//!
//! ```rust
//! use pss_analyzer::analyze;
//!
//! # fn main() -> pss_analyzer::Result<()> {
//! let manifest = r#"
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: web
//! spec:
//!   hostPID: true
//!   containers:
//!   - name: nginx
//!     securityContext:
//!       allowPrivilegeEscalation: false
//! "#;
//! let result = analyze(manifest, "baseline")?;
//! assert_eq!(result.issue_count, 1);
//! assert_eq!(result.issues[0].path, "spec.hostPID");
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod tool;

// Re-export commonly used types and functions
pub use analyzer::{AnalysisResult, Issue, Profile, analyze, analyze_documents};
pub use error::{PssError, Result};
pub use tool::{PssHelperArgs, PssHelperTool};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
