//! PodSpec extraction utilities.

use crate::analyzer::extract::container::PodSpec;
use serde_yaml::Value;
use std::fmt;

/// Stands in for any missing or non-mapping branch of a document.
static EMPTY: Value = Value::Null;

/// Workload kinds with a known pod template location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Pod,
    Deployment,
    ReplicaSet,
    StatefulSet,
    DaemonSet,
    Job,
    CronJob,
    /// Unknown or missing kind; evaluated as if `spec` were a pod spec.
    Other,
}

impl WorkloadKind {
    /// Parse from a Kubernetes kind string (case-insensitive).
    pub fn from_kind(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "pod" => Self::Pod,
            "deployment" => Self::Deployment,
            "replicaset" => Self::ReplicaSet,
            "statefulset" => Self::StatefulSet,
            "daemonset" => Self::DaemonSet,
            "job" => Self::Job,
            "cronjob" => Self::CronJob,
            _ => Self::Other,
        }
    }

    /// Kind of a parsed document; a missing or non-string `kind` is `Other`.
    pub fn of_document(document: &Value) -> Self {
        document
            .get("kind")
            .and_then(Value::as_str)
            .map(Self::from_kind)
            .unwrap_or(Self::Other)
    }

    /// Keys leading from the document root to the pod spec.
    pub fn pod_spec_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Pod | Self::Other => &["spec"],
            Self::Deployment | Self::ReplicaSet | Self::StatefulSet | Self::DaemonSet => {
                &["spec", "template", "spec"]
            }
            Self::Job => &["spec", "template", "spec"],
            Self::CronJob => &["spec", "jobTemplate", "spec", "template", "spec"],
        }
    }

    /// Dotted form of [`pod_spec_keys`](Self::pod_spec_keys).
    pub fn pod_spec_path(&self) -> &'static str {
        match self {
            Self::Pod | Self::Other => "spec",
            Self::Deployment
            | Self::ReplicaSet
            | Self::StatefulSet
            | Self::DaemonSet
            | Self::Job => "spec.template.spec",
            Self::CronJob => "spec.jobTemplate.spec.template.spec",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pod => "Pod",
            Self::Deployment => "Deployment",
            Self::ReplicaSet => "ReplicaSet",
            Self::StatefulSet => "StatefulSet",
            Self::DaemonSet => "DaemonSet",
            Self::Job => "Job",
            Self::CronJob => "CronJob",
            Self::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Locate the raw pod spec node of a document.
///
/// Never fails: a missing key, or a non-mapping where a mapping was expected,
/// yields an empty node.
pub fn pod_spec_value(document: &Value) -> &Value {
    let kind = WorkloadKind::of_document(document);
    log::trace!("extracting pod spec for {} at {}", kind, kind.pod_spec_path());

    kind.pod_spec_keys()
        .iter()
        .try_fold(document, |node, key| node.as_mapping()?.get(*key))
        .unwrap_or(&EMPTY)
}

/// Extract the typed PodSpec of a document.
pub fn extract_pod_spec(document: &Value) -> PodSpec {
    PodSpec::from_value(pod_spec_value(document))
}
