//! Typed pod and container views with explicit defaults.
//!
//! Every field the rules look at is resolved to its default here, before any
//! predicate runs. The defaults matter: an absent `allowPrivilegeEscalation`
//! reads as `true`, not as "unset".

use serde_yaml::Value;

/// The part of a pod spec the rules evaluate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodSpec {
    pub host_network: bool,
    pub host_pid: bool,
    pub host_ipc: bool,
    /// Volumes in declaration order.
    pub volumes: Vec<Volume>,
    /// Containers in declaration order.
    pub containers: Vec<ContainerSpec>,
}

impl PodSpec {
    /// Read a pod spec node. Anything that is not a mapping reads as empty.
    pub fn from_value(spec: &Value) -> Self {
        Self {
            host_network: get_bool(spec, "hostNetwork").unwrap_or(false),
            host_pid: get_bool(spec, "hostPID").unwrap_or(false),
            host_ipc: get_bool(spec, "hostIPC").unwrap_or(false),
            volumes: sequence(spec.get("volumes"))
                .iter()
                .map(Volume::from_value)
                .collect(),
            containers: sequence(spec.get("containers"))
                .iter()
                .enumerate()
                .map(|(index, c)| ContainerSpec::from_value(index, c))
                .collect(),
        }
    }

    /// Host namespace flags as `(field name, enabled)` pairs, in rule order.
    pub fn host_namespaces(&self) -> [(&'static str, bool); 3] {
        [
            ("hostNetwork", self.host_network),
            ("hostPID", self.host_pid),
            ("hostIPC", self.host_ipc),
        ]
    }
}

/// A pod volume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Volume {
    pub name: Option<String>,
    /// Whether the volume mapping carries a `hostPath` key (any value).
    pub host_path: bool,
}

impl Volume {
    pub fn from_value(volume: &Value) -> Self {
        let host_path = volume
            .as_mapping()
            .is_some_and(|m| m.contains_key("hostPath"));
        Self {
            name: get_string(volume, "name"),
            host_path,
        }
    }
}

/// A container of a pod spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Declared name, or `container-<index>` when absent.
    pub name: String,
    /// Treated as empty when absent.
    pub security_context: SecurityContext,
}

impl ContainerSpec {
    pub fn from_value(index: usize, container: &Value) -> Self {
        Self {
            name: get_string(container, "name").unwrap_or_else(|| placeholder_name(index)),
            security_context: container
                .get("securityContext")
                .map(SecurityContext::from_value)
                .unwrap_or_default(),
        }
    }
}

/// Name given to a container that has none.
pub fn placeholder_name(index: usize) -> String {
    format!("container-{}", index)
}

/// Container-level security context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    pub privileged: bool,
    /// Defaults to `true`.
    pub allow_privilege_escalation: bool,
    pub run_as_non_root: Option<bool>,
    /// `None` when absent or null.
    pub run_as_user: Option<RunAsUser>,
    /// `capabilities.add`, in declaration order. Non-string entries are kept
    /// in rendered form so they can never pass as an allowed capability.
    pub capabilities_add: Vec<String>,
}

/// A declared `runAsUser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunAsUser {
    /// Numeric uid 0.
    Root,
    /// Any other value, as written.
    Other(String),
}

impl RunAsUser {
    /// Read a `runAsUser` node; null reads as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => Some(Self::Root),
            other => Some(Self::Other(render_scalar(other))),
        }
    }
}

impl Default for SecurityContext {
    fn default() -> Self {
        Self {
            privileged: false,
            allow_privilege_escalation: true,
            run_as_non_root: None,
            run_as_user: None,
            capabilities_add: Vec::new(),
        }
    }
}

impl SecurityContext {
    pub fn from_value(sc: &Value) -> Self {
        let defaults = Self::default();
        Self {
            privileged: get_bool(sc, "privileged").unwrap_or(defaults.privileged),
            allow_privilege_escalation: get_bool(sc, "allowPrivilegeEscalation")
                .unwrap_or(defaults.allow_privilege_escalation),
            run_as_non_root: get_bool(sc, "runAsNonRoot"),
            run_as_user: sc.get("runAsUser").and_then(RunAsUser::from_value),
            capabilities_add: sequence(sc.get("capabilities").and_then(|c| c.get("add")))
                .iter()
                .map(render_scalar)
                .collect(),
        }
    }

    /// True when the container is not guaranteed to run as a non-root user:
    /// `runAsNonRoot` is not exactly `true` and `runAsUser` is absent or 0.
    pub fn may_run_as_root(&self) -> bool {
        self.run_as_non_root != Some(true) && matches!(self.run_as_user, None | Some(RunAsUser::Root))
    }
}

// ============================================================================
// Lookup helpers
// ============================================================================

fn get_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(|s| s.to_string())
}

/// Only YAML booleans count; `"true"` as a string does not.
fn get_bool(value: &Value, key: &str) -> Option<bool> {
    value.get(key)?.as_bool()
}

fn sequence(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Render a node as text. Nested structures are rendered as YAML.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
