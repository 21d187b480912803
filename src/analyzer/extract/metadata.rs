//! Resource identity extraction.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Identity of the document an issue was found in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
}

impl ResourceIdentity {
    /// Read `kind`, `metadata.name` and `metadata.namespace`.
    /// Missing or non-string values are `None`.
    pub fn from_document(document: &Value) -> Self {
        let metadata = document.get("metadata");
        Self {
            kind: string_at(Some(document), "kind"),
            name: string_at(metadata, "name"),
            namespace: string_at(metadata, "namespace"),
        }
    }

    /// Namespace-qualified name (`namespace/name`, or just `name`).
    pub fn identifier(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(match &self.namespace {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.to_string(),
        })
    }
}

fn string_at(value: Option<&Value>, key: &str) -> Option<String> {
    value?.get(key)?.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_document() {
        let doc: Value = serde_yaml::from_str(
            "kind: Deployment\nmetadata:\n  name: web\n  namespace: prod\n",
        )
        .unwrap();
        let id = ResourceIdentity::from_document(&doc);
        assert_eq!(id.kind.as_deref(), Some("Deployment"));
        assert_eq!(id.name.as_deref(), Some("web"));
        assert_eq!(id.namespace.as_deref(), Some("prod"));
        assert_eq!(id.identifier().as_deref(), Some("prod/web"));
    }

    #[test]
    fn test_identity_missing_fields() {
        let doc: Value = serde_yaml::from_str("metadata: 7\nspec: {}\n").unwrap();
        assert_eq!(ResourceIdentity::from_document(&doc), ResourceIdentity::default());

        let doc: Value = serde_yaml::from_str("kind: 12\n").unwrap();
        assert_eq!(ResourceIdentity::from_document(&doc).kind, None);
        assert_eq!(ResourceIdentity::from_document(&doc).identifier(), None);
    }
}
