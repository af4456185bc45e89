use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// One value captured for a draft. Key and label are snapshotted at
/// commit time, renaming a field later does not rewrite existing drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftValue {
    pub field_key: String,
    pub field_label: String,
    pub value: String,
}

/// A locally assembled record awaiting batch submission. Immutable once
/// accumulated, it can only be removed from the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDraft {
    /// Session-local id, never sent to the collaborator
    pub id: Uuid,
    pub parameter_key: String,
    pub parameter_label: String,
    pub entity_name: String,
    pub values: Vec<DraftValue>,
    /// The field keys that were active when the draft was committed
    pub active_field_keys: HashSet<String>,
}

impl EntityDraft {
    pub fn value(&self, field_key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.field_key == field_key)
            .map(|v| v.value.as_str())
    }
}
