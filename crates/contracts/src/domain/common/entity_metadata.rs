use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every aggregate instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Login of the last user to touch the record, fed into the
    /// `updatedBy` wire field on outgoing writes
    pub updated_by: Option<String>,
    /// Soft delete
    pub is_deleted: bool,
    /// Version for optimistic locking
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            updated_by: None,
            is_deleted: false,
            version: 0,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Refresh the update timestamp and record the acting user
    pub fn touch_by(&mut self, user: impl Into<String>) {
        self.touch();
        self.updated_by = Some(user.into());
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
