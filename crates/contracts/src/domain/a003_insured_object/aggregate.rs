use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsuredObjectId(pub Uuid);

impl InsuredObjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InsuredObjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InsuredObjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One key/value detail of an insured object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDetail {
    pub key: String,
    pub value: String,
}

/// An insured object (building, equipment, …) described entirely by its
/// category tag and a list of key/value details, the schema lives in the
/// parameter it was authored from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuredObject {
    pub id: InsuredObjectId,
    pub object_type: String,
    pub object_name: String,
    pub details: Vec<ObjectDetail>,
    pub metadata: EntityMetadata,
}

impl InsuredObject {
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.value.as_str())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.object_type.trim().is_empty() {
            return Err("Le type de l'objet ne peut pas être vide".into());
        }
        if self.object_name.trim().is_empty() {
            return Err("Le nom de l'objet ne peut pas être vide".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// One item of the `POST /objects/createmany` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateObjectDto {
    #[serde(rename = "objectType")]
    pub object_type: String,
    #[serde(rename = "objectName")]
    pub object_name: String,
    #[serde(default)]
    pub details: Vec<ObjectDetail>,
    #[serde(rename = "updatedBy")]
    pub updated_by: String,
}

/// One item of the `POST /objects/createmany` response, the collaborator
/// guarantees at least `id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedObjectDto {
    pub id: String,
    #[serde(rename = "objectType", default)]
    pub object_type: Option<String>,
    #[serde(rename = "objectName", default)]
    pub object_name: Option<String>,
}
