use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub Uuid);

impl SiteId {
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

impl AggregateId for SiteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SiteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An insured site, the parent container buildings are attached to.
/// Site CRUD stays with the REST collaborator, only the attachment
/// surface is owned here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub address: Option<String>,
    /// Ids of the insured objects attached to this site
    #[serde(default)]
    pub batiments: Vec<String>,
    pub metadata: EntityMetadata,
}

impl Site {
    pub fn new_for_insert(name: impl Into<String>) -> Self {
        Self {
            id: SiteId::new_v4(),
            name: name.into(),
            address: None,
            batiments: Vec::new(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom du site ne peut pas être vide".into());
        }
        Ok(())
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `PUT /sites/{siteId}`: replaces the attached-building id list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttachBatimentsDto {
    pub batiments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_name() {
        let mut site = Site::new_for_insert("Entrepôt Nord");
        assert!(site.validate().is_ok());
        site.name = "   ".into();
        assert!(site.validate().is_err());
    }

    #[test]
    fn attach_dto_wire_name() {
        let dto = AttachBatimentsDto {
            batiments: vec!["b1".into(), "b2".into()],
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["batiments"][1], "b2");
    }
}
