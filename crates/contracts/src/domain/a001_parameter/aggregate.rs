use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::slug::slugify;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterId(pub Uuid);

impl ParameterId {
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

impl AggregateId for ParameterId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ParameterId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Field descriptors
// ============================================================================

/// Value category of a field slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldValueType {
    #[default]
    Text,
    Number,
    Date,
    Flag,
}

impl FieldValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Flag => "flag",
        }
    }
}

/// Restricts a field's options to the fields of another parameter.
/// `field_key = None` links the whole parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConstraint {
    pub parameter_key: String,
    #[serde(default)]
    pub field_key: Option<String>,
}

/// One named, typed slot within a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub value_type: FieldValueType,
    #[serde(default)]
    pub linked_params: Vec<LinkConstraint>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value_type: FieldValueType::default(),
            linked_params: Vec::new(),
        }
    }

    /// Derive a descriptor from a human label, the key comes from
    /// slugification. Labels that slugify to nothing are rejected.
    pub fn from_label(label: &str) -> Result<Self, String> {
        let key = slugify(label);
        if key.is_empty() {
            return Err("Libellé de champ invalide".into());
        }
        Ok(Self {
            key,
            label: label.trim().to_string(),
            value_type: FieldValueType::default(),
            linked_params: Vec::new(),
        })
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named, reusable schema of fields (e.g. "batiment") shared by all
/// entities of that category. Fields are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    /// Stable machine identifier, unique across parameters
    pub key: String,
    /// Display name
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
    pub metadata: EntityMetadata,
}

impl Parameter {
    pub fn new_for_insert(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ParameterId::new_v4(),
            key: key.into(),
            label: label.into(),
            fields: Vec::new(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("La clé du paramètre ne peut pas être vide".into());
        }
        if self.label.trim().is_empty() {
            return Err("Le libellé du paramètre ne peut pas être vide".into());
        }
        Ok(())
    }

    pub fn field_keys(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.key.clone()).collect()
    }

    pub fn find_field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.find_field(key).is_some()
    }

    /// Append a field. Empty keys/labels and key collisions are rejected,
    /// two fields sharing a key would alias in the value map.
    pub fn push_field(&mut self, field: FieldDescriptor) -> Result<(), String> {
        if field.key.trim().is_empty() || field.label.trim().is_empty() {
            return Err("Le champ doit avoir une clé et un libellé".into());
        }
        if self.has_field(&field.key) {
            return Err(format!("Un champ \"{}\" existe déjà", field.key));
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn touch_updated(&mut self) {
        self.metadata.touch();
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    // ------------------------------------------------------------------
    // Wire conversions
    // ------------------------------------------------------------------

    pub fn to_dto(&self) -> ParameterDto {
        ParameterDto {
            id: Some(self.id.as_string()),
            key: self.key.clone(),
            label: self.label.clone(),
            values: self.fields.clone(),
            updated_at: Some(self.metadata.updated_at),
        }
    }

    pub fn from_dto(dto: &ParameterDto) -> anyhow::Result<Self> {
        let id = match &dto.id {
            Some(raw) => ParameterId::from_string(raw)
                .map_err(|e| anyhow::anyhow!("invalid parameter id: {}", e))?,
            None => anyhow::bail!("parameter \"{}\" has no id", dto.key),
        };
        let mut metadata = EntityMetadata::new();
        if let Some(ts) = dto.updated_at {
            metadata.updated_at = ts;
        }
        Ok(Self {
            id,
            key: dto.key.clone(),
            label: dto.label.clone(),
            fields: dto.values.clone(),
            metadata,
        })
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Wire shape of a parameter. The collaborator names the field list
/// `values`, the aggregate calls them `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParameterDto {
    pub id: Option<String>,
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub values: Vec<FieldDescriptor>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batiment() -> Parameter {
        let mut p = Parameter::new_for_insert("batiment", "Bâtiment");
        p.push_field(FieldDescriptor::new("nom", "Nom")).unwrap();
        p.push_field(FieldDescriptor::new("surface", "Surface")).unwrap();
        p
    }

    #[test]
    fn push_field_rejects_collisions() {
        let mut p = batiment();
        let err = p.push_field(FieldDescriptor::new("nom", "Nom bis")).unwrap_err();
        assert!(err.contains("existe déjà"));
        assert_eq!(p.fields.len(), 2);
    }

    #[test]
    fn push_field_rejects_empty_key() {
        let mut p = batiment();
        assert!(p.push_field(FieldDescriptor::new("", "Vide")).is_err());
        assert!(p.push_field(FieldDescriptor::new("cle", "  ")).is_err());
    }

    #[test]
    fn from_label_derives_slug_key() {
        let field = FieldDescriptor::from_label("Numéro de série").unwrap();
        assert_eq!(field.key, "numero_de_serie");
        assert_eq!(field.label, "Numéro de série");
        assert!(FieldDescriptor::from_label("!!!").is_err());
    }

    #[test]
    fn dto_round_trip_keeps_wire_names() {
        let p = batiment();
        let json = serde_json::to_value(p.to_dto()).unwrap();
        assert!(json.get("values").is_some(), "wire name is `values`");
        assert_eq!(json["values"][0]["key"], "nom");

        let back = Parameter::from_dto(&p.to_dto()).unwrap();
        assert_eq!(back.id, p.id);
        assert_eq!(back.field_keys(), p.field_keys());
    }

    #[test]
    fn from_dto_requires_id() {
        let dto = ParameterDto {
            key: "batiment".into(),
            label: "Bâtiment".into(),
            ..Default::default()
        };
        assert!(Parameter::from_dto(&dto).is_err());
    }
}
