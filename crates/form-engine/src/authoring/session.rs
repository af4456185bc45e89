use super::draft::EntityDraft;
use crate::error::FormEngineError;
use crate::parameters::store::ParameterStore;
use contracts::domain::a001_parameter::aggregate::{FieldDescriptor, Parameter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Outcome of a field toggle. Removing the last active field is refused
/// and reported here instead of raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied,
    /// The set was left unchanged, at least one field must stay active
    LastFieldRetained,
}

/// The parameter currently driving the form, snapshotted by key and label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedParameter {
    pub key: String,
    pub label: String,
}

/// All mutable state of one authoring session: the selected parameter,
/// the ordered active-field set, in-progress values, the accumulated
/// drafts and the acting user. Serializable so a host UI can persist a
/// half-finished session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthoringSession {
    selected: Option<SelectedParameter>,
    /// Ordered, duplicate-free
    active_field_keys: Vec<String>,
    values: HashMap<String, String>,
    drafts: Vec<EntityDraft>,
    /// Login fed into the `updatedBy` wire field
    pub author: String,
}

impl AuthoringSession {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&SelectedParameter> {
        self.selected.as_ref()
    }

    pub fn active_field_keys(&self) -> &[String] {
        &self.active_field_keys
    }

    pub fn is_active(&self, field_key: &str) -> bool {
        self.active_field_keys.iter().any(|k| k == field_key)
    }

    pub fn drafts(&self) -> &[EntityDraft] {
        &self.drafts
    }

    pub fn value(&self, field_key: &str) -> Option<&str> {
        self.values.get(field_key).map(String::as_str)
    }

    /// Choose the parameter driving the form. All of its fields start
    /// active and in-progress values are cleared. Selecting the already
    /// selected parameter is a no-op so an accidental re-click does not
    /// discard input.
    pub fn select_parameter(&mut self, parameter: &Parameter) {
        if self
            .selected
            .as_ref()
            .is_some_and(|s| s.key == parameter.key)
        {
            return;
        }
        self.selected = Some(SelectedParameter {
            key: parameter.key.clone(),
            label: parameter.label.clone(),
        });
        self.active_field_keys = parameter.field_keys();
        self.values.clear();
    }

    /// Add or remove a field from the active set. Removing the last
    /// remaining field is refused. A successful removal discards the
    /// value entered for that field.
    pub fn toggle_field(&mut self, field_key: &str, is_selected: bool) -> ToggleOutcome {
        if is_selected {
            if !self.is_active(field_key) {
                self.active_field_keys.push(field_key.to_string());
            }
            return ToggleOutcome::Applied;
        }

        if self.is_active(field_key) && self.active_field_keys.len() == 1 {
            tracing::warn!(field = field_key, "dernier champ actif, désélection refusée");
            return ToggleOutcome::LastFieldRetained;
        }
        if let Some(position) = self.active_field_keys.iter().position(|k| k == field_key) {
            self.active_field_keys.remove(position);
            self.values.remove(field_key);
        }
        ToggleOutcome::Applied
    }

    /// Store the raw string value for a field. No coercion, presence is
    /// checked downstream at commit time.
    pub fn set_value(&mut self, field_key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field_key.into(), value.into());
    }

    /// The parameter's descriptors currently active, in the parameter's
    /// own order. Keys that no longer exist on the parameter are dropped
    /// silently.
    pub fn live_fields<'a>(&self, parameter: &'a Parameter) -> Vec<&'a FieldDescriptor> {
        parameter
            .fields
            .iter()
            .filter(|f| self.is_active(&f.key))
            .collect()
    }

    /// Slugify the label, persist the new field on the selected
    /// parameter, then activate it so it appears in the live form at
    /// once. On any error the session is left untouched and the caller
    /// keeps its draft label for correction and retry.
    pub async fn add_field_from_label(
        &mut self,
        store: &mut ParameterStore,
        label: &str,
    ) -> Result<FieldDescriptor, FormEngineError> {
        let selected = self
            .selected
            .as_ref()
            .ok_or_else(|| FormEngineError::validation("Aucun paramètre sélectionné"))?;
        let parameter_id = store
            .find(&selected.key)
            .ok_or_else(|| FormEngineError::validation("Paramètre inconnu"))?
            .id;

        let field = FieldDescriptor::from_label(label).map_err(FormEngineError::Validation)?;
        store.add_field(parameter_id, field.clone()).await?;

        if !self.is_active(&field.key) {
            self.active_field_keys.push(field.key.clone());
        }
        Ok(field)
    }

    pub(crate) fn push_draft(&mut self, draft: EntityDraft) {
        self.drafts.push(draft);
    }

    pub(crate) fn remove_draft_by_id(&mut self, draft_id: Uuid) {
        self.drafts.retain(|d| d.id != draft_id);
    }

    /// Reset in-progress values, the active set survives for fast
    /// repeated entry
    pub(crate) fn clear_values(&mut self) {
        self.values.clear();
    }

    /// Full reset after a successful batch submission
    pub(crate) fn clear_batch(&mut self) {
        self.drafts.clear();
        self.selected = None;
        self.active_field_keys.clear();
        self.values.clear();
    }
}
