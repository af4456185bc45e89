use super::draft::{DraftValue, EntityDraft};
use super::session::AuthoringSession;
use crate::error::FormEngineError;
use contracts::domain::a001_parameter::aggregate::Parameter;
use uuid::Uuid;

/// Key of the synthetic category field appended to every draft
pub const CATEGORY_FIELD_KEY: &str = "type";
pub const CATEGORY_FIELD_LABEL: &str = "Type";

impl AuthoringSession {
    /// Snapshot the current form into a draft and append it to the batch.
    ///
    /// Only active fields with a non-blank trimmed value are captured, in
    /// the parameter's field order. The category tag is appended as the
    /// synthetic `type` value unconditionally. On success the in-progress
    /// values reset while the active set is kept for fast repeated entry.
    pub fn commit_draft(
        &mut self,
        entity_name: &str,
        category_tag: &str,
        parameter: &Parameter,
    ) -> Result<Uuid, FormEngineError> {
        if category_tag.trim().is_empty() {
            return Err(FormEngineError::validation("Sélectionnez une catégorie"));
        }

        let mut values: Vec<DraftValue> = Vec::new();
        for field in self.live_fields(parameter) {
            let Some(raw) = self.value(&field.key) else {
                continue;
            };
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            values.push(DraftValue {
                field_key: field.key.clone(),
                field_label: field.label.clone(),
                value: trimmed.to_string(),
            });
        }
        if values.is_empty() {
            return Err(FormEngineError::validation("Au moins un champ est requis"));
        }

        values.push(DraftValue {
            field_key: CATEGORY_FIELD_KEY.into(),
            field_label: CATEGORY_FIELD_LABEL.into(),
            value: category_tag.trim().to_string(),
        });

        let draft = EntityDraft {
            id: Uuid::new_v4(),
            parameter_key: parameter.key.clone(),
            parameter_label: parameter.label.clone(),
            entity_name: entity_name.trim().to_string(),
            values,
            active_field_keys: self.active_field_keys().iter().cloned().collect(),
        };
        let draft_id = draft.id;
        tracing::info!(draft = %draft_id, entity = %draft.entity_name, "brouillon ajouté au lot");

        self.push_draft(draft);
        self.clear_values();
        Ok(draft_id)
    }

    /// Remove one draft from the batch. Unconditional, no undo.
    pub fn remove_draft(&mut self, draft_id: Uuid) {
        self.remove_draft_by_id(draft_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_parameter::aggregate::FieldDescriptor;

    fn batiment() -> Parameter {
        let mut parameter = Parameter::new_for_insert("batiment", "Bâtiment");
        parameter
            .push_field(FieldDescriptor::new("nom", "Nom"))
            .unwrap();
        parameter
            .push_field(FieldDescriptor::new("surface", "Surface"))
            .unwrap();
        parameter
    }

    #[test]
    fn commit_captures_values_in_field_order_plus_category() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        // set out of order, the parameter's order wins
        session.set_value("surface", "120");
        session.set_value("nom", "Bloc A");

        session
            .commit_draft("Bloc A", "Dépôt de stockage", &parameter)
            .unwrap();

        let draft = &session.drafts()[0];
        let pairs: Vec<(&str, &str)> = draft
            .values
            .iter()
            .map(|v| (v.field_key.as_str(), v.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("nom", "Bloc A"),
                ("surface", "120"),
                ("type", "Dépôt de stockage"),
            ]
        );
    }

    #[test]
    fn commit_requires_a_category() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        session.set_value("nom", "Bloc A");

        let err = session.commit_draft("Bloc A", "  ", &parameter).unwrap_err();
        assert!(err.is_validation());
        assert!(session.drafts().is_empty());
    }

    #[test]
    fn commit_requires_at_least_one_filled_field() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        session.set_value("nom", "   ");

        let err = session
            .commit_draft("Bloc A", "Dépôt de stockage", &parameter)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn deselected_fields_are_never_captured() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        session.set_value("nom", "Bloc A");
        session.set_value("surface", "120");
        session.toggle_field("surface", false);

        session
            .commit_draft("Bloc A", "Dépôt de stockage", &parameter)
            .unwrap();
        assert_eq!(session.drafts()[0].value("surface"), None);
    }

    #[test]
    fn commit_resets_values_but_keeps_active_fields() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        session.set_value("nom", "Bloc A");

        session
            .commit_draft("Bloc A", "Dépôt de stockage", &parameter)
            .unwrap();

        assert_eq!(session.value("nom"), None);
        assert_eq!(session.active_field_keys(), ["nom", "surface"]);
    }

    #[test]
    fn remove_draft_is_unconditional() {
        let parameter = batiment();
        let mut session = AuthoringSession::new("c.durand");
        session.select_parameter(&parameter);
        session.set_value("nom", "Bloc A");
        let id = session
            .commit_draft("Bloc A", "Dépôt de stockage", &parameter)
            .unwrap();

        session.remove_draft(id);
        assert!(session.drafts().is_empty());

        // removing an unknown id is a no-op
        session.remove_draft(Uuid::new_v4());
    }
}
