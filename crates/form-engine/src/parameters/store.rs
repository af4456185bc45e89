use crate::error::FormEngineError;
use crate::gateway::BackofficeGateway;
use contracts::domain::a001_parameter::aggregate::{FieldDescriptor, Parameter, ParameterId};
use std::sync::Arc;

/// In-memory cache of parameter definitions backed by the REST
/// collaborator. Reads are not deduplicated, the last response wins.
pub struct ParameterStore {
    gateway: Arc<dyn BackofficeGateway>,
    cache: Vec<Parameter>,
}

impl ParameterStore {
    pub fn new(gateway: Arc<dyn BackofficeGateway>) -> Self {
        Self {
            gateway,
            cache: Vec::new(),
        }
    }

    /// Fetch all parameters and refresh the cache. On failure the prior
    /// cache is left intact so the form keeps working on stale data.
    /// `filter_key` narrows the returned list, never the cache.
    pub async fn load(
        &mut self,
        filter_key: Option<&str>,
    ) -> Result<Vec<Parameter>, FormEngineError> {
        let dtos = self.gateway.list_parameters().await.map_err(|e| {
            tracing::error!(error = %e, "échec du chargement des paramètres");
            FormEngineError::Fetch(e)
        })?;

        let mut loaded = Vec::with_capacity(dtos.len());
        for dto in &dtos {
            match Parameter::from_dto(dto) {
                Ok(parameter) => loaded.push(parameter),
                Err(e) => tracing::warn!(key = %dto.key, error = %e, "paramètre ignoré"),
            }
        }
        self.cache = loaded;
        tracing::info!(count = self.cache.len(), "paramètres chargés");

        Ok(match filter_key {
            Some(key) => self
                .cache
                .iter()
                .filter(|p| p.key == key)
                .cloned()
                .collect(),
            None => self.cache.clone(),
        })
    }

    pub fn cached(&self) -> &[Parameter] {
        &self.cache
    }

    pub fn find(&self, key: &str) -> Option<&Parameter> {
        self.cache.iter().find(|p| p.key == key)
    }

    /// Append a field to an existing parameter and persist the whole
    /// parameter remotely (replace-all-fields semantics). The cache is
    /// only updated once the remote confirms, a failed call leaves
    /// local state untouched.
    pub async fn add_field(
        &mut self,
        parameter_id: ParameterId,
        field: FieldDescriptor,
    ) -> Result<Parameter, FormEngineError> {
        if field.key.trim().is_empty() || field.label.trim().is_empty() {
            return Err(FormEngineError::validation(
                "Le champ doit avoir une clé et un libellé",
            ));
        }

        let index = self
            .cache
            .iter()
            .position(|p| p.id == parameter_id)
            .ok_or_else(|| FormEngineError::validation("Paramètre inconnu"))?;

        let mut updated = self.cache[index].clone();
        updated
            .push_field(field)
            .map_err(FormEngineError::Validation)?;
        updated.touch_updated();

        self.gateway.replace_parameter(&updated.to_dto()).await?;

        self.cache[index] = updated.clone();
        tracing::info!(
            parameter = %updated.key,
            fields = updated.fields.len(),
            "champ ajouté au paramètre"
        );
        Ok(updated)
    }

    /// Resolve a descriptor's link constraints against the cache.
    /// Dangling links are skipped silently.
    pub fn linked_options(&self, field: &FieldDescriptor) -> Vec<String> {
        let mut options = Vec::new();
        for link in &field.linked_params {
            let Some(parameter) = self.find(&link.parameter_key) else {
                continue;
            };
            match &link.field_key {
                Some(key) => {
                    if let Some(linked) = parameter.find_field(key) {
                        options.push(linked.label.clone());
                    }
                }
                None => options.extend(parameter.fields.iter().map(|f| f.label.clone())),
            }
        }
        options
    }
}
