use crate::gateway::GatewayError;
use thiserror::Error;

/// Engine-wide error taxonomy.
///
/// `Validation` never reaches the network and is always recoverable in
/// place. `Fetch` means a read or the primary create call failed and no
/// local state was mutated. `Attachment` means the create succeeded but
/// linking to the parent site failed, the created objects exist remotely.
#[derive(Debug, Error)]
pub enum FormEngineError {
    /// Local precondition not met, message is user-facing
    #[error("{0}")]
    Validation(String),

    /// Network or backend failure, input is preserved for retry
    #[error("Échec de la requête: {0}")]
    Fetch(#[from] GatewayError),

    /// Objects were created but not attached to the site. The orphaned
    /// ids are exposed so the caller can offer a relink action.
    #[error("Objets créés mais non rattachés au site: {source}")]
    Attachment {
        created_ids: Vec<String>,
        #[source]
        source: GatewayError,
    },
}

impl FormEngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
