use crate::domain::a003_insured_object::aggregate::CreatedObjectDto;
use serde::{Deserialize, Serialize};

/// Response of `POST /objects/createmany`: a bare array of created
/// entities, each carrying at least its persistent id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CreateManyResponse {
    pub created: Vec<CreatedObjectDto>,
}

impl CreateManyResponse {
    /// The persistent ids, in creation order
    pub fn ids(&self) -> Vec<String> {
        self.created.iter().map(|c| c.id.clone()).collect()
    }
}
