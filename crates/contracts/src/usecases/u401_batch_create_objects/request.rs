use crate::domain::a003_insured_object::aggregate::CreateObjectDto;
use serde::{Deserialize, Serialize};

/// Body of `POST /objects/createmany`. The collaborator expects a bare
/// JSON array, hence the transparent wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CreateManyRequest {
    pub objects: Vec<CreateObjectDto>,
}

impl CreateManyRequest {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
