//! Seam to the back-office REST collaborator.
//!
//! The engine only talks to the four endpoints it needs, everything else
//! (cases, contracts, zones, companies) stays with the surrounding
//! application.

pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpGateway;

use async_trait::async_trait;
use contracts::domain::a001_parameter::aggregate::ParameterDto;
use contracts::domain::a002_site::aggregate::AttachBatimentsDto;
use contracts::usecases::u401_batch_create_objects::{CreateManyRequest, CreateManyResponse};
use thiserror::Error;

/// Transport-level failures, all surfaced to the user as non-blocking
/// notifications by the embedding UI
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("erreur réseau: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, with the server-reported message when the
    /// body carries one
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("réponse illisible: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait BackofficeGateway: Send + Sync {
    /// `GET /parameters`
    async fn list_parameters(&self) -> Result<Vec<ParameterDto>, GatewayError>;

    /// `PUT /parameters/{id}`, full-replace semantics
    async fn replace_parameter(&self, dto: &ParameterDto) -> Result<(), GatewayError>;

    /// `POST /objects/createmany`
    async fn create_objects(
        &self,
        request: &CreateManyRequest,
    ) -> Result<CreateManyResponse, GatewayError>;

    /// `PUT /sites/{siteId}`, replaces the attached-building id list
    async fn attach_batiments(
        &self,
        site_id: &str,
        body: &AttachBatimentsDto,
    ) -> Result<(), GatewayError>;
}
