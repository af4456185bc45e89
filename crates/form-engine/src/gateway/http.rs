use super::{BackofficeGateway, GatewayError};
use crate::config::EngineConfig;
use async_trait::async_trait;
use contracts::domain::a001_parameter::aggregate::ParameterDto;
use contracts::domain::a002_site::aggregate::AttachBatimentsDto;
use contracts::usecases::u401_batch_create_objects::{CreateManyRequest, CreateManyResponse};
use once_cell::sync::Lazy;

/// One shared client for the whole process, connections are pooled
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// `reqwest` implementation of the back-office gateway. Timeouts are
/// delegated to the client defaults and surface as [`GatewayError`].
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into `GatewayError::Status`, extracting the
/// server-reported message from an `{"error": …}` body when present
async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or(body);

    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BackofficeGateway for HttpGateway {
    async fn list_parameters(&self) -> Result<Vec<ParameterDto>, GatewayError> {
        let url = self.url("/parameters");
        tracing::debug!(%url, "GET parameters");
        let response = check(CLIENT.get(&url).send().await?).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn replace_parameter(&self, dto: &ParameterDto) -> Result<(), GatewayError> {
        let id = dto.id.as_deref().unwrap_or_default();
        let url = self.url(&format!("/parameters/{}", id));
        tracing::debug!(%url, key = %dto.key, "PUT parameter");
        check(CLIENT.put(&url).json(dto).send().await?).await?;
        Ok(())
    }

    async fn create_objects(
        &self,
        request: &CreateManyRequest,
    ) -> Result<CreateManyResponse, GatewayError> {
        let url = self.url("/objects/createmany");
        tracing::debug!(%url, count = request.len(), "POST createmany");
        let response = check(CLIENT.post(&url).json(request).send().await?).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn attach_batiments(
        &self,
        site_id: &str,
        body: &AttachBatimentsDto,
    ) -> Result<(), GatewayError> {
        let url = self.url(&format!("/sites/{}", site_id));
        tracing::debug!(%url, count = body.batiments.len(), "PUT site batiments");
        check(CLIENT.put(&url).json(body).send().await?).await?;
        Ok(())
    }
}
