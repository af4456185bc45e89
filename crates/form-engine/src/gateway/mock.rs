//! Scripted gateway for unit tests: records every call, fails on demand.

use super::{BackofficeGateway, GatewayError};
use async_trait::async_trait;
use contracts::domain::a001_parameter::aggregate::ParameterDto;
use contracts::domain::a002_site::aggregate::AttachBatimentsDto;
use contracts::domain::a003_insured_object::aggregate::CreatedObjectDto;
use contracts::usecases::u401_batch_create_objects::{CreateManyRequest, CreateManyResponse};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockGateway {
    pub parameters: Mutex<Vec<ParameterDto>>,

    pub fail_list: Mutex<bool>,
    pub fail_replace: Mutex<bool>,
    pub fail_create: Mutex<bool>,
    pub fail_attach: Mutex<bool>,

    pub replace_calls: Mutex<Vec<ParameterDto>>,
    pub create_calls: Mutex<Vec<CreateManyRequest>>,
    pub attach_calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockGateway {
    pub fn with_parameters(parameters: Vec<ParameterDto>) -> Self {
        Self {
            parameters: Mutex::new(parameters),
            ..Self::default()
        }
    }

    fn scripted_failure() -> GatewayError {
        GatewayError::Status {
            status: 500,
            message: "panne simulée".into(),
        }
    }
}

#[async_trait]
impl BackofficeGateway for MockGateway {
    async fn list_parameters(&self) -> Result<Vec<ParameterDto>, GatewayError> {
        if *self.fail_list.lock().unwrap() {
            return Err(Self::scripted_failure());
        }
        Ok(self.parameters.lock().unwrap().clone())
    }

    async fn replace_parameter(&self, dto: &ParameterDto) -> Result<(), GatewayError> {
        if *self.fail_replace.lock().unwrap() {
            return Err(Self::scripted_failure());
        }
        self.replace_calls.lock().unwrap().push(dto.clone());
        Ok(())
    }

    async fn create_objects(
        &self,
        request: &CreateManyRequest,
    ) -> Result<CreateManyResponse, GatewayError> {
        if *self.fail_create.lock().unwrap() {
            return Err(Self::scripted_failure());
        }
        self.create_calls.lock().unwrap().push(request.clone());
        let created = request
            .objects
            .iter()
            .enumerate()
            .map(|(i, dto)| CreatedObjectDto {
                id: format!("obj-{}", i + 1),
                object_type: Some(dto.object_type.clone()),
                object_name: Some(dto.object_name.clone()),
            })
            .collect();
        Ok(CreateManyResponse { created })
    }

    async fn attach_batiments(
        &self,
        site_id: &str,
        body: &AttachBatimentsDto,
    ) -> Result<(), GatewayError> {
        if *self.fail_attach.lock().unwrap() {
            return Err(Self::scripted_failure());
        }
        self.attach_calls
            .lock()
            .unwrap()
            .push((site_id.to_string(), body.batiments.clone()));
        Ok(())
    }
}
