use crate::authoring::composer::CATEGORY_FIELD_KEY;
use crate::authoring::draft::EntityDraft;
use crate::authoring::session::AuthoringSession;
use crate::error::FormEngineError;
use crate::gateway::BackofficeGateway;
use contracts::domain::a002_site::aggregate::AttachBatimentsDto;
use contracts::domain::a003_insured_object::aggregate::{CreateObjectDto, ObjectDetail};
use contracts::usecases::u401_batch_create_objects::CreateManyRequest;
use std::sync::Arc;

/// Submission lifecycle. Only `Idle` accepts a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Result of a `submit_all` call that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every draft was created and attached, the batch was cleared
    Completed {
        created_count: usize,
        created_ids: Vec<String>,
    },
    /// A submission was already in flight, nothing was sent
    AlreadyInFlight,
}

/// Flushes the accumulated drafts in one batch-create call, then attaches
/// the created objects to the parent site.
///
/// Failure handling follows the batch lifecycle: a create failure leaves
/// the drafts untouched for retry. An attach failure also keeps the
/// drafts, so a blind retry would create the objects a second time. The
/// caller gets the orphaned ids and decides.
pub struct SubmissionCoordinator {
    gateway: Arc<dyn BackofficeGateway>,
    state: SubmissionState,
}

impl SubmissionCoordinator {
    pub fn new(gateway: Arc<dyn BackofficeGateway>) -> Self {
        Self {
            gateway,
            state: SubmissionState::default(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Submit every accumulated draft and attach the created objects to
    /// `site_id`. Re-entry while a submission is in flight is ignored.
    pub async fn submit_all(
        &mut self,
        session: &mut AuthoringSession,
        site_id: &str,
        existing_attached_ids: &[String],
    ) -> Result<SubmissionOutcome, FormEngineError> {
        if self.state == SubmissionState::Submitting {
            tracing::warn!("soumission déjà en cours, appel ignoré");
            return Ok(SubmissionOutcome::AlreadyInFlight);
        }
        if session.drafts().is_empty() {
            return Err(FormEngineError::validation("Aucun objet à créer"));
        }

        self.state = SubmissionState::Submitting;
        let result = self.run(session, site_id, existing_attached_ids).await;
        self.state = SubmissionState::Idle;
        result
    }

    async fn run(
        &self,
        session: &mut AuthoringSession,
        site_id: &str,
        existing_attached_ids: &[String],
    ) -> Result<SubmissionOutcome, FormEngineError> {
        let request = draft_payloads(session.drafts(), &session.author);
        tracing::info!(count = request.len(), site = site_id, "envoi du lot");

        let response = self.gateway.create_objects(&request).await.map_err(|e| {
            tracing::error!(error = %e, "échec de la création du lot");
            FormEngineError::Fetch(e)
        })?;
        let created_ids = response.ids();

        let all_ids = union_ids(existing_attached_ids, &created_ids);
        let body = AttachBatimentsDto { batiments: all_ids };
        if let Err(e) = self.gateway.attach_batiments(site_id, &body).await {
            tracing::error!(
                error = %e,
                created = created_ids.len(),
                "objets créés mais rattachement échoué"
            );
            return Err(FormEngineError::Attachment {
                created_ids,
                source: e,
            });
        }

        let created_count = created_ids.len();
        session.clear_batch();
        tracing::info!(created = created_count, "lot soumis et rattaché");
        Ok(SubmissionOutcome::Completed {
            created_count,
            created_ids,
        })
    }
}

/// Map drafts to creation payloads verbatim. The category value becomes
/// `objectType`, every captured pair ships as a detail, no transformation
/// beyond the trimming already done at commit time.
pub fn draft_payloads(drafts: &[EntityDraft], author: &str) -> CreateManyRequest {
    CreateManyRequest {
        objects: drafts
            .iter()
            .map(|draft| CreateObjectDto {
                object_type: draft.value(CATEGORY_FIELD_KEY).unwrap_or_default().to_string(),
                object_name: draft.entity_name.clone(),
                details: draft
                    .values
                    .iter()
                    .map(|v| ObjectDetail {
                        key: v.field_key.clone(),
                        value: v.value.clone(),
                    })
                    .collect(),
                updated_by: author.to_string(),
            })
            .collect(),
    }
}

/// Order-preserving set union: existing ids first, then the new ones not
/// already present
pub fn union_ids(existing: &[String], new_ids: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(existing.len() + new_ids.len());
    for id in existing.iter().chain(new_ids) {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}
