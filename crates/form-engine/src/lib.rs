//! Parameterized-entity form engine for the litigation & insured-sites
//! back office.
//!
//! User-defined parameters (named schemas of fields) drive runtime-generated
//! forms. One [`AuthoringSession`] owns the per-session state: the selected
//! parameter, the active field set, in-progress values and the accumulated
//! entity drafts. The [`SubmissionCoordinator`] flushes the batch to the
//! REST collaborator in one call, then attaches the created objects to
//! their parent site.

pub mod authoring;
pub mod config;
pub mod error;
pub mod gateway;
pub mod parameters;
pub mod submission;

pub use authoring::draft::{DraftValue, EntityDraft};
pub use authoring::session::{AuthoringSession, SelectedParameter, ToggleOutcome};
pub use config::{load_config, EngineConfig};
pub use error::FormEngineError;
pub use gateway::{BackofficeGateway, GatewayError, HttpGateway};
pub use parameters::store::ParameterStore;
pub use submission::coordinator::{SubmissionCoordinator, SubmissionOutcome, SubmissionState};
