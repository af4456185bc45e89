//! Per-session authoring state: field selection, live form values and the
//! draft accumulation list.

pub mod composer;
pub mod draft;
pub mod session;

pub use composer::{CATEGORY_FIELD_KEY, CATEGORY_FIELD_LABEL};
pub use draft::{DraftValue, EntityDraft};
pub use session::{AuthoringSession, SelectedParameter, ToggleOutcome};
