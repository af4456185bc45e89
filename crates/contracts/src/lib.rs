//! Shared contracts between the back-office UI and its REST collaborator.
//!
//! Domain aggregates live in [`domain`], wire DTOs next to the aggregate
//! they describe. Request/response pairs for multi-step operations live in
//! [`usecases`].

pub mod domain;
pub mod shared;
pub mod usecases;
