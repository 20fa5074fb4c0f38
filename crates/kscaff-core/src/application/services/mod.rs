//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create an API" or "initialize a project".

pub mod api_service;
pub mod project_service;
pub mod scaffolder;
pub mod updater;

pub use api_service::{ApiOptions, ApiService, ScaffoldReport};
pub use project_service::{InitOptions, ProjectService};
pub use scaffolder::{FileOutcome, ScaffoldOptions, Scaffolder};
pub use updater::InPlaceUpdater;

use crate::{application::ApplicationError, error::KscaffError};

/// Wrap a store failure as a persistence error, once.
pub(crate) fn persist_error(e: KscaffError) -> KscaffError {
    match e {
        KscaffError::Application(ApplicationError::ConfigPersist { .. }) => e,
        other => ApplicationError::ConfigPersist {
            reason: other.to_string(),
        }
        .into(),
    }
}
