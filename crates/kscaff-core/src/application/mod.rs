//! Application layer for kscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ApiService, ProjectService,
//!   Scaffolder, InPlaceUpdater)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main services
pub use services::{
    ApiOptions, ApiService, FileOutcome, InPlaceUpdater, InitOptions, ProjectService,
    ScaffoldOptions, ScaffoldReport, Scaffolder,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ConfigStore, FileStatus, Filesystem, Plugin, PluginError, Reporter, TemplateRegistry,
};

pub use error::ApplicationError;
pub use workspace::Workspace;
