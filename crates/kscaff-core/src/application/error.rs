//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The resource is already registered and the run is not forced.
    #[error("API resource already exists: {resource}")]
    ResourceExists { resource: String },

    /// Template lookup, placeholder substitution or a plugin failed.
    #[error("failed to render {path} from template '{template}': {reason}")]
    Render {
        path: PathBuf,
        template: String,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// Filesystem read failed.
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// An in-place update target no longer carries its marker.
    #[error("marker '{marker}' not found in {path}")]
    MarkerNotFound { path: PathBuf, marker: String },

    /// An in-place update target does not exist.
    #[error("cannot update {path}: file does not exist")]
    UpdateTargetMissing { path: PathBuf },

    /// The project configuration could not be read.
    #[error("failed to load project configuration: {reason}")]
    ConfigLoad { reason: String },

    /// The project configuration could not be saved.
    #[error("failed to persist project configuration: {reason}")]
    ConfigPersist { reason: String },

    /// `init` found an existing project.
    #[error("project already initialized at {path}")]
    ProjectExists { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("project configuration store is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ResourceExists { .. } => vec![
                "Use --force to regenerate the files of an existing resource".into(),
                "Run: kscaff list to see registered resources".into(),
            ],
            Self::Render { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "Check the configured import rewrites and plugins".into(),
            ],
            Self::Write { path, .. } | Self::Read { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are kept; re-run with --force".into(),
            ],
            Self::MarkerNotFound { path, marker } => vec![
                format!("Restore '{}' in {}", marker, path.display()),
                "The file was edited beyond recognition; add the marker comment back".into(),
            ],
            Self::UpdateTargetMissing { path } => vec![
                format!("{} is missing", path.display()),
                "Run: kscaff init to regenerate the project skeleton".into(),
            ],
            Self::ConfigLoad { .. } => vec![
                "No readable PROJECT file in the project directory".into(),
                "Run: kscaff init, or pass --project-dir".into(),
            ],
            Self::ConfigPersist { .. } => vec![
                "Check that the PROJECT file is writable".into(),
                "Re-run with --force once the file can be written".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("A PROJECT file already exists in {}", path.display()),
                "Use --force to re-initialize (existing files are kept)".into(),
            ],
            Self::StoreLockError => vec![
                "The configuration store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceExists { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::Compatibility
            }
            Self::MarkerNotFound { .. } | Self::UpdateTargetMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::ConfigLoad { .. } | Self::ConfigPersist { .. } => ErrorCategory::Configuration,
            Self::Render { .. } | Self::Write { .. } | Self::Read { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
