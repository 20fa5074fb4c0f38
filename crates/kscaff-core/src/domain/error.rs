// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the same failure is reported to the user and logged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid resource {field} '{value}': {reason}")]
    InvalidResource {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid project configuration: {0}")]
    InvalidConfig(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error(
        "group '{group}' is not same as existing group '{existing}'. \
         Multiple groups are not enabled in this project"
    )]
    GroupConflict { group: String, existing: String },

    #[error("unknown project version '{version}'")]
    UnsupportedVersion { version: String },

    // ========================================================================
    // Text edits
    // ========================================================================
    #[error("marker '{marker}' not found")]
    MarkerNotFound { marker: String },

    #[error("unresolved placeholder '{{{{{name}}}}}'")]
    UnresolvedPlaceholder { name: String },
}

impl DomainError {
    /// Shorthand for resource validation failures.
    pub(crate) fn invalid_resource(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResource {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResource { field, .. } => match *field {
                "group" => vec![
                    "Groups are lowercase DNS labels, e.g. 'apps' or 'batch'".into(),
                ],
                "version" => vec![
                    "Versions look like v1, v1alpha1 or v2beta3".into(),
                ],
                "kind" => vec![
                    "Kinds are PascalCase identifiers, e.g. 'CronJob'".into(),
                ],
                _ => vec!["Check the resource flags".into()],
            },
            Self::GroupConflict { existing, .. } => vec![
                format!("This project only hosts the '{}' group", existing),
                "Enable multiple groups with: kscaff edit --multigroup=true".into(),
            ],
            Self::UnsupportedVersion { version } => vec![
                format!("The PROJECT file declares version '{}'", version),
                "Supported project versions are \"1\" and \"2\"".into(),
            ],
            Self::MarkerNotFound { marker } => vec![
                format!("Restore the '{}' comment in the file", marker),
                "The marker tells kscaff where to insert generated wiring".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResource { .. }
            | Self::InvalidConfig(_)
            | Self::AbsolutePathNotAllowed { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::GroupConflict { .. } | Self::UnsupportedVersion { .. } => {
                ErrorCategory::Compatibility
            }
            Self::MarkerNotFound { .. } => ErrorCategory::NotFound,
            Self::UnresolvedPlaceholder { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
