// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kscaff.
//!
//! This module contains pure scaffolding logic with no I/O. The filesystem,
//! the PROJECT file, template bodies and output all sit behind ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: paths are computed, never touched
//! - **Deterministic**: the same resource and layout always yield the same
//!   tasks, paths and insertions
//! - **Closed version set**: v1/v2 behavior is a `match`, not a trait object
//!
pub mod entities;
pub mod error;
pub mod layout;
pub mod strategy;
pub mod value_objects;

pub use entities::{
    common::RelativePath,
    file_task::{FileTask, IfExists, TaskOptions, TemplateId},
    marker::{Edited, Insertion, Marker, apply_insertions},
    project_config::ProjectConfig,
    render_context::RenderContext,
    resource::{Resource, ResourceId},
    universe::{Universe, UniverseBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use strategy::{Phase, RECONCILE_BODY};

pub use value_objects::{Layout, ProjectVersion};
