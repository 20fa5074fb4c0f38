//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kscaff-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::domain::{ProjectConfig, RelativePath, TemplateId, Universe};
use crate::error::KscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `kscaff_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are already joined onto the project root.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KscaffResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> KscaffResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KscaffResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted project configuration.
///
/// Implemented by:
/// - `kscaff_adapters::config_store::YamlConfigStore` (PROJECT file)
/// - `kscaff_adapters::config_store::MemoryConfigStore` (testing)
pub trait ConfigStore: Send + Sync {
    /// Whether a configuration has been persisted yet.
    fn exists(&self) -> bool;

    fn load(&self) -> KscaffResult<ProjectConfig>;

    fn save(&self, config: &ProjectConfig) -> KscaffResult<()>;
}

/// Port for the closed, versioned template set.
pub trait TemplateRegistry: Send + Sync {
    /// Body of a template, `None` if this registry does not carry it.
    fn get(&self, id: TemplateId) -> Option<&'static str>;
}

/// What happened to one file during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Created,
    Overwritten,
    /// Existing file left alone by the write policy.
    Skipped,
    /// Existing file kept because later runs only edit it in place.
    Preserved,
    /// Existing file edited in place.
    Updated,
    /// In-place update found nothing to add.
    Unchanged,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "create",
            Self::Overwritten => "overwrite",
            Self::Skipped => "skip",
            Self::Preserved => "keep",
            Self::Updated => "update",
            Self::Unchanged => "unchanged",
        }
    }

    /// Whether bytes on disk changed.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Created | Self::Overwritten | Self::Updated)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for the reporting sink. Receives every path a run touches.
///
/// Implemented by:
/// - `kscaff_adapters::reporter::TracingReporter`
/// - `kscaff_adapters::reporter::MemoryReporter` (testing)
/// - the CLI output manager
pub trait Reporter: Send + Sync {
    fn report(&self, path: &Path, status: FileStatus);
}

/// Failure raised by a post-processing plugin.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct PluginError(pub String);

/// Post-processing hook applied to rendered content before it is written.
///
/// Plugins run in registration order. Each must be a pure function of its
/// inputs; no state may carry over from one file to the next.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn process(
        &self,
        path: &RelativePath,
        content: String,
        universe: &Universe,
    ) -> Result<String, PluginError>;
}
