//! Infrastructure adapters for kscaff.
//!
//! This crate implements the ports defined in `kscaff_core::application::ports`:
//! real and in-memory filesystems, `PROJECT` file stores, the compiled-in
//! template registry, post-processing plugins and reporters.

pub mod builtin_templates;
pub mod config_store;
pub mod filesystem;
pub mod plugins;
pub mod reporter;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplates;
pub use config_store::{MemoryConfigStore, PROJECT_FILE, YamlConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use plugins::{ImportRewrite, Normalize};
pub use reporter::{MemoryReporter, TracingReporter};
