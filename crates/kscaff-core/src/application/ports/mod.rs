//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kscaff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ConfigStore`: PROJECT file load/save
//!   - `TemplateRegistry`: Closed template set
//!   - `Reporter`: Per-file outcome sink
//!   - `Plugin`: Post-processing hook chain
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ConfigStore, FileStatus, Filesystem, Plugin, PluginError, Reporter, TemplateRegistry,
};
