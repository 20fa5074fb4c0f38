//! kscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for kscaff, a
//! scaffolding engine for controller projects: it turns a resource
//! identity into generated API and controller files, registers the
//! resource in the project's PROJECT file, and wires it into previously
//! generated files at marker comments.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           kscaff-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ApiService, ProjectService, ...)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ConfigStore, Templates...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kscaff-adapters (Infrastructure)    │
//! │ (LocalFilesystem, YamlConfigStore, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Resource, ProjectConfig, Universe,     │
//! │  strategies, marker insertion)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kscaff_core::prelude::*;
//!
//! let workspace = Workspace::new(root, filesystem, config_store, templates);
//! let mut api = ApiService::new(&workspace, Resource::new("apps", "v1", "Foo"), ApiOptions::default());
//! api.validate()?;
//! let report = api.scaffold()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApiOptions, ApiService, FileOutcome, InPlaceUpdater, InitOptions, ProjectService,
        ScaffoldOptions, ScaffoldReport, Scaffolder, Workspace,
        ports::{
            ConfigStore, FileStatus, Filesystem, Plugin, PluginError, Reporter, TemplateRegistry,
        },
    };
    pub use crate::domain::{
        FileTask, Layout, ProjectConfig, ProjectVersion, RelativePath, Resource, ResourceId,
        TemplateId, Universe,
    };
    pub use crate::error::{KscaffError, KscaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
