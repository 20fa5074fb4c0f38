//! API Orchestration - the `create api` use case.
//!
//! Coordinates one resource scaffold:
//! 1. Resolve the project configuration and validate the resource
//! 2. Register and persist the resource (v2) before any resource file exists
//! 3. Render resource, kustomization and controller phases
//! 4. Wire the entry point last

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, Workspace,
        ports::FileStatus,
        services::{
            scaffolder::{FileOutcome, ScaffoldOptions, Scaffolder},
            persist_error,
            updater::InPlaceUpdater,
        },
    },
    domain::{
        Phase, ProjectConfig, ProjectVersion, RelativePath, Resource, ResourceId, Universe,
        layout, strategy,
    },
    error::KscaffResult,
};

/// What a `create api` run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiOptions {
    /// Generate the API type files.
    pub do_resource: bool,
    /// Generate the controller files.
    pub do_controller: bool,
    /// Overwrite existing files and accept an already registered resource.
    pub force: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            do_resource: true,
            do_controller: true,
            force: false,
        }
    }
}

/// Result of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub resource: ResourceId,
    /// Whether this run added the resource to the configuration.
    pub registered: bool,
    /// Every path touched, in order.
    pub files: Vec<FileOutcome>,
}

impl ScaffoldReport {
    pub fn status_of(&self, path: impl AsRef<Path>) -> Option<FileStatus> {
        self.files
            .iter()
            .find(|f| f.path.as_path() == path.as_ref())
            .map(|f| f.status)
    }

    /// Number of files whose bytes changed.
    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.status.is_write()).count()
    }
}

/// Scaffolds one API resource and/or its controller.
pub struct ApiService<'a> {
    workspace: &'a Workspace,
    resource: Resource,
    options: ApiOptions,
    config: Option<ProjectConfig>,
}

impl<'a> ApiService<'a> {
    pub fn new(workspace: &'a Workspace, resource: Resource, options: ApiOptions) -> Self {
        Self {
            workspace,
            resource,
            options,
            config: None,
        }
    }

    /// Use an already loaded configuration instead of the store's.
    pub fn with_config(mut self, config: ProjectConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The resource descriptor as it stands, including flags cleared by a
    /// run.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The configuration, once resolved.
    pub fn config(&self) -> Option<&ProjectConfig> {
        self.config.as_ref()
    }

    /// Check preconditions without touching the project.
    #[instrument(skip_all, fields(resource = %self.resource.id()))]
    pub fn validate(&mut self) -> KscaffResult<()> {
        let id = self.resource.id().clone();
        let registered = self.config_mut()?.has_resource(&id);
        self.resource.validate()?;

        if registered && !self.options.force {
            return Err(ApplicationError::ResourceExists {
                resource: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Generate files, register the resource and wire the project.
    ///
    /// Errors abort immediately; files written before the failure stay on
    /// disk and a forced re-run completes the project.
    #[instrument(skip_all, fields(resource = %self.resource.id(), force = self.options.force))]
    pub fn scaffold(&mut self) -> KscaffResult<ScaffoldReport> {
        let version = self.config_mut()?.project_version()?;
        let mut files = Vec::new();

        let registered = match version {
            ProjectVersion::V1 => {
                self.scaffold_v1(&mut files)?;
                false
            }
            ProjectVersion::V2 => self.scaffold_v2(&mut files)?,
        };

        info!(files = files.len(), registered, "Scaffold completed");
        Ok(ScaffoldReport {
            resource: self.resource.id().clone(),
            registered,
            files,
        })
    }

    // -------------------------------------------------------------------------
    // Version strategies
    // -------------------------------------------------------------------------

    fn scaffold_v1(&mut self, files: &mut Vec<FileOutcome>) -> KscaffResult<()> {
        let ws = self.workspace;
        let scaffolder = Scaffolder::new(ws);
        let boilerplate = ws.boilerplate()?;
        let options = self.scaffold_options();

        if self.options.do_resource {
            info!("Scaffolding API types");
            let universe = self.build_universe(&boilerplate)?;
            files.extend(scaffolder.execute(
                &universe,
                options,
                &strategy::plan(Phase::Resource, &universe)?,
            )?);
        } else {
            self.resource.disable_example_reconcile_body();
        }

        if self.options.do_controller {
            info!("Scaffolding controller");
            let universe = self.build_universe(&boilerplate)?;
            files.extend(scaffolder.execute(
                &universe,
                options,
                &strategy::plan(Phase::Controller, &universe)?,
            )?);
        }

        Ok(())
    }

    fn scaffold_v2(&mut self, files: &mut Vec<FileOutcome>) -> KscaffResult<bool> {
        let ws = self.workspace;
        let scaffolder = Scaffolder::new(ws);
        let updater = InPlaceUpdater::new(ws);
        let boilerplate = ws.boilerplate()?;
        let options = self.scaffold_options();
        let mut registered = false;

        if self.options.do_resource {
            registered = self.register_resource()?;

            info!("Scaffolding API types");
            let universe = self.build_universe(&boilerplate)?;
            files.extend(scaffolder.execute(
                &universe,
                options,
                &strategy::plan(Phase::Resource, &universe)?,
            )?);

            info!("Scaffolding CRD kustomization");
            let universe = self.build_universe(&boilerplate)?;
            files.extend(scaffolder.execute(
                &universe,
                options,
                &strategy::plan(Phase::Kustomization, &universe)?,
            )?);
            let kustomization = RelativePath::from(layout::v2::CRD_KUSTOMIZATION);
            let status =
                updater.update(&kustomization, &strategy::kustomization_insertions(&universe)?)?;
            record(files, kustomization, status);
        } else {
            // An example body for a built-in type would want examples for
            // every type that type creates, without end.
            self.resource.disable_example_reconcile_body();
        }

        if self.options.do_controller {
            info!("Scaffolding controller");
            let universe = self.build_universe(&boilerplate)?;
            files.extend(scaffolder.execute(
                &universe,
                options,
                &strategy::plan(Phase::Controller, &universe)?,
            )?);

            let suite = layout::v2::suite_test(&self.resource, universe.layout());
            let status = updater.update(&suite, &strategy::suite_insertions(&universe)?)?;
            record(files, suite, status);
        }

        let universe = self.build_universe(&boilerplate)?;
        let main = RelativePath::from(layout::v2::MAIN);
        let status = updater.update(
            &main,
            &strategy::main_insertions(
                &universe,
                self.options.do_resource,
                self.options.do_controller,
            )?,
        )?;
        record(files, main, status);

        Ok(registered)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Add the resource to the configuration and persist it if it is new.
    fn register_resource(&mut self) -> KscaffResult<bool> {
        let ws = self.workspace;
        let force = self.options.force;
        let id = self.resource.id().clone();
        let config = self.config_mut()?;

        if config.has_resource(&id) && !force {
            return Err(ApplicationError::ResourceExists {
                resource: id.to_string(),
            }
            .into());
        }
        config.check_group(&id.group)?;

        if !config.add_resource(id)? {
            return Ok(false);
        }

        ws.config_store().save(config).map_err(persist_error)?;
        info!(resource = %self.resource.id(), "Registered resource");
        Ok(true)
    }

    fn config_mut(&mut self) -> KscaffResult<&mut ProjectConfig> {
        let config = match self.config.take() {
            Some(config) => config,
            None => self.workspace.config_store().load()?,
        };
        Ok(self.config.insert(config))
    }

    /// A fresh snapshot; the configuration may have changed since the last.
    fn build_universe(&mut self, boilerplate: &str) -> KscaffResult<Universe> {
        let builder = Universe::builder().config(self.config_mut()?);
        Ok(builder
            .resource(&self.resource)
            .boilerplate(boilerplate)
            .build()?)
    }

    fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            force: self.options.force,
        }
    }
}

/// Record an in-place update. It supersedes a `Preserved` outcome for the
/// same path; a file created earlier in the run stays `Created`.
fn record(files: &mut Vec<FileOutcome>, path: RelativePath, status: FileStatus) {
    match files.iter_mut().find(|f| f.path == path) {
        Some(existing) if existing.status == FileStatus::Preserved => existing.status = status,
        Some(_) => {}
        None => files.push(FileOutcome { path, status }),
    }
}
