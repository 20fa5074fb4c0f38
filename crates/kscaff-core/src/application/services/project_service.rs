//! Project-level use cases: init, edit and listing.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, Workspace,
        services::{
            persist_error,
            scaffolder::{FileOutcome, ScaffoldOptions, Scaffolder},
        },
    },
    domain::{DomainError, Phase, ProjectConfig, ProjectVersion, ResourceId, Universe, strategy},
    error::KscaffResult,
};

/// Input for `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub version: ProjectVersion,
    pub domain: String,
    /// Go module path, e.g. `github.com/example/guestbook`.
    pub repo: String,
    pub multi_group: bool,
    pub force: bool,
}

pub struct ProjectService<'a> {
    workspace: &'a Workspace,
}

impl<'a> ProjectService<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Create the project configuration and seed the skeleton files.
    ///
    /// The configuration is saved before any file is written. A forced run
    /// over an existing project keeps its registry and version; only the
    /// layout may change, under the same rules as [`Self::set_multi_group`].
    #[instrument(skip_all, fields(version = %options.version, repo = %options.repo))]
    pub fn init(&self, options: &InitOptions) -> KscaffResult<Vec<FileOutcome>> {
        let store = self.workspace.config_store();
        if store.exists() && !options.force {
            return Err(ApplicationError::ProjectExists {
                path: self.workspace.root().to_path_buf(),
            }
            .into());
        }
        if options.repo.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "repo" }.into());
        }

        let config = if store.exists() {
            self.reinit_config(options)?
        } else {
            let mut config = ProjectConfig::new(options.version)
                .with_domain(&options.domain)
                .with_repo(&options.repo);
            if options.multi_group {
                config.set_multi_group(true)?;
            }
            config
        };

        store.save(&config).map_err(persist_error)?;
        info!(resources = config.resources.len(), "Wrote project configuration");

        let universe = Universe::builder()
            .config(&config)
            .boilerplate(self.workspace.boilerplate()?)
            .build()?;
        Scaffolder::new(self.workspace).execute(
            &universe,
            ScaffoldOptions {
                force: options.force,
            },
            &strategy::plan(Phase::Init, &universe)?,
        )
    }

    /// Switch the multi-group layout on or off.
    #[instrument(skip(self))]
    pub fn set_multi_group(&self, multi_group: bool) -> KscaffResult<ProjectConfig> {
        let store = self.workspace.config_store();
        let mut config = store.load()?;
        if config.multi_group == multi_group {
            return Ok(config);
        }
        config.set_multi_group(multi_group)?;
        store.save(&config).map_err(persist_error)?;
        info!(multi_group, "Updated project layout");
        Ok(config)
    }

    /// The stored configuration, checked against a forced `init`.
    fn reinit_config(&self, options: &InitOptions) -> KscaffResult<ProjectConfig> {
        let mut config = self.workspace.config_store().load()?;
        if config.version != options.version.as_str() {
            return Err(DomainError::InvalidConfig(format!(
                "project version is '{}' and cannot be changed to '{}'",
                config.version, options.version
            ))
            .into());
        }
        if config.multi_group != options.multi_group {
            config.set_multi_group(options.multi_group)?;
        }
        if config.domain != options.domain || config.repo != options.repo {
            warn!(
                domain = %config.domain,
                repo = %config.repo,
                "Keeping the recorded domain and repo"
            );
        }
        Ok(config)
    }

    /// Registered resources, sorted by identity.
    pub fn resources(&self) -> KscaffResult<Vec<ResourceId>> {
        let mut resources = self.workspace.config_store().load()?.resources;
        resources.sort();
        Ok(resources)
    }
}
