//! The project a run operates on, with its injected adapters.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::{
        ConfigStore, FileStatus, Filesystem, Plugin, Reporter, TemplateRegistry,
    },
    domain::{RelativePath, layout},
    error::KscaffResult,
};

struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _path: &Path, _status: FileStatus) {}
}

/// Project root plus every port a use case needs.
///
/// Services borrow the workspace; they never own adapters.
pub struct Workspace {
    root: PathBuf,
    filesystem: Box<dyn Filesystem>,
    config_store: Box<dyn ConfigStore>,
    templates: Box<dyn TemplateRegistry>,
    reporter: Box<dyn Reporter>,
    plugins: Vec<Box<dyn Plugin>>,
    default_boilerplate: String,
}

impl Workspace {
    pub fn new(
        root: impl Into<PathBuf>,
        filesystem: Box<dyn Filesystem>,
        config_store: Box<dyn ConfigStore>,
        templates: Box<dyn TemplateRegistry>,
    ) -> Self {
        Self {
            root: root.into(),
            filesystem,
            config_store,
            templates,
            reporter: Box::new(SilentReporter),
            plugins: Vec::new(),
            default_boilerplate: String::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Append a post-processing hook. Hooks run in the order added.
    pub fn with_plugin(mut self, plugin: Box<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Header used when the project has no `hack/boilerplate.go.txt`.
    pub fn with_default_boilerplate(mut self, text: impl Into<String>) -> Self {
        self.default_boilerplate = text.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a project-relative path.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path.as_path())
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn config_store(&self) -> &dyn ConfigStore {
        self.config_store.as_ref()
    }

    pub fn templates(&self) -> &dyn TemplateRegistry {
        self.templates.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn plugins(&self) -> &[Box<dyn Plugin>] {
        &self.plugins
    }

    /// The project's license header: `hack/boilerplate.go.txt` if present,
    /// otherwise the configured default.
    pub fn boilerplate(&self) -> KscaffResult<String> {
        let path = self.resolve(&layout::BOILERPLATE.into());
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Using project boilerplate");
            self.filesystem.read_file(&path)
        } else {
            Ok(self.default_boilerplate.clone())
        }
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("plugins", &self.plugins.iter().map(|p| p.name()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
