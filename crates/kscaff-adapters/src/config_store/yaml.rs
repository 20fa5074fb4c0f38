//! YAML `PROJECT` file store.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use kscaff_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::ProjectConfig,
    error::KscaffResult,
};

/// File name of the project configuration, at the project root.
pub const PROJECT_FILE: &str = "PROJECT";

/// Reads and writes `<root>/PROJECT` with `serde_yaml`.
///
/// ```yaml
/// version: "2"
/// domain: my.domain
/// repo: github.com/example/guestbook
/// resources:
/// - group: apps
///   version: v1
///   kind: Foo
/// ```
#[derive(Debug, Clone)]
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    /// Store for the project rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(PROJECT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for YamlConfigStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> KscaffResult<ProjectConfig> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            let reason = match e.kind() {
                io::ErrorKind::NotFound => format!("{} not found", self.path.display()),
                _ => format!("{}: {}", self.path.display(), e),
            };
            ApplicationError::ConfigLoad { reason }
        })?;

        let config: ProjectConfig =
            serde_yaml::from_str(&raw).map_err(|e| ApplicationError::ConfigLoad {
                reason: format!("{}: {}", self.path.display(), e),
            })?;
        debug!(version = %config.version, resources = config.resources.len(), "Loaded project configuration");
        Ok(config)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, config: &ProjectConfig) -> KscaffResult<()> {
        let yaml = serde_yaml::to_string(config).map_err(|e| ApplicationError::ConfigPersist {
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, yaml).map_err(|e| ApplicationError::ConfigPersist {
            reason: format!("{}: {}", self.path.display(), e),
        })?;
        debug!("Saved project configuration");
        Ok(())
    }
}
