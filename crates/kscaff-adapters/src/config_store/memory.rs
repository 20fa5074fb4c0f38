//! In-memory configuration store for testing.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicUsize, Ordering},
};

use kscaff_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::ProjectConfig,
    error::KscaffResult,
};

/// Holds the configuration in memory and counts saves.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    config: Arc<RwLock<Option<ProjectConfig>>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `config`.
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(Some(config))),
            saves: Arc::default(),
        }
    }

    /// The last saved (or seeded) configuration.
    pub fn current(&self) -> Option<ProjectConfig> {
        self.config.read().ok().and_then(|c| c.clone())
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn exists(&self) -> bool {
        self.current().is_some()
    }

    fn load(&self) -> KscaffResult<ProjectConfig> {
        self.current().ok_or_else(|| {
            ApplicationError::ConfigLoad {
                reason: "no project configuration".into(),
            }
            .into()
        })
    }

    fn save(&self, config: &ProjectConfig) -> KscaffResult<()> {
        let mut slot = self
            .config
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *slot = Some(config.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
