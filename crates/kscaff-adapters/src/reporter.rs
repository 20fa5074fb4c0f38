//! Reporting sinks.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::info;

use kscaff_core::application::ports::{FileStatus, Reporter};

/// Emits one `info` event per file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, path: &Path, status: FileStatus) {
        info!(path = %path.display(), %status, "scaffold");
    }
}

/// Records every report for later inspection.
///
/// Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    entries: Arc<Mutex<Vec<(PathBuf, FileStatus)>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(PathBuf, FileStatus)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Paths reported with `status`, in report order.
    pub fn paths_with(&self, status: FileStatus) -> Vec<PathBuf> {
        self.entries()
            .into_iter()
            .filter(|(_, s)| *s == status)
            .map(|(p, _)| p)
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, path: &Path, status: FileStatus) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((path.to_path_buf(), status));
        }
    }
}
