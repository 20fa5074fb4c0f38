//! In-place Updater: marker-scoped, idempotent edits of generated files.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, Workspace, ports::FileStatus},
    domain::{DomainError, Insertion, RelativePath, apply_insertions},
    error::{KscaffError, KscaffResult},
};

pub struct InPlaceUpdater<'a> {
    workspace: &'a Workspace,
}

impl<'a> InPlaceUpdater<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Insert `insertions` into the file at `path`.
    ///
    /// Returns [`FileStatus::Unchanged`] without writing when every
    /// statement is already present. A missing marker fails before any byte
    /// is written.
    #[instrument(skip_all, fields(path = %path))]
    pub fn update(&self, path: &RelativePath, insertions: &[Insertion]) -> KscaffResult<FileStatus> {
        let target = self.workspace.resolve(path);
        let fs = self.workspace.filesystem();

        if !fs.exists(&target) {
            return Err(ApplicationError::UpdateTargetMissing {
                path: path.as_path().to_path_buf(),
            }
            .into());
        }

        let content = fs.read_file(&target)?;
        let edited = apply_insertions(&content, insertions).map_err(|e| match e {
            DomainError::MarkerNotFound { marker } => {
                KscaffError::from(ApplicationError::MarkerNotFound {
                    path: path.as_path().to_path_buf(),
                    marker,
                })
            }
            other => KscaffError::from(other),
        })?;

        let status = if edited.changed() {
            fs.write_file(&target, &edited.content)?;
            info!(inserted = edited.inserted, "Updated in place");
            FileStatus::Updated
        } else {
            debug!("Already up to date");
            FileStatus::Unchanged
        };

        self.workspace.reporter().report(path.as_path(), status);
        Ok(status)
    }
}
