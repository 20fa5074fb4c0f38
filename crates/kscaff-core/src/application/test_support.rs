//! In-crate fakes for service tests.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError, Workspace,
        ports::{ConfigStore, FileStatus, Filesystem, Reporter, TemplateRegistry},
    },
    domain::{ProjectConfig, TemplateId},
    error::KscaffResult,
};

pub(crate) const ROOT: &str = "/project";

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl FakeFs {
    pub(crate) fn put(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub(crate) fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, _path: &Path) -> KscaffResult<()> {
        Ok(())
    }

    fn read_file(&self, path: &Path) -> KscaffResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::Read {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> KscaffResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTemplates {
    bodies: HashMap<TemplateId, &'static str>,
}

impl FakeTemplates {
    pub(crate) fn with(id: TemplateId, body: &'static str) -> Self {
        Self::default().and(id, body)
    }

    pub(crate) fn and(mut self, id: TemplateId, body: &'static str) -> Self {
        self.bodies.insert(id, body);
        self
    }

    pub(crate) fn body(&self, id: TemplateId) -> &'static str {
        self.get(id).unwrap_or_default()
    }

    /// A one-line body for every template, echoing its id and the kind.
    pub(crate) fn all() -> Self {
        let mut t = Self::default();
        for id in TemplateId::ALL {
            let body: &'static str = match id {
                TemplateId::GoMod | TemplateId::Boilerplate => "project {{PROJECT_NAME}}\n",
                TemplateId::V1Main
                | TemplateId::V1Apis
                | TemplateId::V1ControllerRoot => "package main\n",
                TemplateId::V2Main => {
                    "import (\n\t// +kubebuilder:scaffold:imports\n)\n\
                     func init() {\n\t// +kubebuilder:scaffold:scheme\n}\n\
                     func main() {\n\t// +kubebuilder:scaffold:builder\n}\n"
                }
                TemplateId::V2CrdKustomization => {
                    "resources:\n# +kubebuilder:scaffold:crdkustomizeresource\n\
                     patchesStrategicMerge:\n# +kubebuilder:scaffold:crdkustomizewebhookpatch\n\
                     # +kubebuilder:scaffold:crdkustomizecainjectionpatch\n"
                }
                TemplateId::V2SuiteTest => {
                    "import (\n\t// +kubebuilder:scaffold:imports\n)\n\
                     func setup() {\n\t// +kubebuilder:scaffold:scheme\n}\n"
                }
                TemplateId::V2Controller | TemplateId::V1Controller => {
                    "reconciler {{KIND}}\n{{RECONCILE_BODY}}"
                }
                TemplateId::V1ReconcileExample => "v1 example body\n",
                TemplateId::V1ReconcileStub => "v1 stub body\n",
                TemplateId::ReconcileExample => "example body\n",
                TemplateId::ReconcileStub => "stub body\n",
                _ => "kind {{KIND}}\n",
            };
            t.bodies.insert(id, body);
        }
        t
    }
}

impl TemplateRegistry for FakeTemplates {
    fn get(&self, id: TemplateId) -> Option<&'static str> {
        self.bodies.get(&id).copied()
    }
}

/// Config store that keeps the last saved value.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeStore {
    config: Arc<Mutex<Option<ProjectConfig>>>,
}

impl FakeStore {
    pub(crate) fn with(config: ProjectConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(Some(config))),
        }
    }

    pub(crate) fn current(&self) -> Option<ProjectConfig> {
        self.config.lock().unwrap().clone()
    }
}

impl ConfigStore for FakeStore {
    fn exists(&self) -> bool {
        self.config.lock().unwrap().is_some()
    }

    fn load(&self) -> KscaffResult<ProjectConfig> {
        self.current().ok_or_else(|| {
            ApplicationError::ConfigLoad {
                reason: "no PROJECT file".into(),
            }
            .into()
        })
    }

    fn save(&self, config: &ProjectConfig) -> KscaffResult<()> {
        *self.config.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingReporter {
    entries: Arc<Mutex<Vec<(PathBuf, FileStatus)>>>,
}

impl RecordingReporter {
    pub(crate) fn entries(&self) -> Vec<(PathBuf, FileStatus)> {
        self.entries.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, path: &Path, status: FileStatus) {
        self.entries
            .lock()
            .unwrap()
            .push((path.to_path_buf(), status));
    }
}

pub(crate) fn workspace(fs: &FakeFs, templates: FakeTemplates) -> Workspace {
    Workspace::new(
        ROOT,
        Box::new(fs.clone()),
        Box::new(FakeStore::default()),
        Box::new(templates),
    )
}
