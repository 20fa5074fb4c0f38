//! File generation tasks and the closed set of template identities.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::common::RelativePath;

/// Identity of a template in the versioned registry.
///
/// The set is closed: adding a template means adding a variant here and a
/// body in the registry adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    // Shared
    GoMod,
    Boilerplate,

    // v1 project
    V1Main,
    V1Apis,
    V1ControllerRoot,

    // v1 resource
    V1Register,
    V1Types,
    V1VersionSuiteTest,
    V1TypesTest,
    V1Doc,
    V1Group,
    V1AddToScheme,
    V1CrdSample,

    // v1 controller
    V1Controller,
    V1AddController,
    V1ControllerTest,
    V1ControllerSuiteTest,

    // v2 project
    V2Main,

    // v2 resource
    V2Types,
    V2GroupVersionInfo,
    V2CrdSample,
    V2CrdEditorRole,
    V2CrdViewerRole,
    V2EnableWebhookPatch,
    V2EnableCaInjectionPatch,

    // v2 kustomization
    V2CrdKustomization,
    V2KustomizeConfig,

    // v2 controller
    V2SuiteTest,
    V2Controller,

    // Reconcile body fragments
    V1ReconcileExample,
    V1ReconcileStub,
    ReconcileExample,
    ReconcileStub,
}

impl TemplateId {
    pub const ALL: [TemplateId; 33] = [
        Self::GoMod,
        Self::Boilerplate,
        Self::V1Main,
        Self::V1Apis,
        Self::V1ControllerRoot,
        Self::V1Register,
        Self::V1Types,
        Self::V1VersionSuiteTest,
        Self::V1TypesTest,
        Self::V1Doc,
        Self::V1Group,
        Self::V1AddToScheme,
        Self::V1CrdSample,
        Self::V1Controller,
        Self::V1AddController,
        Self::V1ControllerTest,
        Self::V1ControllerSuiteTest,
        Self::V2Main,
        Self::V2Types,
        Self::V2GroupVersionInfo,
        Self::V2CrdSample,
        Self::V2CrdEditorRole,
        Self::V2CrdViewerRole,
        Self::V2EnableWebhookPatch,
        Self::V2EnableCaInjectionPatch,
        Self::V2CrdKustomization,
        Self::V2KustomizeConfig,
        Self::V2SuiteTest,
        Self::V2Controller,
        Self::V1ReconcileExample,
        Self::V1ReconcileStub,
        Self::ReconcileExample,
        Self::ReconcileStub,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoMod => "go-mod",
            Self::Boilerplate => "boilerplate",
            Self::V1Main => "v1/main",
            Self::V1Apis => "v1/apis",
            Self::V1ControllerRoot => "v1/controller-root",
            Self::V1Register => "v1/register",
            Self::V1Types => "v1/types",
            Self::V1VersionSuiteTest => "v1/version-suite-test",
            Self::V1TypesTest => "v1/types-test",
            Self::V1Doc => "v1/doc",
            Self::V1Group => "v1/group",
            Self::V1AddToScheme => "v1/add-to-scheme",
            Self::V1CrdSample => "v1/crd-sample",
            Self::V1Controller => "v1/controller",
            Self::V1AddController => "v1/add-controller",
            Self::V1ControllerTest => "v1/controller-test",
            Self::V1ControllerSuiteTest => "v1/controller-suite-test",
            Self::V2Main => "v2/main",
            Self::V2Types => "v2/types",
            Self::V2GroupVersionInfo => "v2/groupversion-info",
            Self::V2CrdSample => "v2/crd-sample",
            Self::V2CrdEditorRole => "v2/crd-editor-role",
            Self::V2CrdViewerRole => "v2/crd-viewer-role",
            Self::V2EnableWebhookPatch => "v2/enable-webhook-patch",
            Self::V2EnableCaInjectionPatch => "v2/enable-cainjection-patch",
            Self::V2CrdKustomization => "v2/crd-kustomization",
            Self::V2KustomizeConfig => "v2/kustomize-config",
            Self::V2SuiteTest => "v2/suite-test",
            Self::V2Controller => "v2/controller",
            Self::V1ReconcileExample => "v1/reconcile-example",
            Self::V1ReconcileStub => "v1/reconcile-stub",
            Self::ReconcileExample => "reconcile-example",
            Self::ReconcileStub => "reconcile-stub",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfExists {
    /// Skip with a warning, unless the run is forced.
    #[default]
    Skip,
    /// Never replace, even when forced. The file is maintained by in-place
    /// updates after its first generation.
    Preserve,
}

/// Per-task option bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOptions {
    pub if_exists: IfExists,
    /// Extra variables layered over the universe's render context.
    pub variables: BTreeMap<String, String>,
    /// Variables bound to another template rendered with the same context.
    pub fragments: BTreeMap<String, TemplateId>,
}

/// One output file: where it goes, what renders it, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    path: RelativePath,
    template: TemplateId,
    options: TaskOptions,
}

impl FileTask {
    pub fn new(path: RelativePath, template: TemplateId) -> Self {
        Self {
            path,
            template,
            options: TaskOptions::default(),
        }
    }

    /// Keep an existing file no matter what; see [`IfExists::Preserve`].
    pub fn preserved(mut self) -> Self {
        self.options.if_exists = IfExists::Preserve;
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_fragment(mut self, key: impl Into<String>, template: TemplateId) -> Self {
        self.options.fragments.insert(key.into(), template);
        self
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn options(&self) -> &TaskOptions {
        &self.options
    }
}

impl fmt::Display for FileTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_skip() {
        let task = FileTask::new("api/v1/foo_types.go".into(), TemplateId::V2Types);
        assert_eq!(task.options().if_exists, IfExists::Skip);
        assert_eq!(task.to_string(), "api/v1/foo_types.go (v2/types)");
    }

    #[test]
    fn builder_options() {
        let task = FileTask::new("controllers/suite_test.go".into(), TemplateId::V2SuiteTest)
            .preserved()
            .with_variable("X", "1")
            .with_fragment("BODY", TemplateId::ReconcileStub);
        assert_eq!(task.options().if_exists, IfExists::Preserve);
        assert_eq!(task.options().variables.get("X").map(String::as_str), Some("1"));
        assert_eq!(
            task.options().fragments.get("BODY"),
            Some(&TemplateId::ReconcileStub)
        );
    }

    #[test]
    fn template_names_are_unique() {
        let mut names: Vec<_> = TemplateId::ALL.iter().map(TemplateId::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 33);
    }
}
