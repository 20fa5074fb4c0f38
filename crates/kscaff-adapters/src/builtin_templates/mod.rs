//! Template bodies that ship with the binary.
//!
//! Bodies are plain text with `{{NAME}}` placeholders. Every Go body starts
//! with `{{BOILERPLATE}}`, which renders to the license header followed by a
//! blank line, or to nothing when the project has no header.

mod v1;
mod v2;

use kscaff_core::{application::ports::TemplateRegistry, domain::TemplateId};

/// Registry over the compiled-in bodies.
///
/// The lookup is an exhaustive `match`, so a new [`TemplateId`] without a
/// body does not compile.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    pub fn body(id: TemplateId) -> &'static str {
        match id {
            TemplateId::GoMod => GO_MOD,
            TemplateId::Boilerplate => BOILERPLATE,

            TemplateId::V1Main => v1::MAIN,
            TemplateId::V1Apis => v1::APIS,
            TemplateId::V1ControllerRoot => v1::CONTROLLER_ROOT,
            TemplateId::V1Register => v1::REGISTER,
            TemplateId::V1Types => v1::TYPES,
            TemplateId::V1VersionSuiteTest => v1::VERSION_SUITE_TEST,
            TemplateId::V1TypesTest => v1::TYPES_TEST,
            TemplateId::V1Doc => v1::DOC,
            TemplateId::V1Group => v1::GROUP,
            TemplateId::V1AddToScheme => v1::ADD_TO_SCHEME,
            TemplateId::V1CrdSample => v1::CRD_SAMPLE,
            TemplateId::V1Controller => v1::CONTROLLER,
            TemplateId::V1AddController => v1::ADD_CONTROLLER,
            TemplateId::V1ControllerTest => v1::CONTROLLER_TEST,
            TemplateId::V1ControllerSuiteTest => v1::CONTROLLER_SUITE_TEST,
            TemplateId::V1ReconcileExample => v1::RECONCILE_EXAMPLE,
            TemplateId::V1ReconcileStub => v1::RECONCILE_STUB,

            TemplateId::V2Main => v2::MAIN,
            TemplateId::V2Types => v2::TYPES,
            TemplateId::V2GroupVersionInfo => v2::GROUP_VERSION_INFO,
            TemplateId::V2CrdSample => v2::CRD_SAMPLE,
            TemplateId::V2CrdEditorRole => v2::CRD_EDITOR_ROLE,
            TemplateId::V2CrdViewerRole => v2::CRD_VIEWER_ROLE,
            TemplateId::V2EnableWebhookPatch => v2::ENABLE_WEBHOOK_PATCH,
            TemplateId::V2EnableCaInjectionPatch => v2::ENABLE_CAINJECTION_PATCH,
            TemplateId::V2CrdKustomization => v2::CRD_KUSTOMIZATION,
            TemplateId::V2KustomizeConfig => v2::KUSTOMIZE_CONFIG,
            TemplateId::V2SuiteTest => v2::SUITE_TEST,
            TemplateId::V2Controller => v2::CONTROLLER,
            TemplateId::ReconcileExample => v2::RECONCILE_EXAMPLE,
            TemplateId::ReconcileStub => v2::RECONCILE_STUB,
        }
    }
}

impl TemplateRegistry for BuiltinTemplates {
    fn get(&self, id: TemplateId) -> Option<&'static str> {
        Some(Self::body(id))
    }
}

const GO_MOD: &str = r#"module {{REPO}}

go 1.13

require (
	github.com/go-logr/logr v0.1.0
	github.com/onsi/ginkgo v1.11.0
	github.com/onsi/gomega v1.8.1
	k8s.io/apimachinery v0.17.2
	k8s.io/client-go v0.17.2
	sigs.k8s.io/controller-runtime v0.5.0
)
"#;

const BOILERPLATE: &str = "{{BOILERPLATE_TEXT}}\n";
