//! Version strategies.
//!
//! Each project version owns a fixed, ordered task list per generation
//! phase. Selection is a plain `match` on [`ProjectVersion`]; there is no
//! runtime transition between versions.

use crate::domain::{
    entities::{
        file_task::{FileTask, TemplateId},
        marker::{Insertion, Marker},
        resource::Resource,
        universe::Universe,
    },
    error::DomainError,
    layout,
    value_objects::{Layout, ProjectVersion},
};

/// Variable the controller templates use for the reconcile body.
pub const RECONCILE_BODY: &str = "RECONCILE_BODY";

/// A logical generation phase. A fresh [`Universe`] is built for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Project skeleton written by `init`.
    Init,
    /// API type files.
    Resource,
    /// CRD kustomization manifests (v2 only).
    Kustomization,
    /// Controller files.
    Controller,
}

/// Ordered tasks for `phase` under the universe's project version.
///
/// Order matters: the types file precedes the CRD sample, which precedes
/// the RBAC roles. Phases a version does not have yield an empty list.
pub fn plan(phase: Phase, universe: &Universe) -> Result<Vec<FileTask>, DomainError> {
    if phase == Phase::Init {
        return Ok(match universe.version() {
            ProjectVersion::V1 => v1::init(),
            ProjectVersion::V2 => v2::init(),
        });
    }

    let r = universe
        .resource()
        .ok_or(DomainError::MissingRequiredField { field: "resource" })?;

    Ok(match (universe.version(), phase) {
        (ProjectVersion::V1, Phase::Resource) => v1::resource(r),
        (ProjectVersion::V1, Phase::Controller) => v1::controller(r),
        (ProjectVersion::V1, _) => Vec::new(),
        (ProjectVersion::V2, Phase::Resource) => v2::resource(r, universe.layout()),
        (ProjectVersion::V2, Phase::Kustomization) => v2::kustomization(),
        (ProjectVersion::V2, Phase::Controller) => v2::controller(r, universe.layout()),
        (ProjectVersion::V2, Phase::Init) => Vec::new(),
    })
}

fn reconcile_body(version: ProjectVersion, r: &Resource) -> TemplateId {
    match (version, r.create_example_reconcile_body()) {
        (ProjectVersion::V1, true) => TemplateId::V1ReconcileExample,
        (ProjectVersion::V1, false) => TemplateId::V1ReconcileStub,
        (ProjectVersion::V2, true) => TemplateId::ReconcileExample,
        (ProjectVersion::V2, false) => TemplateId::ReconcileStub,
    }
}

fn shared_init() -> Vec<FileTask> {
    vec![
        FileTask::new(layout::GO_MOD.into(), TemplateId::GoMod),
        FileTask::new(layout::BOILERPLATE.into(), TemplateId::Boilerplate),
    ]
}

mod v1 {
    use super::*;

    pub(super) fn init() -> Vec<FileTask> {
        let mut tasks = shared_init();
        tasks.extend([
            FileTask::new(layout::v1::MAIN.into(), TemplateId::V1Main),
            FileTask::new(layout::v1::APIS.into(), TemplateId::V1Apis),
            FileTask::new(layout::v1::CONTROLLER.into(), TemplateId::V1ControllerRoot),
        ]);
        tasks
    }

    pub(super) fn resource(r: &Resource) -> Vec<FileTask> {
        vec![
            FileTask::new(layout::v1::register(r), TemplateId::V1Register),
            FileTask::new(layout::v1::types(r), TemplateId::V1Types),
            FileTask::new(layout::v1::version_suite_test(r), TemplateId::V1VersionSuiteTest),
            FileTask::new(layout::v1::types_test(r), TemplateId::V1TypesTest),
            FileTask::new(layout::v1::doc(r), TemplateId::V1Doc),
            FileTask::new(layout::v1::group(r), TemplateId::V1Group),
            FileTask::new(layout::v1::add_to_scheme(r), TemplateId::V1AddToScheme),
            FileTask::new(layout::v1::crd_sample(r), TemplateId::V1CrdSample),
        ]
    }

    pub(super) fn controller(r: &Resource) -> Vec<FileTask> {
        vec![
            FileTask::new(layout::v1::controller(r), TemplateId::V1Controller)
                .with_fragment(RECONCILE_BODY, reconcile_body(ProjectVersion::V1, r)),
            FileTask::new(layout::v1::add_controller(r), TemplateId::V1AddController),
            FileTask::new(layout::v1::controller_test(r), TemplateId::V1ControllerTest),
            FileTask::new(
                layout::v1::controller_suite_test(r),
                TemplateId::V1ControllerSuiteTest,
            ),
        ]
    }
}

mod v2 {
    use super::*;

    pub(super) fn init() -> Vec<FileTask> {
        let mut tasks = shared_init();
        tasks.push(FileTask::new(layout::v2::MAIN.into(), TemplateId::V2Main).preserved());
        tasks
    }

    pub(super) fn resource(r: &Resource, l: Layout) -> Vec<FileTask> {
        vec![
            FileTask::new(layout::v2::types(r, l), TemplateId::V2Types),
            FileTask::new(layout::v2::group_version_info(r, l), TemplateId::V2GroupVersionInfo),
            FileTask::new(layout::v2::crd_sample(r), TemplateId::V2CrdSample),
            FileTask::new(layout::v2::editor_role(r), TemplateId::V2CrdEditorRole),
            FileTask::new(layout::v2::viewer_role(r), TemplateId::V2CrdViewerRole),
            FileTask::new(layout::v2::webhook_patch(r), TemplateId::V2EnableWebhookPatch),
            FileTask::new(
                layout::v2::cainjection_patch(r),
                TemplateId::V2EnableCaInjectionPatch,
            ),
        ]
    }

    pub(super) fn kustomization() -> Vec<FileTask> {
        vec![
            FileTask::new(
                layout::v2::CRD_KUSTOMIZATION.into(),
                TemplateId::V2CrdKustomization,
            )
            .preserved(),
            FileTask::new(
                layout::v2::CRD_KUSTOMIZE_CONFIG.into(),
                TemplateId::V2KustomizeConfig,
            )
            .preserved(),
        ]
    }

    pub(super) fn controller(r: &Resource, l: Layout) -> Vec<FileTask> {
        let crd_bases = match l {
            Layout::SingleGroup => r#"[]string{filepath.Join("..", "config", "crd", "bases")}"#,
            Layout::MultiGroup => {
                r#"[]string{filepath.Join("..", "..", "config", "crd", "bases")}"#
            }
        };
        vec![
            FileTask::new(layout::v2::suite_test(r, l), TemplateId::V2SuiteTest)
                .with_variable("CRD_BASES", crd_bases)
                .preserved(),
            FileTask::new(layout::v2::controller(r, l), TemplateId::V2Controller)
                .with_fragment(RECONCILE_BODY, reconcile_body(ProjectVersion::V2, r)),
        ]
    }
}

// ============================================================================
// In-place wiring (v2)
// ============================================================================

fn require_resource(universe: &Universe) -> Result<&Resource, DomainError> {
    universe
        .resource()
        .ok_or(DomainError::MissingRequiredField { field: "resource" })
}

fn api_import(universe: &Universe, r: &Resource) -> String {
    format!(
        "{} \"{}\"",
        r.import_alias(),
        universe.import_path(&layout::v2::api_package(r, universe.layout()))
    )
}

/// Qualifier under which `main.go` refers to the controllers package.
fn controllers_qualifier(r: &Resource, l: Layout) -> String {
    match l {
        Layout::SingleGroup => "controllers".to_string(),
        Layout::MultiGroup => format!("{}controller", r.group().replace(['.', '-'], "")),
    }
}

/// Entries referencing the new CRD in `config/crd/kustomization.yaml`.
pub fn kustomization_insertions(universe: &Universe) -> Result<Vec<Insertion>, DomainError> {
    let r = require_resource(universe)?;
    let plural = r.plural();
    Ok(vec![
        Insertion::new(
            Marker::CRD_RESOURCE,
            format!(
                "- bases/{}_{}.yaml",
                r.group_domain(&universe.config().domain),
                plural
            ),
        ),
        Insertion::new(
            Marker::CRD_WEBHOOK_PATCH,
            format!("#- patches/webhook_in_{plural}.yaml"),
        ),
        Insertion::new(
            Marker::CRD_CAINJECTION_PATCH,
            format!("#- patches/cainjection_in_{plural}.yaml"),
        ),
    ])
}

/// Scheme registration for the controllers' test suite bootstrap.
pub fn suite_insertions(universe: &Universe) -> Result<Vec<Insertion>, DomainError> {
    let r = require_resource(universe)?;
    Ok(vec![
        Insertion::new(Marker::GO_IMPORTS, api_import(universe, r)),
        Insertion::new(
            Marker::GO_SCHEME,
            format!(
                "err = {}.AddToScheme(scheme.Scheme)\nExpect(err).NotTo(HaveOccurred())",
                r.import_alias()
            ),
        ),
    ])
}

/// Entry point wiring for a resource and/or its controller.
pub fn main_insertions(
    universe: &Universe,
    wire_resource: bool,
    wire_controller: bool,
) -> Result<Vec<Insertion>, DomainError> {
    let r = require_resource(universe)?;
    let l = universe.layout();
    let mut insertions = Vec::new();

    if wire_resource {
        insertions.push(Insertion::new(Marker::GO_IMPORTS, api_import(universe, r)));
    }

    if wire_controller {
        let package = universe.import_path(&layout::v2::controllers_package(r, l));
        let import = match l {
            Layout::SingleGroup => format!("\"{package}\""),
            Layout::MultiGroup => format!("{} \"{package}\"", controllers_qualifier(r, l)),
        };
        insertions.push(Insertion::new(Marker::GO_IMPORTS, import));
    }

    if wire_resource {
        insertions.push(Insertion::new(
            Marker::GO_SCHEME,
            format!("_ = {}.AddToScheme(scheme)", r.import_alias()),
        ));
    }

    if wire_controller {
        let logger = match l {
            Layout::SingleGroup => format!("ctrl.Log.WithName(\"controllers\").WithName(\"{}\")", r.kind()),
            Layout::MultiGroup => format!(
                "ctrl.Log.WithName(\"controllers\").WithName(\"{}\").WithName(\"{}\")",
                r.group(),
                r.kind()
            ),
        };
        insertions.push(Insertion::new(
            Marker::GO_BUILDER,
            format!(
                "if err = (&{q}.{kind}Reconciler{{\n\
                 \tClient: mgr.GetClient(),\n\
                 \tLog:    {logger},\n\
                 \tScheme: mgr.GetScheme(),\n\
                 }}).SetupWithManager(mgr); err != nil {{\n\
                 \tsetupLog.Error(err, \"unable to create controller\", \"controller\", \"{kind}\")\n\
                 \tos.Exit(1)\n\
                 }}",
                q = controllers_qualifier(r, l),
                kind = r.kind(),
            ),
        ));
    }

    Ok(insertions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::project_config::ProjectConfig;

    fn universe(version: ProjectVersion, multi_group: bool, resource: Option<Resource>) -> Universe {
        let mut cfg = ProjectConfig::new(version)
            .with_domain("my.domain")
            .with_repo("github.com/example/guestbook");
        cfg.multi_group = multi_group;
        let mut b = Universe::builder().config(&cfg);
        if let Some(r) = &resource {
            b = b.resource(r);
        }
        b.build().unwrap()
    }

    fn paths(tasks: &[FileTask]) -> Vec<String> {
        tasks.iter().map(|t| t.path().to_string()).collect()
    }

    fn foo() -> Resource {
        Resource::new("apps", "v1", "Foo")
    }

    #[test]
    fn v2_resource_order() {
        let u = universe(ProjectVersion::V2, false, Some(foo()));
        let tasks = plan(Phase::Resource, &u).unwrap();
        assert_eq!(
            paths(&tasks),
            [
                "api/v1/foo_types.go",
                "api/v1/groupversion_info.go",
                "config/samples/apps_v1_foo.yaml",
                "config/rbac/foo_editor_role.yaml",
                "config/rbac/foo_viewer_role.yaml",
                "config/crd/patches/webhook_in_foos.yaml",
                "config/crd/patches/cainjection_in_foos.yaml",
            ]
        );
    }

    #[test]
    fn v2_controller_uses_layout_and_preserves_suite() {
        let u = universe(ProjectVersion::V2, true, Some(foo()));
        let tasks = plan(Phase::Controller, &u).unwrap();
        assert_eq!(
            paths(&tasks),
            ["controllers/apps/suite_test.go", "controllers/apps/foo_controller.go"]
        );
        assert_eq!(tasks[0].options().if_exists, crate::domain::entities::file_task::IfExists::Preserve);
    }

    #[test]
    fn reconcile_fragment_follows_descriptor() {
        let mut r = foo();
        let u = universe(ProjectVersion::V2, false, Some(r.clone()));
        let tasks = plan(Phase::Controller, &u).unwrap();
        assert_eq!(
            tasks[1].options().fragments.get(RECONCILE_BODY),
            Some(&TemplateId::ReconcileExample)
        );

        r.disable_example_reconcile_body();
        let u = universe(ProjectVersion::V2, false, Some(r));
        let tasks = plan(Phase::Controller, &u).unwrap();
        assert_eq!(
            tasks[1].options().fragments.get(RECONCILE_BODY),
            Some(&TemplateId::ReconcileStub)
        );
    }

    #[test]
    fn v1_controller_uses_v1_fragments() {
        let r = foo().with_example_reconcile_body(false);
        let u = universe(ProjectVersion::V1, false, Some(r));
        let tasks = plan(Phase::Controller, &u).unwrap();
        assert_eq!(
            tasks[0].options().fragments.get(RECONCILE_BODY),
            Some(&TemplateId::V1ReconcileStub)
        );
    }

    #[test]
    fn suite_crd_path_depends_on_layout() {
        let u = universe(ProjectVersion::V2, true, Some(foo()));
        let tasks = plan(Phase::Controller, &u).unwrap();
        assert!(
            tasks[0].options().variables["CRD_BASES"].starts_with(r#"[]string{filepath.Join("..", "..""#)
        );
    }

    #[test]
    fn v1_has_no_kustomization_phase() {
        let u = universe(ProjectVersion::V1, false, Some(foo()));
        assert!(plan(Phase::Kustomization, &u).unwrap().is_empty());
        let resource = paths(&plan(Phase::Resource, &u).unwrap());
        assert!(resource.contains(&"pkg/apis/apps/v1/foo_types.go".to_string()));
        assert!(resource.contains(&"pkg/apis/apps/v1/foo_types_test.go".to_string()));
        let controller = paths(&plan(Phase::Controller, &u).unwrap());
        assert_eq!(controller[0], "pkg/controller/foo/foo_controller.go");
    }

    #[test]
    fn v1_and_v2_file_sets_are_disjoint() {
        let v1 = universe(ProjectVersion::V1, false, Some(foo()));
        let v2 = universe(ProjectVersion::V2, false, Some(foo()));
        let a = paths(&plan(Phase::Resource, &v1).unwrap());
        let b = paths(&plan(Phase::Resource, &v2).unwrap());
        assert!(a.iter().all(|p| p.starts_with("pkg/") || p.starts_with("config/samples")));
        assert!(b.iter().all(|p| !p.starts_with("pkg/")));
    }

    #[test]
    fn resource_phases_require_resource() {
        let u = universe(ProjectVersion::V2, false, None);
        assert_eq!(
            plan(Phase::Resource, &u).unwrap_err(),
            DomainError::MissingRequiredField { field: "resource" }
        );
        assert_eq!(paths(&plan(Phase::Init, &u).unwrap())[2], "main.go");
    }

    #[test]
    fn kustomization_entries() {
        let u = universe(ProjectVersion::V2, false, Some(foo()));
        let ins = kustomization_insertions(&u).unwrap();
        assert_eq!(ins[0].statement, "- bases/apps.my.domain_foos.yaml");
        assert_eq!(ins[1].statement, "#- patches/webhook_in_foos.yaml");
    }

    #[test]
    fn main_wiring_single_group() {
        let u = universe(ProjectVersion::V2, false, Some(foo()));
        let ins = main_insertions(&u, true, true).unwrap();
        assert_eq!(ins.len(), 4);
        assert_eq!(ins[0].statement, "appsv1 \"github.com/example/guestbook/api/v1\"");
        assert_eq!(ins[1].statement, "\"github.com/example/guestbook/controllers\"");
        assert_eq!(ins[2].statement, "_ = appsv1.AddToScheme(scheme)");
        assert!(ins[3].statement.starts_with("if err = (&controllers.FooReconciler{"));
    }

    #[test]
    fn main_wiring_multi_group_controller_only() {
        let u = universe(ProjectVersion::V2, true, Some(foo()));
        let ins = main_insertions(&u, false, true).unwrap();
        assert_eq!(ins.len(), 2);
        assert_eq!(
            ins[0].statement,
            "appscontroller \"github.com/example/guestbook/controllers/apps\""
        );
        assert!(ins[1].statement.contains("&appscontroller.FooReconciler{"));
    }
}
