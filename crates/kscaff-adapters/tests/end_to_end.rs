//! End-to-end scaffolding against the in-memory adapters.

use kscaff_adapters::{
    BuiltinTemplates, ImportRewrite, MemoryConfigStore, MemoryFilesystem, MemoryReporter,
    Normalize,
};
use kscaff_core::{
    application::ApplicationError,
    domain::{DomainError, Insertion, Marker},
    prelude::*,
};

const ROOT: &str = "/project";
const REPO: &str = "example.com/guestbook";

struct Harness {
    fs: MemoryFilesystem,
    store: MemoryConfigStore,
    reporter: MemoryReporter,
    workspace: Workspace,
}

impl Harness {
    fn new() -> Self {
        Self::with(|ws| ws)
    }

    fn with(configure: impl FnOnce(Workspace) -> Workspace) -> Self {
        let fs = MemoryFilesystem::new();
        let store = MemoryConfigStore::new();
        let reporter = MemoryReporter::new();
        let workspace = configure(
            Workspace::new(
                ROOT,
                Box::new(fs.clone()),
                Box::new(store.clone()),
                Box::new(BuiltinTemplates::new()),
            )
            .with_reporter(Box::new(reporter.clone()))
            .with_default_boilerplate("/*\nCopyright 2026 The Guestbook Authors.\n*/"),
        );
        Self {
            fs,
            store,
            reporter,
            workspace,
        }
    }

    fn init(&self, version: ProjectVersion, multi_group: bool) {
        ProjectService::new(&self.workspace)
            .init(&InitOptions {
                version,
                domain: "my.domain".into(),
                repo: REPO.into(),
                multi_group,
                force: false,
            })
            .unwrap();
    }

    fn create(&self, resource: Resource, options: ApiOptions) -> KscaffResult<ScaffoldReport> {
        let mut api = ApiService::new(&self.workspace, resource, options);
        api.validate()?;
        api.scaffold()
    }

    fn file(&self, path: &str) -> String {
        self.fs
            .contents(format!("{ROOT}/{path}"))
            .unwrap_or_else(|| panic!("{path} was not generated"))
    }

    fn resources(&self) -> Vec<ResourceId> {
        self.store.current().map(|c| c.resources).unwrap_or_default()
    }
}

fn foo() -> Resource {
    Resource::new("apps", "v1", "Foo")
}

fn forced() -> ApiOptions {
    ApiOptions {
        force: true,
        ..ApiOptions::default()
    }
}

#[test]
fn test_single_group_project_end_to_end() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);

    let report = h.create(foo(), ApiOptions::default()).unwrap();

    assert!(report.registered);
    assert_eq!(h.resources(), vec![ResourceId::new("apps", "v1", "Foo")]);

    let types = h.file("api/v1/foo_types.go");
    assert!(types.starts_with("/*\nCopyright 2026 The Guestbook Authors.\n*/\n\npackage v1\n"));
    assert!(types.contains("type Foo struct {"));

    let controller = h.file("controllers/foo_controller.go");
    assert!(controller.contains("package controllers"));
    assert!(controller.contains("appsv1 \"example.com/guestbook/api/v1\""));
    assert!(controller.contains("client.IgnoreNotFound(err)"));

    let main = h.file("main.go");
    assert_eq!(main.matches("_ = appsv1.AddToScheme(scheme)").count(), 1);
    assert_eq!(main.matches("(&controllers.FooReconciler{").count(), 1);
    assert!(main.contains("\tappsv1 \"example.com/guestbook/api/v1\"\n\t\"example.com/guestbook/controllers\"\n\t// +kubebuilder:scaffold:imports"));

    let kustomization = h.file("config/crd/kustomization.yaml");
    assert!(kustomization.contains("- bases/apps.my.domain_foos.yaml\n# +kubebuilder:scaffold:crdkustomizeresource"));
    assert!(kustomization.contains("#- patches/webhook_in_foos.yaml"));
    assert!(kustomization.contains("#- patches/cainjection_in_foos.yaml"));

    let suite = h.file("controllers/suite_test.go");
    assert!(suite.contains("\terr = appsv1.AddToScheme(scheme.Scheme)\n\tExpect(err).NotTo(HaveOccurred())\n"));

    assert_eq!(report.status_of("main.go"), Some(FileStatus::Updated));
    assert!(h.fs.contents(format!("{ROOT}/config/samples/apps_v1_foo.yaml")).is_some());
}

#[test]
fn test_forced_rerun_registers_once_and_keeps_wiring() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.create(foo(), ApiOptions::default()).unwrap();
    let main_after_first = h.file("main.go");
    let kustomization_after_first = h.file("config/crd/kustomization.yaml");

    let report = h.create(foo(), forced()).unwrap();

    assert!(!report.registered);
    assert_eq!(h.resources().len(), 1);
    assert_eq!(h.file("main.go"), main_after_first);
    assert_eq!(h.file("config/crd/kustomization.yaml"), kustomization_after_first);
    assert_eq!(report.status_of("main.go"), Some(FileStatus::Unchanged));
    assert_eq!(
        report.status_of("api/v1/foo_types.go"),
        Some(FileStatus::Overwritten)
    );
    assert_eq!(
        report.status_of("config/crd/kustomization.yaml"),
        Some(FileStatus::Unchanged)
    );
}

#[test]
fn test_registered_resource_needs_force() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.create(foo(), ApiOptions::default()).unwrap();

    let err = h.create(foo(), ApiOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        KscaffError::Application(ApplicationError::ResourceExists { .. })
    ));
    assert!(err.is_force_recoverable());
}

#[test]
fn test_existing_file_is_skipped_then_replaced_with_force() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.fs.insert(format!("{ROOT}/api/v1/foo_types.go"), "// hand written\n");

    h.create(foo(), ApiOptions::default()).unwrap();

    assert_eq!(h.file("api/v1/foo_types.go"), "// hand written\n");
    assert!(
        h.reporter
            .paths_with(FileStatus::Skipped)
            .iter()
            .any(|p| p.ends_with("api/v1/foo_types.go"))
    );

    h.create(foo(), forced()).unwrap();
    assert!(h.file("api/v1/foo_types.go").contains("type Foo struct {"));
}

#[test]
fn test_group_conflict_depends_on_layout() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.create(foo(), ApiOptions::default()).unwrap();

    let batch = || Resource::new("batch", "v1", "Job");
    let err = h.create(batch(), ApiOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        KscaffError::Domain(DomainError::GroupConflict { .. })
    ));
    assert_eq!(h.resources().len(), 1);

    ProjectService::new(&h.workspace)
        .set_multi_group(true)
        .unwrap();
    h.create(batch(), ApiOptions::default()).unwrap();

    assert_eq!(h.resources().len(), 2);
    assert!(h.file("apis/batch/v1/job_types.go").contains("type Job struct {"));
    assert!(h.file("controllers/batch/job_controller.go").contains("package batch"));
    let main = h.file("main.go");
    assert!(main.contains("batchcontroller \"example.com/guestbook/controllers/batch\""));
    assert!(main.contains("(&batchcontroller.JobReconciler{"));
}

#[test]
fn test_controller_only_run_uses_stub_body() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);

    let report = h
        .create(
            foo(),
            ApiOptions {
                do_resource: false,
                ..ApiOptions::default()
            },
        )
        .unwrap();

    assert!(!report.registered);
    assert!(h.resources().is_empty());
    let controller = h.file("controllers/foo_controller.go");
    assert!(controller.contains("// your logic here"));
    assert!(!controller.contains("client.IgnoreNotFound"));

    let main = h.file("main.go");
    assert!(!main.contains("appsv1"));
    assert!(main.contains("(&controllers.FooReconciler{"));
}

#[test]
fn test_missing_marker_keeps_registration_and_file() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.fs.insert(format!("{ROOT}/main.go"), "package main\n");

    let err = h.create(foo(), ApiOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        KscaffError::Application(ApplicationError::MarkerNotFound { .. })
    ));
    assert_eq!(h.file("main.go"), "package main\n");
    // Registration happens before generation and is not rolled back.
    assert_eq!(h.resources().len(), 1);
    assert!(h.fs.contents(format!("{ROOT}/api/v1/foo_types.go")).is_some());
}

#[test]
fn test_updater_is_idempotent_on_generated_main() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    let main: RelativePath = "main.go".into();
    let insertion = [Insertion::new(
        Marker::GO_SCHEME,
        "_ = appsv1.AddToScheme(scheme)",
    )];

    let updater = InPlaceUpdater::new(&h.workspace);
    assert_eq!(updater.update(&main, &insertion).unwrap(), FileStatus::Updated);
    let first = h.file("main.go");
    assert_eq!(updater.update(&main, &insertion).unwrap(), FileStatus::Unchanged);
    assert_eq!(h.file("main.go"), first);
}

#[test]
fn test_v1_project_end_to_end() {
    let h = Harness::new();
    h.init(ProjectVersion::V1, false);
    assert!(h.file("cmd/manager/main.go").contains("\"example.com/guestbook/pkg/apis\""));

    let report = h.create(foo(), ApiOptions::default()).unwrap();

    assert!(!report.registered);
    assert!(h.file("pkg/apis/apps/v1/foo_types.go").contains("// +genclient\n"));
    assert!(h.fs.contents(format!("{ROOT}/pkg/apis/apps/v1/foo_types_test.go")).is_some());
    assert!(
        h.file("pkg/apis/addtoscheme_apps_v1.go")
            .contains("\"example.com/guestbook/pkg/apis/apps/v1\"")
    );
    assert!(
        h.file("pkg/controller/foo/foo_controller.go")
            .contains("func (r *ReconcileFoo) Reconcile(request reconcile.Request)")
    );
    assert!(h.file("pkg/controller/add_foo.go").contains("foo.Add"));
    assert_eq!(report.status_of("main.go"), None);
}

#[test]
fn test_plugins_run_in_order_on_rendered_files() {
    let h = Harness::with(|ws| {
        ws.with_plugin(Box::new(Normalize))
            .with_plugin(Box::new(
                ImportRewrite::new(REPO, "example.com/fork").unwrap(),
            ))
    });
    h.init(ProjectVersion::V2, false);
    h.create(foo(), ApiOptions::default()).unwrap();

    let controller = h.file("controllers/foo_controller.go");
    assert!(controller.contains("appsv1 \"example.com/fork/api/v1\""));
    assert!(controller.ends_with("}\n"));
    assert!(!controller.ends_with("\n\n"));
    assert!(controller.lines().all(|l| l == l.trim_end()));

    // In-place wiring is not post-processed.
    assert!(h.file("main.go").contains("appsv1 \"example.com/guestbook/api/v1\""));
}

#[test]
fn test_init_refuses_existing_project() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);

    let err = ProjectService::new(&h.workspace)
        .init(&InitOptions {
            version: ProjectVersion::V2,
            domain: "other.domain".into(),
            repo: REPO.into(),
            multi_group: false,
            force: false,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        KscaffError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert_eq!(h.store.current().unwrap().domain, "my.domain");
    assert_eq!(h.store.save_count(), 1);
}

#[test]
fn test_forced_init_keeps_registry_and_version() {
    let h = Harness::new();
    h.init(ProjectVersion::V2, false);
    h.create(foo(), ApiOptions::default()).unwrap();
    let main_after_create = h.file("main.go");

    let reinit = |version| {
        ProjectService::new(&h.workspace).init(&InitOptions {
            version,
            domain: "my.domain".into(),
            repo: REPO.into(),
            multi_group: false,
            force: true,
        })
    };

    let err = reinit(ProjectVersion::V1).unwrap_err();
    assert!(matches!(err, KscaffError::Domain(DomainError::InvalidConfig(_))));
    assert_eq!(h.store.current().unwrap().version, "2");
    assert_eq!(h.resources(), vec![ResourceId::new("apps", "v1", "Foo")]);

    let files = reinit(ProjectVersion::V2).unwrap();
    assert_eq!(h.resources(), vec![ResourceId::new("apps", "v1", "Foo")]);
    assert!(h.fs.contents(format!("{ROOT}/api/v1/foo_types.go")).is_some());
    assert_eq!(h.file("main.go"), main_after_create);
    assert!(
        files
            .iter()
            .any(|f| f.path.as_path() == std::path::Path::new("main.go")
                && f.status == FileStatus::Preserved)
    );
}
