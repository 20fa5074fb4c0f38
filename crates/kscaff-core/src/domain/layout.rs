//! Output path rules.
//!
//! Every function here is a pure function of the resource identity and the
//! layout. Same inputs, same path: the overwrite policy depends on it.

use crate::domain::{
    entities::{common::RelativePath, resource::Resource},
    value_objects::Layout,
};

pub const GO_MOD: &str = "go.mod";
pub const BOILERPLATE: &str = "hack/boilerplate.go.txt";

fn file(kind_lower: &str, suffix: &str) -> String {
    format!("{kind_lower}{suffix}")
}

fn sample(r: &Resource) -> RelativePath {
    RelativePath::from_segments([
        "config".to_string(),
        "samples".to_string(),
        format!("{}_{}_{}.yaml", r.group(), r.version(), r.kind_lower()),
    ])
}

/// Paths for version 1 projects.
pub mod v1 {
    use super::*;

    pub const MAIN: &str = "cmd/manager/main.go";
    pub const APIS: &str = "pkg/apis/apis.go";
    pub const CONTROLLER: &str = "pkg/controller/controller.go";

    fn api_dir(r: &Resource) -> RelativePath {
        RelativePath::from_segments(["pkg", "apis", r.group(), r.version()])
    }

    fn controller_dir(r: &Resource) -> RelativePath {
        RelativePath::from_segments(["pkg".to_string(), "controller".to_string(), r.kind_lower()])
    }

    fn in_dir(dir: RelativePath, name: String) -> RelativePath {
        RelativePath::new(dir.into_path_buf().join(name))
    }

    pub fn types(r: &Resource) -> RelativePath {
        in_dir(api_dir(r), file(&r.kind_lower(), "_types.go"))
    }

    pub fn types_test(r: &Resource) -> RelativePath {
        in_dir(api_dir(r), file(&r.kind_lower(), "_types_test.go"))
    }

    pub fn register(r: &Resource) -> RelativePath {
        in_dir(api_dir(r), "register.go".into())
    }

    pub fn doc(r: &Resource) -> RelativePath {
        in_dir(api_dir(r), "doc.go".into())
    }

    pub fn version_suite_test(r: &Resource) -> RelativePath {
        in_dir(api_dir(r), format!("{}_suite_test.go", r.version()))
    }

    pub fn group(r: &Resource) -> RelativePath {
        RelativePath::from_segments(["pkg", "apis", r.group(), "group.go"])
    }

    pub fn add_to_scheme(r: &Resource) -> RelativePath {
        RelativePath::from_segments([
            "pkg".to_string(),
            "apis".to_string(),
            format!("addtoscheme_{}_{}.go", r.group().replace('.', "_"), r.version()),
        ])
    }

    pub fn crd_sample(r: &Resource) -> RelativePath {
        sample(r)
    }

    pub fn controller(r: &Resource) -> RelativePath {
        in_dir(controller_dir(r), file(&r.kind_lower(), "_controller.go"))
    }

    pub fn controller_test(r: &Resource) -> RelativePath {
        in_dir(controller_dir(r), file(&r.kind_lower(), "_controller_test.go"))
    }

    pub fn controller_suite_test(r: &Resource) -> RelativePath {
        in_dir(
            controller_dir(r),
            file(&r.kind_lower(), "_controller_suite_test.go"),
        )
    }

    pub fn add_controller(r: &Resource) -> RelativePath {
        RelativePath::from_segments([
            "pkg".to_string(),
            "controller".to_string(),
            format!("add_{}.go", r.kind_lower()),
        ])
    }

    /// Go package path of the API types, relative to the module.
    pub fn api_package(r: &Resource) -> String {
        format!("pkg/apis/{}/{}", r.group(), r.version())
    }

    pub fn controller_package(r: &Resource) -> String {
        format!("pkg/controller/{}", r.kind_lower())
    }
}

/// Paths for version 2 projects.
pub mod v2 {
    use super::*;

    pub const MAIN: &str = "main.go";
    pub const CRD_KUSTOMIZATION: &str = "config/crd/kustomization.yaml";
    pub const CRD_KUSTOMIZE_CONFIG: &str = "config/crd/kustomizeconfig.yaml";

    /// Go package path of the API types, relative to the module.
    pub fn api_package(r: &Resource, layout: Layout) -> String {
        match layout {
            Layout::SingleGroup => format!("api/{}", r.version()),
            Layout::MultiGroup => format!("apis/{}/{}", r.group(), r.version()),
        }
    }

    /// Go package path of the controllers, relative to the module.
    pub fn controllers_package(r: &Resource, layout: Layout) -> String {
        match layout {
            Layout::SingleGroup => "controllers".to_string(),
            Layout::MultiGroup => format!("controllers/{}", r.group()),
        }
    }

    fn in_package(package: String, name: String) -> RelativePath {
        RelativePath::new(format!("{package}/{name}"))
    }

    pub fn types(r: &Resource, layout: Layout) -> RelativePath {
        in_package(api_package(r, layout), file(&r.kind_lower(), "_types.go"))
    }

    pub fn group_version_info(r: &Resource, layout: Layout) -> RelativePath {
        in_package(api_package(r, layout), "groupversion_info.go".into())
    }

    pub fn crd_sample(r: &Resource) -> RelativePath {
        sample(r)
    }

    pub fn editor_role(r: &Resource) -> RelativePath {
        RelativePath::new(format!("config/rbac/{}_editor_role.yaml", r.kind_lower()))
    }

    pub fn viewer_role(r: &Resource) -> RelativePath {
        RelativePath::new(format!("config/rbac/{}_viewer_role.yaml", r.kind_lower()))
    }

    pub fn webhook_patch(r: &Resource) -> RelativePath {
        RelativePath::new(format!("config/crd/patches/webhook_in_{}.yaml", r.plural()))
    }

    pub fn cainjection_patch(r: &Resource) -> RelativePath {
        RelativePath::new(format!(
            "config/crd/patches/cainjection_in_{}.yaml",
            r.plural()
        ))
    }

    pub fn controller(r: &Resource, layout: Layout) -> RelativePath {
        in_package(
            controllers_package(r, layout),
            file(&r.kind_lower(), "_controller.go"),
        )
    }

    pub fn suite_test(r: &Resource, layout: Layout) -> RelativePath {
        in_package(controllers_package(r, layout), "suite_test.go".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn foo() -> Resource {
        Resource::new("apps", "v1", "Foo")
    }

    #[test]
    fn v1_paths() {
        let r = foo();
        assert_eq!(v1::types(&r).as_path(), Path::new("pkg/apis/apps/v1/foo_types.go"));
        assert_eq!(
            v1::types_test(&r).as_path(),
            Path::new("pkg/apis/apps/v1/foo_types_test.go")
        );
        assert_eq!(
            v1::controller(&r).as_path(),
            Path::new("pkg/controller/foo/foo_controller.go")
        );
        assert_eq!(
            v1::controller_test(&r).as_path(),
            Path::new("pkg/controller/foo/foo_controller_test.go")
        );
        assert_eq!(
            v1::add_to_scheme(&r).as_path(),
            Path::new("pkg/apis/addtoscheme_apps_v1.go")
        );
        assert_eq!(v1::add_controller(&r).as_path(), Path::new("pkg/controller/add_foo.go"));
    }

    #[test]
    fn v2_single_group_paths() {
        let r = foo();
        let l = Layout::SingleGroup;
        assert_eq!(v2::types(&r, l).as_path(), Path::new("api/v1/foo_types.go"));
        assert_eq!(
            v2::controller(&r, l).as_path(),
            Path::new("controllers/foo_controller.go")
        );
        assert_eq!(
            v2::suite_test(&r, l).as_path(),
            Path::new("controllers/suite_test.go")
        );
    }

    #[test]
    fn v2_multi_group_paths() {
        let r = foo();
        let l = Layout::MultiGroup;
        assert_eq!(v2::types(&r, l).as_path(), Path::new("apis/apps/v1/foo_types.go"));
        assert_eq!(
            v2::group_version_info(&r, l).as_path(),
            Path::new("apis/apps/v1/groupversion_info.go")
        );
        assert_eq!(
            v2::controller(&r, l).as_path(),
            Path::new("controllers/apps/foo_controller.go")
        );
    }

    #[test]
    fn v2_config_paths_use_plural() {
        let r = Resource::new("batch", "v1", "Policy");
        assert_eq!(
            v2::webhook_patch(&r).as_path(),
            Path::new("config/crd/patches/webhook_in_policies.yaml")
        );
        assert_eq!(
            v2::crd_sample(&r).as_path(),
            Path::new("config/samples/batch_v1_policy.yaml")
        );
        assert_eq!(
            v2::editor_role(&r).as_path(),
            Path::new("config/rbac/policy_editor_role.yaml")
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            v2::types(&foo(), Layout::MultiGroup),
            v2::types(&foo(), Layout::MultiGroup)
        );
    }
}
