//! The resolved generation context shared by every task of a run.

use crate::domain::{
    entities::{project_config::ProjectConfig, render_context::RenderContext, resource::Resource},
    error::DomainError,
    layout,
    value_objects::{Layout, ProjectVersion},
};

/// Read-only aggregation of project configuration, resource and
/// boilerplate text.
///
/// A `Universe` owns a snapshot of the configuration taken when it was
/// built. Tasks only ever see `&Universe`, so nothing one task does can leak
/// into a sibling. Build a fresh one for each generation phase; the
/// configuration may have changed in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    config: ProjectConfig,
    version: ProjectVersion,
    resource: Option<Resource>,
    boilerplate: String,
}

impl Universe {
    pub fn builder() -> UniverseBuilder {
        UniverseBuilder::default()
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn version(&self) -> ProjectVersion {
        self.version
    }

    pub fn layout(&self) -> Layout {
        self.config.layout()
    }

    /// The resource, absent for project-level runs such as init.
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    pub fn boilerplate(&self) -> &str {
        &self.boilerplate
    }

    /// Go import path of a module-relative package.
    pub fn import_path(&self, package: &str) -> String {
        if self.config.repo.is_empty() {
            package.to_string()
        } else {
            format!("{}/{}", self.config.repo, package)
        }
    }

    /// Variables every template may reference.
    pub fn render_context(&self) -> RenderContext {
        let boilerplate = self.boilerplate.trim_end();
        let mut ctx = RenderContext::new()
            .with_variable("REPO", &self.config.repo)
            .with_variable("DOMAIN", &self.config.domain)
            .with_variable("PROJECT_NAME", self.config.project_name())
            .with_variable("BOILERPLATE_TEXT", boilerplate)
            .with_variable(
                "BOILERPLATE",
                if boilerplate.is_empty() {
                    String::new()
                } else {
                    format!("{boilerplate}\n\n")
                },
            );

        let Some(r) = &self.resource else {
            return ctx;
        };

        let (api_package, controllers_package) = match self.version {
            ProjectVersion::V1 => (layout::v1::api_package(r), layout::v1::controller_package(r)),
            ProjectVersion::V2 => (
                layout::v2::api_package(r, self.layout()),
                layout::v2::controllers_package(r, self.layout()),
            ),
        };
        let controllers_package_name = controllers_package
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .replace(['.', '-'], "");

        ctx.insert("GROUP", r.group());
        ctx.insert("VERSION", r.version());
        ctx.insert("KIND", r.kind());
        ctx.insert("KIND_LOWER", r.kind_lower());
        ctx.insert("KIND_PLURAL", r.plural());
        ctx.insert("GROUP_DOMAIN", r.group_domain(&self.config.domain));
        ctx.insert("IMPORT_ALIAS", r.import_alias());
        ctx.insert("API_IMPORT_PATH", self.import_path(&api_package));
        ctx.insert("CONTROLLERS_IMPORT_PATH", self.import_path(&controllers_package));
        ctx.insert("CONTROLLERS_PACKAGE", controllers_package_name);
        ctx.insert(
            "SCOPE_MARKER",
            match (r.namespaced(), self.version) {
                (true, _) => "",
                (false, ProjectVersion::V1) => "// +genclient:nonNamespaced\n",
                (false, ProjectVersion::V2) => "// +kubebuilder:resource:scope=Cluster\n",
            },
        );
        ctx
    }
}

/// Builder for [`Universe`].
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    config: Option<ProjectConfig>,
    resource: Option<Resource>,
    boilerplate: String,
}

impl UniverseBuilder {
    pub fn config(mut self, config: &ProjectConfig) -> Self {
        self.config = Some(config.clone());
        self
    }

    pub fn resource(mut self, resource: &Resource) -> Self {
        self.resource = Some(resource.clone());
        self
    }

    pub fn boilerplate(mut self, text: impl Into<String>) -> Self {
        self.boilerplate = text.into();
        self
    }

    pub fn build(self) -> Result<Universe, DomainError> {
        let config = self
            .config
            .ok_or(DomainError::MissingRequiredField { field: "config" })?;
        let version = config.project_version()?;

        Ok(Universe {
            config,
            version,
            resource: self.resource,
            boilerplate: self.boilerplate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::resource::ResourceId;

    fn config(multi_group: bool) -> ProjectConfig {
        let mut cfg = ProjectConfig::new(ProjectVersion::V2)
            .with_domain("my.domain")
            .with_repo("github.com/example/guestbook");
        cfg.multi_group = multi_group;
        cfg
    }

    #[test]
    fn build_requires_config() {
        assert_eq!(
            Universe::builder().build().unwrap_err(),
            DomainError::MissingRequiredField { field: "config" }
        );
    }

    #[test]
    fn build_rejects_unknown_version() {
        let mut cfg = config(false);
        cfg.version = "9".into();
        assert!(matches!(
            Universe::builder().config(&cfg).build(),
            Err(DomainError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut cfg = config(false);
        let universe = Universe::builder().config(&cfg).build().unwrap();
        cfg.add_resource(ResourceId::new("apps", "v1", "Foo")).unwrap();
        assert!(universe.config().resources.is_empty());
    }

    #[test]
    fn single_group_context() {
        let universe = Universe::builder()
            .config(&config(false))
            .resource(&Resource::new("apps", "v1", "Foo"))
            .boilerplate("/* header */\n")
            .build()
            .unwrap();
        let ctx = universe.render_context();

        assert_eq!(
            ctx.get("API_IMPORT_PATH"),
            Some("github.com/example/guestbook/api/v1")
        );
        assert_eq!(ctx.get("CONTROLLERS_PACKAGE"), Some("controllers"));
        assert_eq!(ctx.get("GROUP_DOMAIN"), Some("apps.my.domain"));
        assert_eq!(ctx.get("BOILERPLATE"), Some("/* header */\n\n"));
        assert_eq!(ctx.get("SCOPE_MARKER"), Some(""));
    }

    #[test]
    fn multi_group_context() {
        let universe = Universe::builder()
            .config(&config(true))
            .resource(&Resource::new("apps", "v1", "Foo").with_namespaced(false))
            .build()
            .unwrap();
        let ctx = universe.render_context();

        assert_eq!(
            ctx.get("API_IMPORT_PATH"),
            Some("github.com/example/guestbook/apis/apps/v1")
        );
        assert_eq!(
            ctx.get("CONTROLLERS_IMPORT_PATH"),
            Some("github.com/example/guestbook/controllers/apps")
        );
        assert_eq!(ctx.get("CONTROLLERS_PACKAGE"), Some("apps"));
        assert_eq!(ctx.get("BOILERPLATE"), Some(""));
        assert!(ctx.get("SCOPE_MARKER").unwrap().contains("scope=Cluster"));
    }

    #[test]
    fn project_level_context_has_no_resource_variables() {
        let universe = Universe::builder().config(&config(false)).build().unwrap();
        let ctx = universe.render_context();
        assert_eq!(ctx.get("PROJECT_NAME"), Some("guestbook"));
        assert_eq!(ctx.get("KIND"), None);
    }
}
