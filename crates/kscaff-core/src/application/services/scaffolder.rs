//! Scaffold Orchestrator: render, post-process and write an ordered task list.

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, Workspace, ports::FileStatus},
    domain::{FileTask, IfExists, RelativePath, Universe},
    error::KscaffResult,
};

/// Global options for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Overwrite existing files (except preserved ones).
    pub force: bool,
}

/// What happened to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: RelativePath,
    pub status: FileStatus,
}

/// Executes file generation tasks against a universe.
pub struct Scaffolder<'a> {
    workspace: &'a Workspace,
}

impl<'a> Scaffolder<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Run `tasks` in order.
    ///
    /// An existing file is skipped with a warning unless `force` is set;
    /// preserved files are never replaced. Any render, plugin or write
    /// failure aborts the run. Files written before the failure stay.
    #[instrument(skip_all, fields(tasks = tasks.len(), force = options.force))]
    pub fn execute(
        &self,
        universe: &Universe,
        options: ScaffoldOptions,
        tasks: &[FileTask],
    ) -> KscaffResult<Vec<FileOutcome>> {
        let mut outcomes = Vec::with_capacity(tasks.len());

        for task in tasks {
            let target = self.workspace.resolve(task.path());
            let exists = self.workspace.filesystem().exists(&target);

            let status = match (exists, task.options().if_exists, options.force) {
                (false, _, _) => FileStatus::Created,
                (true, IfExists::Skip, true) => FileStatus::Overwritten,
                (true, IfExists::Skip, false) => FileStatus::Skipped,
                (true, IfExists::Preserve, _) => FileStatus::Preserved,
            };

            if matches!(status, FileStatus::Skipped | FileStatus::Preserved) {
                match status {
                    FileStatus::Skipped => warn!(path = %task.path(), "File already exists, skipping"),
                    _ => debug!(path = %task.path(), "Keeping preserved file"),
                }
                self.workspace.reporter().report(task.path().as_path(), status);
                outcomes.push(FileOutcome {
                    path: task.path().clone(),
                    status,
                });
                continue;
            }

            let content = self.render(task, universe)?;
            let content = self.post_process(task, content, universe)?;

            if let Some(parent) = target.parent() {
                self.workspace.filesystem().create_dir_all(parent)?;
            }
            self.workspace.filesystem().write_file(&target, &content)?;
            debug!(path = %task.path(), template = %task.template(), %status, "Wrote file");

            self.workspace.reporter().report(task.path().as_path(), status);
            outcomes.push(FileOutcome {
                path: task.path().clone(),
                status,
            });
        }

        Ok(outcomes)
    }

    fn render(&self, task: &FileTask, universe: &Universe) -> KscaffResult<String> {
        let render_error = |reason: String| ApplicationError::Render {
            path: task.path().as_path().to_path_buf(),
            template: task.template().to_string(),
            reason,
        };

        let body = self
            .workspace
            .templates()
            .get(task.template())
            .ok_or_else(|| render_error("template is not registered".into()))?;

        let mut ctx = universe.render_context().merged(&task.options().variables);

        for (name, fragment) in &task.options().fragments {
            let fragment_body = self
                .workspace
                .templates()
                .get(*fragment)
                .ok_or_else(|| render_error(format!("fragment '{fragment}' is not registered")))?;
            let rendered = ctx
                .render(fragment_body)
                .map_err(|e| render_error(format!("fragment '{fragment}': {e}")))?;
            ctx.insert(name.clone(), rendered);
        }

        Ok(ctx.render(body).map_err(|e| render_error(e.to_string()))?)
    }

    fn post_process(
        &self,
        task: &FileTask,
        mut content: String,
        universe: &Universe,
    ) -> KscaffResult<String> {
        for plugin in self.workspace.plugins() {
            content = plugin
                .process(task.path(), content, universe)
                .map_err(|e| ApplicationError::Render {
                    path: task.path().as_path().to_path_buf(),
                    template: task.template().to_string(),
                    reason: format!("plugin '{}': {}", plugin.name(), e),
                })?;
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::test_support::{FakeFs, FakeTemplates, RecordingReporter, workspace},
        application::ports::{Plugin, PluginError},
        domain::{ProjectConfig, ProjectVersion, Resource, TemplateId},
        error::KscaffError,
    };
    use std::path::Path;

    fn universe() -> Universe {
        let cfg = ProjectConfig::new(ProjectVersion::V2).with_repo("example.com/demo");
        Universe::builder()
            .config(&cfg)
            .resource(&Resource::new("apps", "v1", "Foo"))
            .build()
            .unwrap()
    }

    fn types_task() -> FileTask {
        FileTask::new("api/v1/foo_types.go".into(), TemplateId::V2Types)
    }

    #[test]
    fn creates_missing_file() {
        let fs = FakeFs::default();
        let ws = workspace(&fs, FakeTemplates::with(TemplateId::V2Types, "type {{KIND}} struct{}\n"));
        let out = Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &[types_task()])
            .unwrap();
        assert_eq!(out[0].status, FileStatus::Created);
        assert_eq!(
            fs.get("/project/api/v1/foo_types.go").as_deref(),
            Some("type Foo struct{}\n")
        );
    }

    #[test]
    fn existing_file_is_skipped_without_force() {
        let fs = FakeFs::default();
        fs.put("/project/api/v1/foo_types.go", "hand written");
        let reporter = RecordingReporter::default();
        let ws = workspace(&fs, FakeTemplates::with(TemplateId::V2Types, "generated"))
            .with_reporter(Box::new(reporter.clone()));

        let out = Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &[types_task()])
            .unwrap();

        assert_eq!(out[0].status, FileStatus::Skipped);
        assert_eq!(fs.get("/project/api/v1/foo_types.go").as_deref(), Some("hand written"));
        assert_eq!(
            reporter.entries(),
            vec![(Path::new("api/v1/foo_types.go").to_path_buf(), FileStatus::Skipped)]
        );
    }

    #[test]
    fn force_overwrites_but_not_preserved() {
        let fs = FakeFs::default();
        fs.put("/project/api/v1/foo_types.go", "old");
        fs.put("/project/controllers/suite_test.go", "hand edited");
        let templates = FakeTemplates::with(TemplateId::V2Types, "new")
            .and(TemplateId::V2SuiteTest, "fresh suite");
        let ws = workspace(&fs, templates);
        let tasks = [
            types_task(),
            FileTask::new("controllers/suite_test.go".into(), TemplateId::V2SuiteTest).preserved(),
        ];

        let out = Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions { force: true }, &tasks)
            .unwrap();

        assert_eq!(out[0].status, FileStatus::Overwritten);
        assert_eq!(out[1].status, FileStatus::Preserved);
        assert_eq!(fs.get("/project/api/v1/foo_types.go").as_deref(), Some("new"));
        assert_eq!(
            fs.get("/project/controllers/suite_test.go").as_deref(),
            Some("hand edited")
        );
    }

    #[test]
    fn fragments_render_with_task_context() {
        let fs = FakeFs::default();
        let templates = FakeTemplates::with(TemplateId::V2Controller, "func R() {\n{{BODY}}}\n")
            .and(TemplateId::ReconcileStub, "\t// reconcile {{KIND}}\n");
        let ws = workspace(&fs, templates);
        let task = FileTask::new("controllers/foo_controller.go".into(), TemplateId::V2Controller)
            .with_fragment("BODY", TemplateId::ReconcileStub);

        Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &[task])
            .unwrap();

        assert_eq!(
            fs.get("/project/controllers/foo_controller.go").as_deref(),
            Some("func R() {\n\t// reconcile Foo\n}\n")
        );
    }

    #[test]
    fn unresolved_placeholder_names_the_task() {
        let fs = FakeFs::default();
        let ws = workspace(&fs, FakeTemplates::with(TemplateId::V2Types, "{{NOPE}}"));
        let err = Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &[types_task()])
            .unwrap_err();
        match err {
            KscaffError::Application(ApplicationError::Render { path, template, .. }) => {
                assert_eq!(path, Path::new("api/v1/foo_types.go"));
                assert_eq!(template, "v2/types");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(fs.get("/project/api/v1/foo_types.go").is_none());
    }

    struct Upper;
    impl Plugin for Upper {
        fn name(&self) -> &str {
            "upper"
        }
        fn process(&self, _: &RelativePath, c: String, _: &Universe) -> Result<String, PluginError> {
            Ok(c.to_uppercase())
        }
    }

    struct Suffix;
    impl Plugin for Suffix {
        fn name(&self) -> &str {
            "suffix"
        }
        fn process(&self, _: &RelativePath, c: String, _: &Universe) -> Result<String, PluginError> {
            Ok(format!("{c}-done"))
        }
    }

    struct Broken;
    impl Plugin for Broken {
        fn name(&self) -> &str {
            "broken"
        }
        fn process(&self, _: &RelativePath, _: String, _: &Universe) -> Result<String, PluginError> {
            Err(PluginError("boom".into()))
        }
    }

    #[test]
    fn plugins_run_in_registration_order() {
        let fs = FakeFs::default();
        let ws = workspace(&fs, FakeTemplates::with(TemplateId::V2Types, "abc"))
            .with_plugin(Box::new(Upper))
            .with_plugin(Box::new(Suffix));
        Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &[types_task()])
            .unwrap();
        assert_eq!(fs.get("/project/api/v1/foo_types.go").as_deref(), Some("ABC-done"));
    }

    #[test]
    fn failing_plugin_aborts_the_run() {
        let fs = FakeFs::default();
        let templates = FakeTemplates::with(TemplateId::V2Types, "a").and(TemplateId::V2CrdSample, "b");
        let ws = workspace(&fs, templates).with_plugin(Box::new(Broken));
        let tasks = [
            types_task(),
            FileTask::new("config/samples/apps_v1_foo.yaml".into(), TemplateId::V2CrdSample),
        ];
        let err = Scaffolder::new(&ws)
            .execute(&universe(), ScaffoldOptions::default(), &tasks)
            .unwrap_err();
        assert!(err.to_string().contains("plugin 'broken'"));
        assert!(fs.is_empty());
    }
}
