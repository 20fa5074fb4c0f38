//! Command handlers.
//!
//! Each submodule translates parsed arguments into a core use case and
//! renders the result. Adapter wiring is shared through [`build_workspace`].

use chrono::Datelike;
use tracing::debug;

use kscaff_adapters::{
    BuiltinTemplates, ImportRewrite, LocalFilesystem, Normalize, TracingReporter, YamlConfigStore,
};
use kscaff_core::application::{Reporter, Workspace};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod create_api;
pub mod edit;
pub mod init;
pub mod list;

/// Wire the production adapters for the project at `--project-dir`.
///
/// File status lines go to the output manager, or to the log when stdout
/// carries JSON. Plugins come from the `scaffold` config section:
/// `Normalize` first when enabled, then one `ImportRewrite` per configured
/// entry, in order.
pub fn build_workspace(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Workspace> {
    let root = global.project_dir.clone();
    debug!(root = %root.display(), "Building workspace");

    let reporter: Box<dyn Reporter> = if output.is_json() {
        Box::new(TracingReporter)
    } else {
        Box::new(output.clone())
    };

    let mut workspace = Workspace::new(
        root.clone(),
        Box::new(LocalFilesystem::new()),
        Box::new(YamlConfigStore::new(&root)),
        Box::new(BuiltinTemplates::new()),
    )
    .with_reporter(reporter)
    .with_default_boilerplate(default_boilerplate(config)?);

    if config.scaffold.normalize {
        workspace = workspace.with_plugin(Box::new(Normalize));
    }
    for rewrite in &config.scaffold.import_rewrites {
        let plugin =
            ImportRewrite::new(&rewrite.from, &rewrite.to).map_err(|e| CliError::ConfigError {
                message: format!("scaffold.import_rewrites: {e}"),
                source: Some(Box::new(e)),
            })?;
        workspace = workspace.with_plugin(Box::new(plugin));
    }

    Ok(workspace)
}

/// License header for projects without `hack/boilerplate.go.txt`.
fn default_boilerplate(config: &AppConfig) -> CliResult<String> {
    match &config.scaffold.boilerplate_path {
        Some(path) => std::fs::read_to_string(path)
            .map(|text| text.trim_end().to_string())
            .with_cli_context(|| format!("Failed to read boilerplate '{}'", path.display())),
        None => Ok(apache_header(chrono::Local::now().year())),
    }
}

fn apache_header(year: i32) -> String {
    format!(
        "/*
Copyright {year} The Kubernetes authors.

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/"
    )
}
