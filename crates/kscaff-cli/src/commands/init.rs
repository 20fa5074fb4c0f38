//! `kscaff init`: write the PROJECT file and seed the skeleton.

use tracing::instrument;

use kscaff_core::{
    application::{FileOutcome, FileStatus, InitOptions, ProjectService},
    domain::ProjectVersion,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(repo = %args.repo))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = resolve_options(args, &config)?;
    let workspace = super::build_workspace(&global, &config, &output)?;

    output.header(&format!(
        "Initialising version {} project {}",
        options.version, options.repo
    ))?;
    let files = ProjectService::new(&workspace).init(&options)?;

    summarise(&files, &output)?;
    output.success(&format!(
        "Project initialised in {}",
        global.project_dir.display()
    ))?;
    output.info("Next: kscaff create api --group <group> --version <version> --kind <Kind>")?;
    Ok(())
}

/// Flags first, then the `defaults` config section.
fn resolve_options(args: InitArgs, config: &AppConfig) -> CliResult<InitOptions> {
    let version = match args.project_version {
        Some(version) => ProjectVersion::from(version),
        None => config
            .defaults
            .project_version
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.project_version: {e}"),
                source: None,
            })?,
    };

    if args.multigroup && !version.supports_multi_group() {
        return Err(CliError::InvalidInput {
            message: format!("--multigroup is not available for version {version} projects"),
            source: None,
        });
    }

    Ok(InitOptions {
        version,
        domain: args.domain.unwrap_or_else(|| config.defaults.domain.clone()),
        repo: args.repo,
        multi_group: args.multigroup,
        force: args.force,
    })
}

pub(crate) fn summarise(files: &[FileOutcome], output: &OutputManager) -> CliResult<()> {
    let skipped = skipped(files);
    if skipped > 0 {
        output.warning(&format!(
            "{skipped} existing file(s) skipped; re-run with --force to overwrite"
        ))?;
    }
    Ok(())
}

/// Files `--force` would have replaced. Preserved files never are.
fn skipped(files: &[FileOutcome]) -> usize {
    files
        .iter()
        .filter(|f| f.status == FileStatus::Skipped)
        .count()
}
