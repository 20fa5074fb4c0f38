//! `kscaff edit`: update project-wide settings.

use tracing::instrument;

use kscaff_core::application::ProjectService;

use crate::{
    cli::{EditArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(multigroup = args.multigroup))]
pub fn execute(
    args: EditArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = super::build_workspace(&global, &config, &output)?;
    let project = ProjectService::new(&workspace).set_multi_group(args.multigroup)?;

    output.success(&format!("Project layout is now {}", project.layout()))?;
    Ok(())
}
