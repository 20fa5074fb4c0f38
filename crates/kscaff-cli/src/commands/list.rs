//! Implementation of the `kscaff list` command.

use kscaff_core::{application::ProjectService, domain::ResourceId};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = super::build_workspace(&global, &config, &output)?;
    let resources = ProjectService::new(&workspace).resources()?;

    match args.format {
        ListFormat::Table => {
            if resources.is_empty() {
                output.info("No resources registered")?;
                return Ok(());
            }
            output.header("Registered resources:")?;
            for line in table(&resources) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            // Printed even in quiet mode: JSON must stay parseable in pipes.
            output.data(&to_json(&resources)?)?;
        }
    }

    Ok(())
}

fn to_json(resources: &[ResourceId]) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(resources)?)
}

fn table(resources: &[ResourceId]) -> Vec<String> {
    let g = resources.iter().map(|r| r.group.len()).fold("GROUP".len(), usize::max);
    let v = resources.iter().map(|r| r.version.len()).fold("VERSION".len(), usize::max);

    let mut lines = vec![format!("  {:<g$}  {:<v$}  KIND", "GROUP", "VERSION")];
    for r in resources {
        lines.push(format!("  {:<g$}  {:<v$}  {}", r.group, r.version, r.kind));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> Vec<ResourceId> {
        vec![
            ResourceId::new("apps", "v1", "Foo"),
            ResourceId::new("batch", "v1beta1", "CronJob"),
        ]
    }

    #[test]
    fn table_aligns_columns() {
        let lines = table(&resources());
        assert_eq!(lines[0], "  GROUP  VERSION  KIND");
        assert_eq!(lines[1], "  apps   v1       Foo");
        assert_eq!(lines[2], "  batch  v1beta1  CronJob");
    }

    #[test]
    fn json_lists_every_resource() {
        let json = to_json(&resources()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["kind"], "CronJob");
    }

    #[test]
    fn json_for_empty_project_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
