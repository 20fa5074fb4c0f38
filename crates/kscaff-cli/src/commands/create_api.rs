//! `kscaff create api`: scaffold a resource and/or its controller.
//!
//! Responsibility: translate CLI arguments into a `Resource` and
//! `ApiOptions`, run validation before anything is written, then scaffold
//! and summarise. No business logic lives here.

use tracing::{debug, instrument};

use kscaff_core::{
    application::{ApiOptions, ApiService},
    domain::Resource,
};

use crate::{
    cli::{CreateApiArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(group = %args.group, version = %args.version, kind = %args.kind))]
pub fn execute(
    args: CreateApiArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (resource, options) = into_request(&args);
    debug!(?options, namespaced = resource.namespaced(), "Request resolved");

    let workspace = super::build_workspace(&global, &config, &output)?;
    let mut service = ApiService::new(&workspace, resource, options);
    service.validate()?;

    output.header(&format!("Scaffolding {}", service.resource().id()))?;
    let report = service.scaffold()?;

    super::init::summarise(&report.files, &output)?;
    if report.registered {
        output.info(&format!("Registered {} in PROJECT", report.resource))?;
    }
    output.success(&format!(
        "{} file(s) written for {}",
        report.written(),
        report.resource.kind
    ))?;
    Ok(())
}

fn into_request(args: &CreateApiArgs) -> (Resource, ApiOptions) {
    let resource = Resource::new(&args.group, &args.version, &args.kind)
        .with_namespaced(args.namespaced)
        .with_example_reconcile_body(args.example);
    let options = ApiOptions {
        do_resource: args.resource,
        do_controller: args.controller,
        force: args.force,
    };
    (resource, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CreateApiArgs {
        CreateApiArgs {
            group: "apps".into(),
            version: "v1".into(),
            kind: "Foo".into(),
            resource: true,
            controller: true,
            namespaced: true,
            example: true,
            force: false,
        }
    }

    #[test]
    fn flags_map_onto_request() {
        let mut a = args();
        a.namespaced = false;
        a.controller = false;
        a.force = true;

        let (resource, options) = into_request(&a);
        assert_eq!(resource.group(), "apps");
        assert_eq!(resource.kind(), "Foo");
        assert!(!resource.namespaced());
        assert!(resource.create_example_reconcile_body());
        assert_eq!(
            options,
            ApiOptions {
                do_resource: true,
                do_controller: false,
                force: true,
            }
        );
    }

    #[test]
    fn example_flag_reaches_resource() {
        let mut a = args();
        a.example = false;
        let (resource, _) = into_request(&a);
        assert!(!resource.create_example_reconcile_body());
    }
}
