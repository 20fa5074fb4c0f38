//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use kscaff_core::domain::ProjectVersion;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kscaff",
    bin_name = "kscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resource and controller scaffolding for Kubernetes controller projects",
    long_about = "kscaff generates API types and controllers for a controller project, \
                  registers each resource in the PROJECT file and wires it into \
                  previously generated files at marker comments.",
    after_help = "EXAMPLES:\n\
        \x20 kscaff init --domain my.domain --repo github.com/example/guestbook\n\
        \x20 kscaff create api --group apps --version v1 --kind Foo\n\
        \x20 kscaff edit --multigroup=true\n\
        \x20 kscaff list --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a new project in the project directory.
    #[command(
        about = "Initialise a new project",
        after_help = "EXAMPLES:\n\
            \x20 kscaff init --repo github.com/example/guestbook\n\
            \x20 kscaff init --project-version 1 --domain example.org --repo example.org/legacy\n\
            \x20 kscaff init --repo github.com/example/fleet --multigroup"
    )]
    Init(InitArgs),

    /// Scaffold a Kubernetes API.
    #[command(about = "Scaffold a Kubernetes API", subcommand)]
    Create(CreateCommands),

    /// Update the project configuration.
    #[command(
        about = "Update the project configuration",
        after_help = "EXAMPLES:\n\
            \x20 kscaff edit --multigroup=true\n\
            \x20 kscaff edit --multigroup=false"
    )]
    Edit(EditArgs),

    /// List the resources registered in the project.
    #[command(
        visible_alias = "ls",
        about = "List registered resources",
        after_help = "EXAMPLES:\n\
            \x20 kscaff list\n\
            \x20 kscaff list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kscaff completions bash > ~/.local/share/bash-completion/completions/kscaff\n\
            \x20 kscaff completions zsh  > ~/.zfunc/_kscaff\n\
            \x20 kscaff completions fish > ~/.config/fish/completions/kscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the kscaff tool configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kscaff config show\n\
            \x20 kscaff config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project layout version; defaults to `defaults.project_version`.
    #[arg(long = "project-version", value_enum, value_name = "VERSION")]
    pub project_version: Option<ProjectVersionArg>,

    /// API group domain; defaults to `defaults.domain`.
    #[arg(long = "domain", value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Go module path of the project.
    #[arg(long = "repo", value_name = "MODULE")]
    pub repo: String,

    /// Use the multi-group layout (version 2 only).
    #[arg(long = "multigroup")]
    pub multigroup: bool,

    /// Replace an existing project configuration.
    #[arg(short = 'f', long = "force", help = "Re-seed an existing project, keeping its version and resources")]
    pub force: bool,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Subcommands for `kscaff create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Scaffold an API resource and/or its controller.
    #[command(after_help = "EXAMPLES:\n\
        \x20 kscaff create api --group apps --version v1 --kind Foo\n\
        \x20 kscaff create api --group core --version v1 --kind Pod --resource=false\n\
        \x20 kscaff create api --group apps --version v1 --kind Foo --force")]
    Api(CreateApiArgs),
}

/// Arguments for `kscaff create api`.
#[derive(Debug, Args)]
pub struct CreateApiArgs {
    /// API group, e.g. `apps`.
    #[arg(long = "group", value_name = "GROUP")]
    pub group: String,

    /// API version, e.g. `v1` or `v1beta1`.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: String,

    /// Kind in UpperCamelCase, e.g. `CronJob`.
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: String,

    /// Generate the API type files.
    #[arg(
        long = "resource",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub resource: bool,

    /// Generate the controller files.
    #[arg(
        long = "controller",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub controller: bool,

    /// Whether the resource is namespaced.
    #[arg(
        long = "namespaced",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub namespaced: bool,

    /// Generate an example reconcile body.
    #[arg(
        long = "example",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub example: bool,

    /// Overwrite generated files and accept an already registered resource.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── edit ──────────────────────────────────────────────────────────────────────

/// Arguments for `kscaff edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Enable or disable the multi-group layout.
    #[arg(
        long = "multigroup",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        required = true
    )]
    pub multigroup: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `kscaff list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output formats for `kscaff list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project layout versions accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectVersionArg {
    #[value(name = "1")]
    V1,
    #[value(name = "2")]
    V2,
}

impl From<ProjectVersionArg> for ProjectVersion {
    fn from(value: ProjectVersionArg) -> Self {
        match value {
            ProjectVersionArg::V1 => ProjectVersion::V1,
            ProjectVersionArg::V2 => ProjectVersion::V2,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
