//! Diagnostics on stderr.
//!
//! The verbosity flags pick one level for every kscaff crate. `KSCAFF_LOG`,
//! then `RUST_LOG`, replace the generated directives when set. From `-vv`
//! on, events also carry their target and a timestamp.
//!
//! Every event emitted while a command runs sits inside a `project` span
//! naming the directory being scaffolded.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::{Span, info_span};
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown.
const CRATES: [&str; 3] = ["kscaff", "kscaff_core", "kscaff_adapters"];

/// Filter overrides, most specific first.
const FILTER_VARS: [&str; 2] = ["KSCAFF_LOG", "RUST_LOG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    /// Targets and timestamps on each line.
    detailed: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let level = if args.quiet {
            LevelFilter::ERROR
        } else {
            match args.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            detailed: !args.quiet && args.verbose >= 2,
            ansi: !args.no_color && stderr_is_tty,
        }
    }

    fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn filter(&self) -> EnvFilter {
        FILTER_VARS
            .iter()
            .find_map(|var| EnvFilter::try_from_env(var).ok())
            .unwrap_or_else(|| EnvFilter::new(self.directives()))
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(settings.ansi)
        .with_target(settings.detailed);
    let registry = tracing_subscriber::registry().with(settings.filter());

    let installed = if settings.detailed {
        registry.with(layer).try_init()
    } else {
        registry.with(layer.without_time()).try_init()
    };
    installed.context("Failed to initialise tracing")
}

/// Span wrapping a whole command run.
pub fn project_span(args: &GlobalArgs) -> Span {
    info_span!("project", dir = %args.project_dir.display())
}
