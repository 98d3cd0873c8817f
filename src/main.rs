use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use verbump::cli::orchestration::{self, RunArgs, RunOutcome};
use verbump::config;
use verbump::domain::{BumpReason, BumpTarget, Stage};
use verbump::ui::{self, Reporter};
use verbump::VerbumpError;

/// Reasons accepted on the command line; `force` comes from `--force`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ReasonArg {
    Release,
    Major,
    Minor,
    Patch,
    Alpha,
    Beta,
    Rc,
}

impl From<ReasonArg> for BumpReason {
    fn from(reason: ReasonArg) -> Self {
        match reason {
            ReasonArg::Release => BumpReason::Release,
            ReasonArg::Major => BumpReason::Major,
            ReasonArg::Minor => BumpReason::Minor,
            ReasonArg::Patch => BumpReason::Patch,
            ReasonArg::Alpha => BumpReason::Stage(Stage::Alpha),
            ReasonArg::Beta => BumpReason::Stage(Stage::Beta),
            ReasonArg::Rc => BumpReason::Stage(Stage::ReleaseCandidate),
        }
    }
}

#[derive(clap::Parser)]
#[command(
    name = "verbump",
    about = "Updates the project version across the entire codebase"
)]
struct Args {
    #[arg(value_enum, default_value = "patch", help = "Reason for the version change")]
    reason: ReasonArg,

    #[arg(
        value_enum,
        default_value = "minor",
        help = "For alpha/beta/rc, the component to bump when starting from a release"
    )]
    target: BumpTarget,

    #[arg(short, long, value_name = "VERSION", help = "Force the version. Overrides arguments")]
    force: Option<String>,

    #[arg(long, overrides_with = "no_commit", help = "Commit changes")]
    commit: bool,

    #[arg(long, overrides_with = "commit", help = "Don't commit changes")]
    no_commit: bool,

    #[arg(long, overrides_with = "no_push", help = "Push changes")]
    push: bool,

    #[arg(long, overrides_with = "push", help = "Don't push changes")]
    no_push: bool,

    #[arg(long, overrides_with = "no_tag", help = "Tag the commit and push the tag")]
    tag: bool,

    #[arg(long, overrides_with = "tag", help = "Don't tag the commit")]
    no_tag: bool,

    #[arg(short, long, help = "Don't change anything, just describe what would happen")]
    dry_run: bool,

    #[arg(long, help = "Add a sample targets section to the metadata file")]
    init: bool,

    #[arg(short, long, help = "Don't output anything, just get on with it")]
    quiet: bool,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<PathBuf>,

    #[arg(short = 'C', long, default_value = ".", help = "Project root directory")]
    root: PathBuf,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

/// `Some(true)` / `Some(false)` when either switch was given, `None` otherwise.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("verbump {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(err) = run(args) {
        ui::display_error(&format!("{:#}", err));
        let code = err
            .downcast_ref::<VerbumpError>()
            .map(VerbumpError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = Reporter::new(args.quiet);
    let settings = config::load_settings(args.config.as_deref(), &args.root)
        .context("Error loading settings")?;

    let reason = match args.force {
        Some(version) => BumpReason::force(version),
        None => args.reason.into(),
    };

    let run_args = RunArgs {
        root: args.root,
        reason,
        target: args.target,
        commit: switch(args.commit, args.no_commit),
        push: switch(args.push, args.no_push),
        tag: switch(args.tag, args.no_tag),
        dry_run: args.dry_run,
        init: args.init,
    };

    match orchestration::run(&run_args, &settings, &reporter)? {
        RunOutcome::Initialized(_) => {}
        RunOutcome::Bumped(summary) => {
            if summary.vcs.is_none() && !run_args.dry_run {
                reporter.status(&format!("Version is now {}", summary.next));
            }
        }
    }

    Ok(())
}
