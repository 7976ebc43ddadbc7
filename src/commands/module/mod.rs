//! `module` command family
//!
//! Each subcommand works against a discovered project through the
//! [`VersionControl`] and [`WorkspaceSync`] seams so it can be exercised
//! without git or npm.

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod update;

use std::path::PathBuf;

use crate::cli::{ModuleArgs, ModuleCommand};
use crate::error::Result;
use crate::git::{GitCli, VersionControl};
use crate::ui::{ConsoleReporter, Reporter};
use crate::workspace::{self, CommandSync, Project, WorkspaceSync};

/// Shared collaborators of module subcommands
pub struct Context<'a> {
    pub project: &'a Project,
    pub vcs: &'a dyn VersionControl,
    pub sync: &'a dyn WorkspaceSync,
    pub reporter: &'a dyn Reporter,
}

/// Run a module subcommand
pub fn run(project: Option<PathBuf>, verbose: bool, args: ModuleArgs) -> Result<()> {
    let start = workspace::start_dir(project)?;
    let project = Project::discover_in_repository(&start)?;

    let reporter = ConsoleReporter::new(verbose);
    reporter.debug(&format!("Project root: {}", project.root.display()));

    let git = GitCli::new();
    let sync = CommandSync::from_config(&project.config);
    let ctx = Context {
        project: &project,
        vcs: &git,
        sync: &sync,
        reporter: &reporter,
    };

    match args.command {
        ModuleCommand::Add(args) => add::run(&ctx, &args),
        ModuleCommand::Remove(args) => remove::run(&ctx, &args),
        ModuleCommand::Update(args) => update::run(&ctx, &args),
        ModuleCommand::List => list::run(&project),
        ModuleCommand::Init(args) => init::run(&ctx, &args),
    }
}

/// Run the workspace sync once, or report that it is disabled
pub fn sync_workspace(ctx: &Context<'_>) -> Result<()> {
    if !ctx.sync.enabled() {
        ctx.reporter.info("Workspace sync skipped");
        return Ok(());
    }

    ctx.reporter
        .start_activity(&format!("Running {}", ctx.sync.describe()));
    let synced = ctx.sync.sync(&ctx.project.root);
    ctx.reporter.finish_activity();
    synced?;

    ctx.reporter
        .success(&format!("Workspace synced ({})", ctx.sync.describe()));
    Ok(())
}
