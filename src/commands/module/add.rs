//! `module add` command

use super::{Context, sync_workspace};
use crate::cli::AddArgs;
use crate::error::Result;
use crate::installer::ModuleInstaller;

/// Install a module with its dependencies, then sync once
pub fn run(ctx: &Context<'_>, args: &AddArgs) -> Result<()> {
    let summary = ModuleInstaller::new(&ctx.project.root, ctx.vcs, ctx.reporter)
        .install(&args.reference)?;

    sync_workspace(ctx)?;

    ctx.reporter.success(&format!(
        "Module {} ready: {} installed, {} already present",
        args.reference,
        summary.installed.len(),
        summary.already_present.len()
    ));
    Ok(())
}
