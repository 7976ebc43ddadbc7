//! `module remove` command

use inquire::Confirm;

use super::{Context, sync_workspace};
use crate::cli::RemoveArgs;
use crate::error::{Result, deps::module_not_found};
use crate::workspace::module_path;

/// Deregister and delete an installed module, then sync once
pub fn run(ctx: &Context<'_>, args: &RemoveArgs) -> Result<()> {
    if !ctx.project.module_dir(&args.name).exists() {
        return Err(module_not_found(&args.name));
    }

    if !args.yes && !confirm_removal(&args.name)? {
        ctx.reporter.info("Removal cancelled");
        return Ok(());
    }

    ctx.reporter
        .start_activity(&format!("Removing module '{}'", args.name));
    let removed = ctx
        .vcs
        .remove_submodule(&module_path(&args.name), &ctx.project.root);
    ctx.reporter.finish_activity();
    removed?;

    sync_workspace(ctx)?;

    ctx.reporter
        .success(&format!("Removed module '{}'", args.name));
    Ok(())
}

fn confirm_removal(name: &str) -> Result<bool> {
    Ok(Confirm::new(&format!("Remove module '{name}'?"))
        .with_default(false)
        .with_help_message("The module directory and its submodule registration will be deleted")
        .prompt()?)
}
