//! `module update` command

use super::{Context, sync_workspace};
use crate::cli::UpdateArgs;
use crate::error::{Result, deps::module_not_found};
use crate::git::UpdateOptions;
use crate::workspace::module_path;

/// Pull the latest remote commits of one or all modules, then sync once
pub fn run(ctx: &Context<'_>, args: &UpdateArgs) -> Result<()> {
    let name = match &args.name {
        Some(name) => {
            if !ctx.project.module_dir(name).exists() {
                return Err(module_not_found(name));
            }
            Some(module_path(name))
        }
        None => None,
    };

    let options = UpdateOptions { remote: true, name };
    let label = match &args.name {
        Some(name) => format!("module '{name}'"),
        None => "all modules".to_string(),
    };

    ctx.reporter.start_activity(&format!("Updating {label}"));
    let updated = ctx.vcs.update_submodules(&ctx.project.root, &options);
    ctx.reporter.finish_activity();
    updated?;

    sync_workspace(ctx)?;

    ctx.reporter.success(&format!("Updated {label}"));
    Ok(())
}
