//! Organize command implementation.

use super::CommandStatus;
use crate::cli::OrganizeArgs;
use crate::error::Result;
use crate::output::Formatter;
use docket_organizer::Organizer;
use std::path::Path;

/// Execute the organize command.
pub fn execute_organize(
    args: OrganizeArgs,
    root: &Path,
    organizer: &Organizer,
    formatter: &Formatter,
) -> Result<CommandStatus> {
    let plan = organizer.plan(root)?;
    let pending = plan.pending_moves().count();
    // Unreadable documents are recorded errors even when nothing moves.
    let unreadable = !plan.read_failures.is_empty();
    let apply = args.auto_move && !args.dry_run;

    if pending == 0 || !apply {
        println!("{}", formatter.format_organize(&plan, None)?);
        if pending == 0 {
            return Ok(status(unreadable));
        }
        if formatter.is_verbose_format() {
            println!(
                "{}",
                formatter.info(&format!(
                    "Dry run: would move {} file(s). Re-run with --auto-move to apply.",
                    pending
                ))
            );
        }
        return Ok(CommandStatus::ActionNeeded);
    }

    let update_links = organizer.config().update_cross_references && !args.no_cross_ref_update;
    let outcome = organizer.apply(root, &plan, update_links)?;
    println!("{}", formatter.format_organize(&plan, Some(&outcome))?);

    Ok(status(unreadable || !outcome.moves.is_complete()))
}

fn status(action_needed: bool) -> CommandStatus {
    if action_needed {
        CommandStatus::ActionNeeded
    } else {
        CommandStatus::Clean
    }
}
