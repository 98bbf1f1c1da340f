//! Validate command implementation.

use super::CommandStatus;
use crate::error::Result;
use crate::output::Formatter;
use docket_organizer::Organizer;
use std::path::Path;

/// Execute the validate command.
pub fn execute_validate(root: &Path, organizer: &Organizer, formatter: &Formatter) -> Result<CommandStatus> {
    let report = organizer.validate(root)?;
    println!("{}", formatter.format_validation(&report)?);

    if report.is_success() {
        Ok(CommandStatus::Clean)
    } else {
        Ok(CommandStatus::ActionNeeded)
    }
}
