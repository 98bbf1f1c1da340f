//! Command implementations.

pub mod config;
pub mod organize;
pub mod validate;

pub use self::config::execute_config;
pub use self::organize::execute_organize;
pub use self::validate::execute_validate;

/// How a command finished, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Nothing left to do
    Clean,
    /// Moves are pending, a move failed, or validation found errors
    ActionNeeded,
}

impl CommandStatus {
    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            CommandStatus::Clean => 0,
            CommandStatus::ActionNeeded => 1,
        }
    }
}
