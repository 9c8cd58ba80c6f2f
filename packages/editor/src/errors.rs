//! Error types for editing commands
//!
//! These never cross the protocol boundary. The engine turns every
//! failed command into a no-op; the variants exist so `can` and `run`
//! share one code path and tests can assert why a command was refused.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Textblock {0} does not exist")]
    NoSuchTextblock(usize),

    #[error("Selection is not inside a list item")]
    NotInList,

    #[error("List item has no previous sibling to nest under")]
    NoPreviousItem,

    #[error("List item is already nested {0} levels deep")]
    TooDeep(usize),

    #[error("Document structure does not match path")]
    BrokenPath,
}

pub type CommandResult<T> = Result<T, CommandError>;
