//! Typed errors of the referee.

use std::path::PathBuf;

/// A move the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// 0-based column left or right of the board.
    #[error("column {} is outside the board", .0.saturating_add(1))]
    OutOfRange(i64),

    /// 0-based column without room left.
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),
}

/// Faults detected before any match is started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// An agent path that cannot be launched.
    #[error("agent '{}' is not an executable file", .0.display())]
    NotExecutable(PathBuf),

    /// Game count that is not an unsigned integer.
    #[error("invalid number of games: '{0}'")]
    InvalidGameCount(String),
}
