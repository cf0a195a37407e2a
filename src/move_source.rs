//! Module defining where the moves of a player come from

use crate::agent_channel::AgentChannel;
use crate::board::Board;
use crate::configuration::Configuration;
use crate::error::SetupError;
use crate::human::HumanInput;
use crate::player::{is_program, PlayerDescriptor, PlayerKind, Side};

/// Result of asking a player for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A legal 0-based column.
    Valid(usize),
    /// Malformed, out of range, full column, or a failed agent.
    Illegal,
    /// The agent did not answer within the time limit.
    TimedOut,
}

/// What a player should implement to take part in a match
pub trait MoveSource {
    /// Name used in prompts and reports.
    fn name(&self) -> &str;

    /// Obtain the move of `side` on `board`.
    ///
    /// # Error
    /// Returned when the move cannot be obtained at all (I/O failure, closed terminal, ...).
    /// A bad move is not an error, it is reported through [`MoveOutcome`].
    fn next_move(&mut self, board: &Board, side: Side) -> anyhow::Result<MoveOutcome>;
}

/// Build the move source of `player`.
///
/// # Error
/// Agents must still be executable: this is checked here so a match never starts with a
/// player that cannot be launched.
pub fn from_player(
    player: &PlayerDescriptor,
    config: &Configuration,
) -> Result<Box<dyn MoveSource>, SetupError> {
    match &player.kind {
        PlayerKind::Agent(path) => {
            if !is_program(path) {
                return Err(SetupError::NotExecutable(path.clone()));
            }
            Ok(Box::new(AgentChannel::new(
                player.name.clone(),
                path.clone(),
                config,
            )))
        }
        PlayerKind::Human => Ok(Box::new(HumanInput::from_terminal(player.name.clone()))),
    }
}
