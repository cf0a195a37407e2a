//! # Connect Four Referee
//!
//! Referees Connect-Four matches between two players, each being either an agent executable or a
//! human typing moves on the terminal.
//!
//! It provides:
//! - Board state, gravity drops and win detection (`Board`)
//! - A strict match state machine where the first bad move loses (`run_match`)
//! - Agent processes bounded by a wall-clock time limit per move (`AgentChannel`)
//! - Series of matches with alternating first player and summed points (`Series`)
//!
//! Each agent move is a separate OS process: the board is written to its standard input, which is
//! then closed, and the chosen column is read from the last line of its output. An agent that is
//! too slow is killed and loses the match, as does an agent answering garbage, a full column, or
//! exiting with an error.
//!
//! # Documentation Overview
//!
//! - For the board encoding and the agent answer format, see the [`protocol`] module.
//! - For the points awarded at the end of a match, see the [`scorer`] module.
//! - For the time limit and other options, see [`Configuration`](crate::configuration::Configuration).
//! - To plug in another kind of player, implement the [`MoveSource`](crate::move_source::MoveSource) trait.
//!
//! # Usage Example
//!
//! ```no_run
//! use std::time::Duration;
//! use connect_four_referee::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::new()
//!         .with_action_timeout(Duration::from_millis(500))
//!         .with_verbose(false);
//!
//!     let players = [
//!         PlayerDescriptor::agent("./my-agent"),
//!         PlayerDescriptor::agent("./random-agent"),
//!     ];
//!     let score = Series::new(players, 10, config)?.run()?;
//!     println!("{} {}", score.totals[0], score.totals[1]);
//!     Ok(())
//! }
//! ```
//!
//! # Example Agent
//!
//! ```no_run
//! use std::io::Read;
//!
//! use connect_four_referee::configuration::Rules;
//! use connect_four_referee::protocol::decode_board;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut input = String::new();
//!     std::io::stdin().read_to_string(&mut input)?;
//!     let (board, _side) = decode_board(&input, Rules::standard())?;
//!
//!     // anything printed before the last line is only shown to humans
//!     println!("looking for the leftmost open column");
//!     let col = (0..board.cols()).find(|&c| !board.top_is_full(c)).unwrap_or(0);
//!     println!("{}", col + 1);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;

mod agent_channel;
pub mod board;
pub mod cli;
pub mod configuration;
pub mod error;
mod human;
mod logger;
pub mod match_runner;
pub mod move_source;
pub mod moves;
pub mod player;
mod process;
pub mod protocol;
pub mod report;
pub mod scorer;
pub mod series;

pub use agent_channel::{classify, AgentChannel};
pub use human::{HumanInput, LineInput};

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use connect_four_referee::prelude::*;
/// ```
pub mod prelude {
    pub use crate::agent_channel::AgentChannel;
    pub use crate::board::{Board, Cell};
    pub use crate::configuration::{Configuration, Rules};
    pub use crate::error::{MoveError, SetupError};
    pub use crate::human::HumanInput;
    pub use crate::match_runner::{run_match, MatchResult, MatchState};
    pub use crate::move_source::{MoveOutcome, MoveSource};
    pub use crate::player::{PlayerDescriptor, PlayerKind, Side};
    pub use crate::scorer::{score, TerminalReason};
    pub use crate::series::{Series, SeriesScore};
}
