//! Moves of agent executables.
//!
//! The board is sent with [`encode_board`](crate::protocol::encode_board), the answer is read
//! from the last line of the merged output. A failed exit or an answer that cannot be played is
//! [`MoveOutcome::Illegal`].

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::configuration::Configuration;
use crate::move_source::{MoveOutcome, MoveSource};
use crate::moves::check_move;
use crate::player::Side;
use crate::process::{AgentProcess, ProcessOutcome};
use crate::protocol::{encode_board, parse_response, split_response};
use crate::report;

/// Plays the moves of an agent executable: one process per move, bounded by the action timeout.
#[derive(Debug, Clone)]
pub struct AgentChannel {
    name: String,
    path: PathBuf,
    action_timeout: Duration,
    verbose: bool,
    debug_output: bool,
}

impl AgentChannel {
    /// Agent `name` run from `path`, with the time limit and output options of `config`.
    pub fn new(name: String, path: PathBuf, config: &Configuration) -> AgentChannel {
        AgentChannel {
            name,
            path,
            action_timeout: config.action_timeout,
            verbose: config.verbose,
            debug_output: config.debug_agent_output,
        }
    }

    /// Launch the agent on `board` and classify its answer.
    ///
    /// The process is gone when this returns, whatever the outcome.
    #[instrument(skip_all, fields(agent = %self.name, ?side))]
    pub fn request_move(&self, board: &Board, side: Side) -> anyhow::Result<MoveOutcome> {
        let message = encode_board(board, side);
        let start = Instant::now();
        let mut process = AgentProcess::spawn(&self.path, message.as_bytes())
            .with_context(|| format!("agent '{}' could not play", self.name))?;
        let outcome = process.wait_with_deadline(start + self.action_timeout)?;
        drop(process);

        match outcome {
            ProcessOutcome::TimedOut => {
                info!(elapsed = ?start.elapsed(), "time limit exceeded");
                Ok(MoveOutcome::TimedOut)
            }
            ProcessOutcome::Finished { status, output } => {
                if self.verbose {
                    let (diagnostics, last_line) = split_response(&output);
                    if self.debug_output && !diagnostics.is_empty() {
                        println!("{diagnostics}");
                    }
                    report::print_move(&self.name, side, last_line.unwrap_or_default());
                }
                let outcome = classify(board, status, &output);
                debug!(elapsed = ?start.elapsed(), ?status, ?outcome);
                Ok(outcome)
            }
        }
    }
}

impl MoveSource for AgentChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, board: &Board, side: Side) -> anyhow::Result<MoveOutcome> {
        self.request_move(board, side)
    }
}

/// Turn the output of a finished agent into a move.
pub fn classify(board: &Board, status: ExitStatus, output: &str) -> MoveOutcome {
    if !status.success() {
        debug!(?status, "agent failed");
        return MoveOutcome::Illegal;
    }
    let Some(column) = parse_response(output) else {
        debug!("no column in agent output");
        return MoveOutcome::Illegal;
    };
    match check_move(board, column.saturating_sub(1)) {
        Ok(col) => MoveOutcome::Valid(col),
        Err(e) => {
            debug!("{e}");
            MoveOutcome::Illegal
        }
    }
}
