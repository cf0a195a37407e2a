//! Moves typed on a terminal.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use anyhow::{bail, Context};
use tracing::trace;

use crate::board::Board;
use crate::move_source::{MoveOutcome, MoveSource};
use crate::moves::check_move;
use crate::player::Side;

/// Where typed lines come from.
///
/// The terminal is not locked between prompts, so two humans can share it.
pub trait LineInput {
    /// Append the next line to `buf`. Returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl LineInput for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts someone for moves until a legal one is typed.
///
/// Humans have no time limit and cannot lose by a bad entry: invalid input only triggers a new
/// prompt.
pub struct HumanInput<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl HumanInput<Stdin, Stdout> {
    /// Read moves from the controlling terminal.
    pub fn from_terminal(name: String) -> Self {
        HumanInput::new(name, io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanInput<R, W> {
    /// Prompt on `prompt` and read entries from `input`.
    pub fn new(name: String, input: R, prompt: W) -> Self {
        HumanInput {
            name,
            input,
            prompt,
        }
    }

    /// Prompt until a column that can take a piece is entered. Returns it 0-based.
    pub fn read_move(&mut self, board: &Board, side: Side) -> anyhow::Result<usize> {
        let mut line = String::new();
        loop {
            write!(self.prompt, "{}'s move ({}): ", self.name, side.symbol())
                .and_then(|()| self.prompt.flush())
                .context("could not write prompt")?;

            line.clear();
            let n = self
                .input
                .read_line(&mut line)
                .context("could not read move")?;
            if n == 0 {
                bail!("input closed while waiting for {}'s move", self.name);
            }

            let Ok(number) = line.trim().parse::<i64>() else {
                trace!(entry = line.trim(), "not a number");
                continue;
            };
            match check_move(board, number.saturating_sub(1)) {
                Ok(col) => return Ok(col),
                Err(e) => trace!("{e}"),
            }
        }
    }
}

impl<R: LineInput, W: Write> MoveSource for HumanInput<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, board: &Board, side: Side) -> anyhow::Result<MoveOutcome> {
        self.read_move(board, side).map(MoveOutcome::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(input: &str) -> HumanInput<&[u8], Vec<u8>> {
        HumanInput::new("Alice".to_string(), input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_first_valid_entry_is_played() {
        let mut alice = human("5\n");
        let board = Board::default();
        assert_eq!(alice.read_move(&board, Side::First).unwrap(), 4);
        assert_eq!(String::from_utf8(alice.prompt).unwrap(), "Alice's move (X): ");
    }

    #[test]
    fn test_invalid_entries_reprompt() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.place(0, Side::Second);
        }
        let mut alice = human("left\n0\n8\n1\n\n 2 \n");
        assert_eq!(
            alice.next_move(&board, Side::Second).unwrap(),
            MoveOutcome::Valid(1)
        );
        let prompts = String::from_utf8(alice.prompt).unwrap();
        assert_eq!(prompts.matches("Alice's move (O): ").count(), 6);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut alice = human("nope\n");
        assert!(alice.read_move(&Board::default(), Side::First).is_err());
    }
}
