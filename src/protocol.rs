//! Text protocol spoken with agent executables.
//!
//! * Referee -> Agent (stdin, then closed): one line per column, left to right, holding the
//!   symbols of its pieces bottom-up (`X` or `O`, empty cells are omitted), followed by a line
//!   with the symbol of the side to move.
//! * Agent -> Referee (stdout and stderr): free diagnostic text, then a line with the chosen
//!   1-based column. Only the last non-empty line is read.
//!
//! For instance, after `X` played column 4 and `O` column 3, `X` receives:
//!
//! ```text
//!
//!
//! O
//! X
//!
//!
//!
//! X
//! ```

use anyhow::{bail, ensure, Context};

use crate::board::Board;
use crate::configuration::Rules;
use crate::player::Side;

/// Serialize `board` for an agent playing `side`.
pub fn encode_board(board: &Board, side: Side) -> String {
    let mut message = String::with_capacity(board.rules().cell_count() + board.cols() + 2);
    for col in 0..board.cols() {
        // highlighted pieces are sent as plain pieces
        message.extend(board.column(col).filter_map(|cell| cell.owner()).map(Side::symbol));
        message.push('\n');
    }
    message.push(side.symbol());
    message.push('\n');
    message
}

/// Parse a message built by [`encode_board`]. Carriage returns are ignored.
///
/// # Errors
/// Returned on unknown symbols, columns holding more pieces than `rules` allows, or when the
/// message ends before the side to move.
pub fn decode_board(input: &str, rules: Rules) -> anyhow::Result<(Board, Side)> {
    let mut symbols = input.chars().filter(|&c| c != '\r');
    let mut board = Board::empty(rules);
    let mut col = 0;
    while col < rules.cols {
        match symbols.next() {
            Some('\n') => col += 1,
            Some(symbol) => {
                let side = Side::from_symbol(symbol)
                    .with_context(|| format!("unexpected symbol {symbol:?} in column {}", col + 1))?;
                ensure!(
                    !board.top_is_full(col),
                    "column {} holds more than {} pieces",
                    col + 1,
                    rules.rows
                );
                board.place(col, side);
            }
            None => bail!("input ended after {col} of {} columns", rules.cols),
        }
    }
    let side = symbols
        .next()
        .and_then(Side::from_symbol)
        .context("last input symbol must be 'X' or 'O'")?;
    Ok((board, side))
}

/// Split agent output into its diagnostic part and its last non-empty line.
pub fn split_response(output: &str) -> (&str, Option<&str>) {
    let trimmed = output.trim_end();
    match trimmed.rfind('\n') {
        Some(pos) => (&trimmed[..pos], Some(trimmed[pos + 1..].trim())),
        None if trimmed.trim().is_empty() => ("", None),
        None => ("", Some(trimmed.trim())),
    }
}

/// The 1-based column announced by an agent, if its last line is a decimal number.
pub fn parse_response(output: &str) -> Option<i64> {
    split_response(output).1?.parse().ok()
}
