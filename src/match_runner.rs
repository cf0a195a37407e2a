//! One match, from an empty board to its terminal state.
//!
//! The first move that is not valid ends the match: agents get no second chance. Human sources
//! never return an invalid move, they keep prompting instead.

use tracing::{debug, info, instrument, trace, warn};

use crate::board::Board;
use crate::configuration::Rules;
use crate::move_source::{MoveOutcome, MoveSource};
use crate::moves::apply_move;
use crate::player::Side;
use crate::report;
use crate::scorer::{score, TerminalReason};

/// State of a running match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the move of this side.
    AwaitingMove(Side),
    /// The match is over.
    Terminal(TerminalReason),
}

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Why the match ended.
    pub reason: TerminalReason,
    /// Points of each player slot.
    pub points: [u32; 2],
    /// Number of move attempts, the failed one included.
    pub moves: usize,
    /// Final position, with the winning line highlighted.
    pub board: Board,
}

/// Play one match on an empty board, `starting` moving first.
///
/// Moves are requested from `sources[side.index()]`. The first move that is not valid ends the
/// match, there are no retries.
///
/// # Errors
/// Only when a source cannot produce a move at all (see [`MoveSource::next_move`]).
#[instrument(skip_all, fields(first = sources[0].name(), second = sources[1].name(), ?starting))]
pub fn run_match(
    rules: Rules,
    sources: &mut [Box<dyn MoveSource>; 2],
    starting: Side,
    verbose: bool,
) -> anyhow::Result<MatchResult> {
    let mut board = Board::empty(rules);
    let mut state = MatchState::AwaitingMove(starting);
    let mut moves = 0;

    let reason = loop {
        let side = match state {
            MatchState::Terminal(reason) => break reason,
            MatchState::AwaitingMove(_) if moves == rules.cell_count() => {
                warn!("move limit reached without a full board");
                break TerminalReason::Tie;
            }
            MatchState::AwaitingMove(side) => side,
        };

        if verbose {
            report::print_board(&board);
        }
        trace!(?side, moves, "player to play");
        let outcome = sources[side.index()].next_move(&board, side)?;
        moves += 1;
        state = advance(&mut board, side, outcome);
    };

    if verbose && matches!(reason, TerminalReason::Win(_) | TerminalReason::Tie) {
        report::print_board(&board);
    }
    let points = score(reason);
    info!(%reason, winner = ?reason.winner(), ?points, moves, "match over");

    Ok(MatchResult {
        reason,
        points,
        moves,
        board,
    })
}

/// Apply the outcome of the move of `side` and find the next state.
pub fn advance(board: &mut Board, side: Side, outcome: MoveOutcome) -> MatchState {
    let column = match outcome {
        MoveOutcome::Valid(column) => column,
        MoveOutcome::Illegal => return MatchState::Terminal(TerminalReason::Illegal(side)),
        MoveOutcome::TimedOut => return MatchState::Terminal(TerminalReason::Timeout(side)),
    };
    if let Err(e) = apply_move(board, column as i64, side) {
        // sources validate their moves, this one lied
        warn!("rejected move from {side:?}: {e}");
        return MatchState::Terminal(TerminalReason::Illegal(side));
    }
    debug!(?side, column, "move applied");

    if board.is_terminal_win() {
        MatchState::Terminal(TerminalReason::Win(side))
    } else if board.is_full() {
        MatchState::Terminal(TerminalReason::Tie)
    } else {
        MatchState::AwaitingMove(side.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_move_passes_the_turn() {
        let mut board = Board::default();
        let state = advance(&mut board, Side::First, MoveOutcome::Valid(3));
        assert_eq!(state, MatchState::AwaitingMove(Side::Second));
        assert_eq!(board.get(0, 3).owner(), Some(Side::First));
    }

    #[test]
    fn test_failures_end_the_match() {
        let mut board = Board::default();
        assert_eq!(
            advance(&mut board, Side::Second, MoveOutcome::Illegal),
            MatchState::Terminal(TerminalReason::Illegal(Side::Second))
        );
        assert_eq!(
            advance(&mut board, Side::First, MoveOutcome::TimedOut),
            MatchState::Terminal(TerminalReason::Timeout(Side::First))
        );
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_lying_source_is_illegal() {
        let mut board = Board::default();
        assert_eq!(
            advance(&mut board, Side::First, MoveOutcome::Valid(9)),
            MatchState::Terminal(TerminalReason::Illegal(Side::First))
        );
    }

    #[test]
    fn test_winning_move() {
        let mut board = Board::default();
        for _ in 0..3 {
            board.place(5, Side::Second);
        }
        assert_eq!(
            advance(&mut board, Side::Second, MoveOutcome::Valid(5)),
            MatchState::Terminal(TerminalReason::Win(Side::Second))
        );
    }

    #[test]
    fn test_win_on_last_cell_is_a_win() {
        let mut board = Board::empty(Rules::new(1, 4, 4).unwrap());
        for col in 0..3 {
            board.place(col, Side::First);
        }
        assert_eq!(
            advance(&mut board, Side::First, MoveOutcome::Valid(3)),
            MatchState::Terminal(TerminalReason::Win(Side::First))
        );
    }

    #[test]
    fn test_filling_move_is_a_tie() {
        let mut board = Board::empty(Rules::new(1, 3, 3).unwrap());
        board.place(0, Side::First);
        board.place(1, Side::Second);
        assert_eq!(
            advance(&mut board, Side::First, MoveOutcome::Valid(2)),
            MatchState::Terminal(TerminalReason::Tie)
        );
    }
}
