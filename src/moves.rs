//! Move validation and application.
//!
//! Columns are 0-based here. Anything coming from outside (agent output, terminal input) may be
//! garbage, hence the signed column type.

use crate::board::Board;
use crate::error::MoveError;
use crate::player::Side;

/// Check that a piece can be dropped in `column` and return it as a board index.
pub fn check_move(board: &Board, column: i64) -> Result<usize, MoveError> {
    let col = usize::try_from(column)
        .ok()
        .filter(|&col| col < board.cols())
        .ok_or(MoveError::OutOfRange(column))?;
    if board.top_is_full(col) {
        return Err(MoveError::ColumnFull(col));
    }
    Ok(col)
}

/// Drop a piece of `side` in `column`. Returns the row where it landed.
///
/// The board is left untouched when the move is rejected.
pub fn apply_move(board: &mut Board, column: i64, side: Side) -> Result<usize, MoveError> {
    let col = check_move(board, column)?;
    board.place(col, side).ok_or(MoveError::ColumnFull(col))
}
