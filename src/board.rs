//! Board state and win detection.
//!
//! Row 0 is the bottom of the board: pieces fall towards it and columns fill upwards.

use crate::configuration::Rules;
use crate::player::Side;

/// Content of a board cell.
///
/// `Player1Win` and `Player2Win` only appear once a winning line has been found, to highlight
/// its pieces. They still belong to their player.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
    /// Piece of the first player in the winning line.
    Player1Win,
    /// Piece of the second player in the winning line.
    Player2Win,
}

impl Cell {
    /// Display symbol.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player1 => 'X',
            Cell::Player2 => 'O',
            Cell::Player1Win => '#',
            Cell::Player2Win => '*',
        }
    }

    /// The side owning this piece, highlighted or not.
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player1 | Cell::Player1Win => Some(Side::First),
            Cell::Player2 | Cell::Player2Win => Some(Side::Second),
        }
    }

    /// False only for [`Cell::Empty`].
    pub fn is_occupied(self) -> bool {
        self != Cell::Empty
    }

    /// True for highlighted pieces.
    pub fn is_win_marker(self) -> bool {
        matches!(self, Cell::Player1Win | Cell::Player2Win)
    }

    fn highlighted(self) -> Cell {
        match self {
            Cell::Player1 => Cell::Player1Win,
            Cell::Player2 => Cell::Player2Win,
            other => other,
        }
    }
}

/// A `rows x cols` grid filled by gravity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rules: Rules,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn empty(rules: Rules) -> Self {
        Board {
            rules,
            cells: vec![Cell::Empty; rules.cell_count()],
        }
    }

    /// Geometry of this board.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rules.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.rules.cols
    }

    /// Get the cell at a specific position, row 0 being the bottom.
    ///
    /// # Panics
    /// Panics when the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Occupied cells of `col`, bottom-up.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows())
            .map(move |row| self.get(row, col))
            .take_while(|cell| cell.is_occupied())
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Drop a piece of `side` in `col` and return the row where it landed.
    ///
    /// No validation is done: the caller checks that `col` is on the board and not full.
    /// A full column is left untouched and `None` is returned.
    pub fn place(&mut self, col: usize, side: Side) -> Option<usize> {
        let row = (0..self.rows()).find(|&row| !self.get(row, col).is_occupied())?;
        let index = self.index(row, col);
        self.cells[index] = side.piece();
        Some(row)
    }

    /// True if the top cell of `col` is occupied.
    pub fn top_is_full(&self, col: usize) -> bool {
        self.get(self.rows() - 1, col).is_occupied()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols()).all(|col| self.top_is_full(col))
    }

    /// Check if someone has `win_length` pieces in a row.
    ///
    /// Lines are walked from every border cell: rows from column 0 (horizontal and both
    /// diagonals), then columns from row 0 (vertical and `/` diagonal) and from the top row
    /// (`\` diagonal). The first winning line met is highlighted and the scan stops, so only
    /// one line is ever marked even when several exist.
    pub fn is_terminal_win(&mut self) -> bool {
        let last_row = self.rows() as isize - 1;
        for row in 0..self.rows() as isize {
            for step in [(0, 1), (1, 1), (-1, 1)] {
                if self.scan_line((row, 0), step) {
                    return true;
                }
            }
        }
        for col in 0..self.cols() as isize {
            for (start, step) in [((0, col), (1, 0)), ((0, col), (1, 1)), ((last_row, col), (-1, 1))] {
                if self.scan_line(start, step) {
                    return true;
                }
            }
        }
        false
    }

    /// Walk from `start` in direction `step` looking for a long enough run of one owner.
    fn scan_line(&mut self, start: (isize, isize), step: (isize, isize)) -> bool {
        let (mut row, mut col) = start;
        let mut previous: Option<Option<Side>> = None;
        let mut run = 0;
        while self.contains(row, col) {
            let owner = self.get(row as usize, col as usize).owner();
            if previous == Some(owner) {
                run += 1;
            } else {
                previous = Some(owner);
                run = 1;
            }
            if owner.is_some() && run == self.rules.win_length {
                self.highlight((row, col), step);
                return true;
            }
            row += step.0;
            col += step.1;
        }
        false
    }

    /// Mark the `win_length` cells ending at `end`.
    fn highlight(&mut self, end: (isize, isize), step: (isize, isize)) {
        let (mut row, mut col) = end;
        for _ in 0..self.rules.win_length {
            let index = self.index(row as usize, col as usize);
            self.cells[index] = self.cells[index].highlighted();
            row -= step.0;
            col -= step.1;
        }
    }

    fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.rows() as isize).contains(&row) && (0..self.cols() as isize).contains(&col)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({row}, {col}) is outside the {}x{} board",
            self.rows(),
            self.cols()
        );
        row * self.cols() + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(Rules::standard())
    }
}
