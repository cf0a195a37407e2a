//! Console output of the referee: boards, moves and scores.

use std::fmt::Write;

use crate::board::Board;
use crate::match_runner::MatchResult;
use crate::player::Side;
use crate::scorer::TerminalReason;

/// Board drawn top row first, with 1-based column labels.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..board.rows()).rev() {
        out.push_str("| ");
        for col in 0..board.cols() {
            out.push(board.get(row, col).symbol());
            out.push(' ');
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "+{}+", "-".repeat(2 * board.cols() + 1));
    out.push(' ');
    for col in 1..=board.cols() {
        let _ = write!(out, " {col}");
    }
    out.push_str("  \n");
    out
}

/// Print `board` after an empty line.
pub fn print_board(board: &Board) {
    println!();
    print!("{}", render_board(board));
}

/// Announce the column chosen by an agent.
pub fn print_move(name: &str, side: Side, column: &str) {
    println!("{name}'s move ({}): {column}", side.symbol());
}

/// Outcome line of a match, e.g. `"bot (X) wins!"`.
pub fn outcome_line(names: [&str; 2], reason: TerminalReason) -> String {
    match reason {
        TerminalReason::Tie => "It's a tie!".to_string(),
        TerminalReason::Illegal(side) => format!("{} loses (illegal move)", names[side.index()]),
        TerminalReason::Timeout(side) => {
            format!("{} loses (time limit exceeded)", names[side.index()])
        }
        TerminalReason::Win(side) => {
            format!("{} ({}) wins!", names[side.index()], side.symbol())
        }
    }
}

/// Points line, e.g. `"Score:  a - 4,  b - 1"`.
pub fn score_line(label: &str, names: [&str; 2], points: [u32; 2]) -> String {
    format!(
        "{label}:  {} - {},  {} - {}",
        names[0], points[0], names[1], points[1]
    )
}

/// Print the outcome and points of a match.
pub fn print_match_result(names: [&str; 2], result: &MatchResult) {
    println!("{}", outcome_line(names, result.reason));
    println!("{}", score_line("Score", names, result.points));
}

/// Totals of a series, as printed at the very end. Quiet mode only gets the bare pair.
pub fn final_report(names: [&str; 2], totals: [u32; 2], verbose: bool) -> String {
    if verbose {
        format!("\n{}\n\n", score_line("Final Score", names, totals))
    } else {
        format!("{} {}\n", totals[0], totals[1])
    }
}

/// Print the [`final_report`].
pub fn print_final(names: [&str; 2], totals: [u32; 2], verbose: bool) {
    print!("{}", final_report(names, totals, verbose));
}
