use connect_four_referee::prelude::*;

use crate::sources::{Recorder, Scripted};

mod sources;

fn humans() -> [PlayerDescriptor; 2] {
    [PlayerDescriptor::human("alice"), PlayerDescriptor::human("bob")]
}

#[test]
fn vertical_win_in_column_four() {
    let mut sources = [
        Scripted::columns("alice", &[3, 3, 3, 3]),
        Scripted::columns("bob", &[0, 0, 0]),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Win(Side::First));
    assert_eq!(result.points, [4, 1]);
    assert_eq!(result.moves, 7);
    for row in 0..4 {
        assert_eq!(result.board.get(row, 3), Cell::Player1Win);
    }
    assert_eq!(result.board.get(0, 0), Cell::Player2);
}

#[test]
fn second_slot_can_open_and_win() {
    let mut sources = [
        Scripted::columns("alice", &[0, 1, 2]),
        Scripted::columns("bob", &[6, 6, 6, 6]),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::Second, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Win(Side::Second));
    assert_eq!(result.points, [1, 4]);
    assert_eq!(result.moves, 7);
    assert_eq!(result.board.get(3, 6), Cell::Player2Win);
}

#[test]
fn full_board_is_a_tie() {
    let mut sources = [
        Scripted::columns(
            "alice",
            &[5, 2, 1, 3, 0, 4, 2, 0, 6, 2, 6, 4, 3, 3, 2, 2, 0, 1, 5, 4, 6],
        ),
        Scripted::columns(
            "bob",
            &[3, 3, 5, 1, 1, 1, 5, 5, 6, 0, 0, 2, 0, 4, 3, 6, 4, 1, 4, 5, 6],
        ),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Tie);
    assert_eq!(result.points, [2, 2]);
    assert_eq!(result.reason.winner(), None);
    assert_eq!(result.moves, 42);
    assert!(result.board.is_full());
}

#[test]
fn illegal_move_ends_the_match() {
    let mut sources = [
        Scripted::columns("alice", &[3, 3]),
        Scripted::outcomes("bob", [MoveOutcome::Illegal]),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Illegal(Side::Second));
    assert_eq!(result.points, [1, 0]);
    assert_eq!(result.reason.winner(), Some(Side::First));
    assert_eq!(result.moves, 2);
    assert_eq!(result.board.piece_count(), 1);
}

#[test]
fn timeout_on_first_move() {
    let mut sources = [
        Scripted::outcomes("alice", [MoveOutcome::TimedOut]),
        Scripted::columns("bob", &[]),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Timeout(Side::First));
    assert_eq!(result.points, [0, 1]);
    assert_eq!(result.moves, 1);
    assert_eq!(result.board.piece_count(), 0);
}

#[test]
fn playing_a_full_column_is_illegal() {
    let mut sources = [
        Scripted::columns("alice", &[0, 0, 0, 0]),
        Scripted::columns("bob", &[0, 0, 0]),
    ];
    let result = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Illegal(Side::First));
    assert_eq!(result.points, [0, 1]);
    assert_eq!(result.moves, 7);
    assert_eq!(result.board.column(0).count(), 6);
}

#[test]
fn source_failure_aborts_the_match() {
    let mut sources = [
        Scripted::columns("alice", &[3]),
        Scripted::columns("bob", &[]),
    ];
    let err = run_match(Rules::standard(), &mut sources, Side::First, false).unwrap_err();
    assert!(err.to_string().contains("bob"));
}

#[test]
fn small_board_match() {
    let rules = Rules::new(3, 3, 3).unwrap();
    let mut sources = [
        Scripted::columns("alice", &[0, 1, 2]),
        Scripted::columns("bob", &[0, 1]),
    ];
    let result = run_match(rules, &mut sources, Side::First, false).unwrap();

    assert_eq!(result.reason, TerminalReason::Win(Side::First));
    assert_eq!(result.moves, 5);
    assert_eq!(result.board.get(0, 2), Cell::Player1Win);
}

#[test]
fn series_alternates_the_starting_side() {
    let series = Series::new(humans(), 4, Configuration::new()).unwrap();
    let (first, first_sides) = Recorder::new(MoveOutcome::Illegal);
    let (second, second_sides) = Recorder::new(MoveOutcome::Illegal);
    let mut sources = [first, second];

    let score = series.run_with(&mut sources).unwrap();

    let reasons: Vec<_> = score.results.iter().map(|result| result.reason).collect();
    assert_eq!(
        reasons,
        [
            TerminalReason::Illegal(Side::First),
            TerminalReason::Illegal(Side::Second),
            TerminalReason::Illegal(Side::First),
            TerminalReason::Illegal(Side::Second),
        ]
    );
    assert_eq!(score.totals, [2, 2]);
    assert_eq!(*first_sides.borrow(), [Side::First, Side::First]);
    assert_eq!(*second_sides.borrow(), [Side::Second, Side::Second]);
}

#[test]
fn series_totals_sum_match_points() {
    let series = Series::new(humans(), 2, Configuration::new()).unwrap();
    let mut sources = [
        Scripted::columns("alice", &[3, 3, 3, 3, 0, 1, 2]),
        Scripted::columns("bob", &[0, 0, 0, 6, 6, 6, 6]),
    ];

    let score = series.run_with(&mut sources).unwrap();

    assert_eq!(score.results[0].reason, TerminalReason::Win(Side::First));
    assert_eq!(score.results[1].reason, TerminalReason::Win(Side::Second));
    assert_eq!(score.totals, [5, 5]);
}

#[test]
fn series_stops_when_a_source_fails() {
    let series = Series::new(humans(), 3, Configuration::new()).unwrap();
    let mut sources = [
        Scripted::outcomes("alice", [MoveOutcome::Illegal]),
        Scripted::columns("bob", &[]),
    ];

    let err = series.run_with(&mut sources).unwrap_err();
    assert!(format!("{err:#}").contains("match 2 could not be played"));
}
