//! Points awarded at the end of a match.
//!
//! | Reason        | Acting side | Other side |
//! |---------------|-------------|------------|
//! | `Win`         | 4           | 1          |
//! | `Tie`         | 2           | 2          |
//! | `Illegal`     | 0           | 1          |
//! | `Timeout`     | 0           | 1          |

use std::fmt::Display;

use crate::player::Side;

/// Points of the winner of a regular match.
pub const WIN_POINTS: u32 = 4;
/// Points of the loser, whatever the reason.
pub const LOSS_POINTS: u32 = 1;
/// Points of both players on a tie.
pub const TIE_POINTS: u32 = 2;
/// Points of a player losing by an illegal move or a timeout.
pub const FORFEIT_POINTS: u32 = 0;

/// Why a match ended. The side is the one that made the last move attempt.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalReason {
    Win(Side),
    Tie,
    Illegal(Side),
    Timeout(Side),
}

impl TerminalReason {
    /// The side that won the match, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            TerminalReason::Win(side) => Some(side),
            TerminalReason::Illegal(side) | TerminalReason::Timeout(side) => Some(side.other()),
            TerminalReason::Tie => None,
        }
    }
}

impl Display for TerminalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalReason::Win(side) => write!(f, "{} wins", side.symbol()),
            TerminalReason::Tie => write!(f, "tie"),
            TerminalReason::Illegal(side) => write!(f, "{} played an illegal move", side.symbol()),
            TerminalReason::Timeout(side) => write!(f, "{} exceeded the time limit", side.symbol()),
        }
    }
}

/// Points of both player slots, indexed by [`Side::index`].
pub fn score(reason: TerminalReason) -> [u32; 2] {
    let (acting, acting_points, other_points) = match reason {
        TerminalReason::Tie => return [TIE_POINTS; 2],
        TerminalReason::Win(side) => (side, WIN_POINTS, LOSS_POINTS),
        TerminalReason::Illegal(side) | TerminalReason::Timeout(side) => {
            (side, FORFEIT_POINTS, LOSS_POINTS)
        }
    };
    let mut points = [0; 2];
    points[acting.index()] = acting_points;
    points[acting.other().index()] = other_points;
    points
}
