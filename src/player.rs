//! Players taking part in a match: which side they play and how their moves are obtained.

use std::path::{Path, PathBuf};

use crate::board::Cell;

/// One of the two seats of a match. `First` plays `X`, `Second` plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Player slot 0, symbol `X`.
    First,
    /// Player slot 1, symbol `O`.
    Second,
}

impl Side {
    /// Absolute player slot (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Side of slot `index mod 2`.
    pub fn from_index(index: usize) -> Side {
        if index % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Piece dropped by this side.
    pub fn piece(self) -> Cell {
        match self {
            Side::First => Cell::Player1,
            Side::Second => Cell::Player2,
        }
    }

    /// Symbol used on the wire and on screen.
    pub fn symbol(self) -> char {
        self.piece().symbol()
    }

    /// Inverse of [`Side::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Side> {
        match symbol {
            'X' => Some(Side::First),
            'O' => Some(Side::Second),
            _ => None,
        }
    }
}

/// How the moves of a player are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// An executable launched once per move.
    Agent(PathBuf),
    /// Someone typing moves on the controlling terminal.
    Human,
}

/// Identity of a player for the duration of a series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerDescriptor {
    /// Display name (the command-line argument for agents).
    pub name: String,
    /// Move source of this player.
    pub kind: PlayerKind,
}

impl PlayerDescriptor {
    /// An agent named after its path.
    pub fn agent(path: impl Into<PathBuf>) -> PlayerDescriptor {
        let path = path.into();
        PlayerDescriptor {
            name: path.display().to_string(),
            kind: PlayerKind::Agent(path),
        }
    }

    /// A human player.
    pub fn human(name: impl Into<String>) -> PlayerDescriptor {
        PlayerDescriptor {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// An argument naming an executable file is an agent, anything else is a human.
    pub fn from_arg(arg: &str) -> PlayerDescriptor {
        if is_program(arg) {
            PlayerDescriptor::agent(arg)
        } else {
            PlayerDescriptor::human(arg)
        }
    }

    /// True for agent players.
    pub fn is_agent(&self) -> bool {
        matches!(self.kind, PlayerKind::Agent(_))
    }
}

/// Check that `path` is a regular file the current user could execute.
pub fn is_program(path: impl AsRef<Path>) -> bool {
    let Ok(metadata) = std::fs::metadata(path.as_ref()) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Side::First.symbol(), 'X');
        assert_eq!(Side::Second.symbol(), 'O');
        assert_eq!(Side::from_symbol('O'), Some(Side::Second));
        assert_eq!(Side::from_symbol('#'), None);
    }

    #[test]
    fn test_from_index_alternates() {
        let sides: Vec<_> = (0..4).map(Side::from_index).collect();
        assert_eq!(sides, [Side::First, Side::Second, Side::First, Side::Second]);
    }

    #[test]
    fn test_unknown_path_is_human() {
        let player = PlayerDescriptor::from_arg("Alice");
        assert_eq!(player.kind, PlayerKind::Human);
        assert_eq!(player.name, "Alice");
        assert!(!player.is_agent());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_not_a_program() {
        assert!(!is_program(std::env::temp_dir()));
        assert!(is_program("/bin/sh"));
    }
}
