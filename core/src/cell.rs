use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Content of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken(_))
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
