#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use observer::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod observer;
mod types;

/// Fixed 3x3 board in row-major order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub fn validate_index(index: CellIndex) -> Result<CellIndex> {
        if usize::from(index) < BOARD_CELLS {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..).zip(self.cells.iter().copied())
    }

    pub fn taken_count(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_taken()).count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_taken())
    }

    /// Scans [`WINNING_LINES`] in order and returns the first uniformly taken line.
    pub fn winning_line(&self) -> Option<(Player, Line)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|index| self[index]);
            match a {
                Cell::Taken(player) if a == b && b == c => Some((player, line)),
                _ => None,
            }
        })
    }

    pub(crate) fn place(&mut self, index: CellIndex, player: Player) {
        self.cells[usize::from(index)] = Cell::Taken(player);
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Placed { next: Player },
    Won { player: Player, line: Line },
    Draw,
}

impl MoveOutcome {
    pub const fn is_final(self) -> bool {
        use MoveOutcome::*;
        match self {
            Placed { .. } => false,
            Won { .. } => true,
            Draw => true,
        }
    }
}
