use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: Line },
    Draw,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Draw)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won { player, .. } => Some(player),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Turn, win and draw state machine for a single game.
///
/// `InProgress` is the initial state, `Won` and `Draw` are terminal. Only
/// [`GameEngine::reset`] leaves a terminal state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.board.get(index)
    }

    /// Player whose marker the next move places. After a win this stays on
    /// the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn move_count(&self) -> u8 {
        self.board.taken_count()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.board
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        !self.is_finished() && self.board.get(index).is_some_and(Cell::is_empty)
    }

    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let index = Board::validate_index(index)?;
        self.check_in_progress()?;

        if self.board[index].is_taken() {
            log::trace!("rejected move at {}: cell taken", index);
            return Err(GameError::CellOccupied);
        }

        let player = self.current_player;
        self.board.place(index, player);
        log::debug!("{} takes cell {}", player, index);

        Ok(self.evaluate())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn evaluate(&mut self) -> MoveOutcome {
        if let Some((player, line)) = self.board.winning_line() {
            self.status = GameStatus::Won { player, line };
            log::debug!("{} wins on {:?}", player, line);
            MoveOutcome::Won { player, line }
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            log::debug!("draw");
            MoveOutcome::Draw
        } else {
            self.current_player = self.current_player.opponent();
            MoveOutcome::Placed {
                next: self.current_player,
            }
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            log::trace!("rejected move: game already finished");
            Err(GameError::GameFinished)
        } else {
            Ok(())
        }
    }
}
