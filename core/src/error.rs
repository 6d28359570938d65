use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Cell is already taken")]
    CellOccupied,
    #[error("Game already finished, no new moves are accepted")]
    GameFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
