use neontac_core::{CellIndex, GameError, GameObserver, GameStatus, MoveOutcome, Player};

pub(crate) fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}

pub(crate) fn status_message(status: GameStatus, current: Player) -> String {
    match status {
        GameStatus::InProgress => turn_message(current),
        GameStatus::Won { player, .. } => format!("Player {} has won!", player),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}

/// Keeps the status line in sync with the game and logs what happened.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Announcer {
    message: String,
}

impl Announcer {
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self {
            message: turn_message(Player::X),
        }
    }
}

impl GameObserver for Announcer {
    fn on_move(&mut self, _index: CellIndex, player: Player, outcome: MoveOutcome) {
        self.message = match outcome {
            MoveOutcome::Placed { next } => status_message(GameStatus::InProgress, next),
            MoveOutcome::Won { player, line } => {
                log::info!("player {} won with {:?}", player, line);
                status_message(GameStatus::Won { player, line }, player)
            }
            MoveOutcome::Draw => {
                log::info!("game ended in a draw");
                status_message(GameStatus::Draw, player)
            }
        };
    }

    fn on_rejected(&mut self, index: CellIndex, error: GameError) {
        log::debug!("ignored click on cell {}: {}", index, error);
    }

    fn on_reset(&mut self) {
        log::info!("new game");
        *self = Self::default();
    }
}
