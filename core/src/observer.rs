use crate::*;

/// Receives the transitions of an [`ObservedGame`].
///
/// Rendering and other side effects hang off this trait so that
/// [`GameEngine`] stays a plain state machine. Every method defaults to a
/// no-op.
pub trait GameObserver {
    /// Called after a move was applied. `player` is the one who moved.
    fn on_move(&mut self, _index: CellIndex, _player: Player, _outcome: MoveOutcome) {}

    /// Called when the engine refused a move.
    fn on_rejected(&mut self, _index: CellIndex, _error: GameError) {}

    /// Called after the engine was reset to a fresh game.
    fn on_reset(&mut self) {}
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_move(&mut self, index: CellIndex, player: Player, outcome: MoveOutcome) {
        (**self).on_move(index, player, outcome)
    }

    fn on_rejected(&mut self, index: CellIndex, error: GameError) {
        (**self).on_rejected(index, error)
    }

    fn on_reset(&mut self) {
        (**self).on_reset()
    }
}

/// A [`GameEngine`] paired with the observer that gets told about it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservedGame<O> {
    engine: GameEngine,
    observer: O,
}

impl<O: GameObserver> ObservedGame<O> {
    pub fn new(observer: O) -> Self {
        Self {
            engine: GameEngine::new(),
            observer,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let player = self.engine.current_player();
        let result = self.engine.apply_move(index);
        match result {
            Ok(outcome) => self.observer.on_move(index, player, outcome),
            Err(error) => self.observer.on_rejected(index, error),
        }
        result
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.observer.on_reset();
    }

    pub fn into_parts(self) -> (GameEngine, O) {
        (self.engine, self.observer)
    }
}
