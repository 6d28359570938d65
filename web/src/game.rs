use clap::{ArgAction, Args};
use neontac_core as game;
use neontac_core::{BOARD_CELLS, Cell, CellIndex, ObservedGame, line_contains};
use yew::prelude::*;

use crate::status::Announcer;

const RESTART_PROMPT: &str = "Are you sure you want to restart the game?";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(CellIndex),
    Restart,
}

fn cell_classes(cell: Cell, winning: bool, locked: bool) -> Classes {
    let mut class = classes!(
        "cell",
        match cell {
            Cell::Empty => None,
            Cell::Taken(game::Player::X) => Some("x"),
            Cell::Taken(game::Player::O) => Some("o"),
        }
    );
    if winning {
        class.push("winning-cell");
    }
    if locked {
        class.push("locked");
    }
    class
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    cell: Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = cell_classes(cell, winning, locked);
    let marker = cell.player().map(game::Player::symbol).unwrap_or_default();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <div {class} data-index={index.to_string()} {onclick}>{marker}</div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Restart without asking for confirmation
    #[arg(long = "no-confirm", action = ArgAction::SetFalse)]
    pub confirm_restart: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: ObservedGame<Announcer>,
    confirm_restart: bool,
}

impl GameView {
    fn play(&mut self, index: CellIndex) -> bool {
        self.game.apply_move(index).is_ok()
    }

    fn restart(&mut self) -> bool {
        if self.confirm_restart && !gloo::dialogs::confirm(RESTART_PROMPT) {
            log::debug!("restart cancelled");
            return false;
        }
        self.game.reset();
        true
    }

    fn is_winning_cell(&self, index: CellIndex) -> bool {
        self.game
            .engine()
            .winning_line()
            .is_some_and(|line| line_contains(line, index))
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: ObservedGame::new(Announcer::default()),
            confirm_restart: ctx.props().confirm_restart,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Play(index) => self.play(index),
            Msg::Restart => self.restart(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = self.game.engine();
        let is_playable = !engine.is_finished();
        let callback = ctx.link().callback(Msg::Play);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="neontac">
                <h1>{"Tic-Tac-Toe"}</h1>
                <p id="status">{self.game.observer().message()}</p>
                <div id="board" class={classes!("board", is_playable.then_some("playable"))}>
                    {
                        for (0..BOARD_CELLS as CellIndex).map(|index| {
                            let cell = engine.board()[index];
                            let winning = self.is_winning_cell(index);
                            let locked = !engine.can_play_at(index);
                            let callback = callback.clone();
                            html! {
                                <CellView {index} {cell} {winning} {locked} {callback}/>
                            }
                        })
                    }
                </div>
                <button id="restartButton" onclick={cb_restart}>{"Restart Game"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taken_cells_get_marker_class() {
        let class = cell_classes(Cell::Taken(game::Player::O), false, true);

        assert!(class.contains("cell"));
        assert!(class.contains("o"));
        assert!(class.contains("locked"));
        assert!(!class.contains("winning-cell"));
    }

    #[test]
    fn empty_cell_has_only_base_class() {
        let class = cell_classes(Cell::Empty, false, false);

        assert_eq!(class.to_string(), "cell");
    }

    #[test]
    fn winning_cells_follow_engine_line() {
        let mut view = GameView {
            game: ObservedGame::new(Announcer::default()),
            confirm_restart: false,
        };
        for index in [2, 0, 4, 1, 6] {
            assert!(view.play(index));
        }

        let winning: Vec<CellIndex> = (0..BOARD_CELLS as CellIndex)
            .filter(|&index| view.is_winning_cell(index))
            .collect();
        assert_eq!(winning, [2, 4, 6]);
        assert!(!view.play(8));
    }

    #[test]
    fn restart_without_confirmation_resets_board() {
        let mut view = GameView {
            game: ObservedGame::new(Announcer::default()),
            confirm_restart: false,
        };
        view.play(4);

        assert!(view.restart());
        assert_eq!(view.game.engine(), &game::GameEngine::new());
        assert_eq!(view.game.observer().message(), "Player X's turn");
    }
}
