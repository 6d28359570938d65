#![cfg(target_arch = "wasm32")]

use neontac_core::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn engine_plays_a_game_under_wasm() {
    let mut engine = GameEngine::new();
    for index in [4, 0, 8, 2, 1, 7, 6, 3] {
        engine.apply_move(index).unwrap();
    }

    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.apply_move(5), Ok(MoveOutcome::Draw));
}
