//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and as the last-resort fallback strategy.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Damson Random"
    }

    fn choose_move(&mut self, _game_state: &mut GameState, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = rand::rng();
        legal_moves.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;

    #[test]
    fn chooses_some_legal_move() {
        let mut state = GameState::new_game();
        let legal = state.legal_moves();
        let mv = RandomEngine
            .choose_move(&mut state, &legal)
            .expect("twenty moves to choose from");
        assert!(legal.contains(&mv));
    }

    #[test]
    fn empty_move_list_yields_none() {
        let mut state = GameState::new_game();
        assert!(RandomEngine.choose_move(&mut state, &[]).is_none());
    }
}
