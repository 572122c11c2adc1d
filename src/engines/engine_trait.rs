//! Engine abstraction layer.
//!
//! A common interface so different move-choosing strategies can stand behind
//! the same driver (match harness, front ends). Engines receive the mutable
//! position because search explores it in place through make/undo pairs;
//! they must return it exactly as they found it.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for the side to move. `legal_moves` must be the current
    /// legal move list for `game_state`. Returns `None` only when that list
    /// is empty; callers are expected to consult the terminal flags first.
    fn choose_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> Option<Move>;
}
