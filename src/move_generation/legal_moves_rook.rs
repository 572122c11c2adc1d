use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_ray_moves;
use crate::moves::move_descriptions::Move;

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub fn generate_rook_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(state, from, &ROOK_DIRECTIONS, out);
}
