use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::moves::move_descriptions::Move;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub fn generate_knight_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_offset_moves(state, from, &KNIGHT_OFFSETS, out);
}
