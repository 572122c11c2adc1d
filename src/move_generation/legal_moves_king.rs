use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::moves::move_descriptions::Move;

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Ordinary one-square king steps. Castling is generated separately because
/// it depends on rights and square safety, not just occupancy.
pub fn generate_king_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_offset_moves(state, from, &KING_OFFSETS, out);
}
