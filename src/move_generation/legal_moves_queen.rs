use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Queen movement is the union of the bishop and rook ray sets.
pub fn generate_queen_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_bishop_moves(state, from, out);
    generate_rook_moves(state, from, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;

    #[test]
    fn open_board_queen_is_bishop_plus_rook() {
        let state =
            GameState::from_fen("4k3/8/8/3Q4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_queen_moves(&state, Square::new(3, 3), &mut moves);
        assert_eq!(moves.len(), 27);
    }
}
