//! Attack queries and check detection.
//!
//! The single authority for "is this square attacked": flip the side to move,
//! generate that side's pseudo-legal moves, and look for one ending on the
//! square. The legality filter, castle safety checks, and notation check
//! marks all route through here so the answer can never diverge.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;

/// Whether `by` attacks `square`. Castling moves are never generated here;
/// a castle does not attack any square for this purpose.
pub fn is_square_attacked(state: &mut GameState, square: Square, by: Color) -> bool {
    let original_side = state.side_to_move;
    state.side_to_move = by;
    let opponent_moves = generate_pseudo_legal_moves(state);
    state.side_to_move = original_side;

    opponent_moves.iter().any(|mv| mv.end == square)
}

/// Whether the side to move's king square is attacked by the opponent.
pub fn is_king_in_check(state: &mut GameState) -> bool {
    let mover = state.side_to_move;
    let king = state.king_square(mover);
    is_square_attacked(state, king, mover.opposite())
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_attacks_along_its_open_file() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_square_attacked(&mut state, Square::new(0, 0), Color::White));
        assert!(!is_square_attacked(&mut state, Square::new(0, 1), Color::White));
    }

    #[test]
    fn pawn_attacks_only_occupied_diagonals() {
        // The generate-and-flip query sees pawn captures, which exist only
        // when an enemy piece stands on the diagonal.
        let mut state = GameState::from_fen("4k3/8/8/8/3n4/4P3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_square_attacked(&mut state, Square::new(4, 3), Color::White));
        assert!(!is_square_attacked(&mut state, Square::new(4, 5), Color::White));
    }

    #[test]
    fn side_to_move_is_restored_by_the_query() {
        let mut state = GameState::new_game();
        let before = state.side_to_move;
        is_square_attacked(&mut state, Square::new(3, 3), Color::Black);
        assert_eq!(state.side_to_move, before);
    }

    #[test]
    fn back_rank_queen_gives_check() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/q3K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&mut state));

        let mut quiet = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(!is_king_in_check(&mut quiet));
    }
}
