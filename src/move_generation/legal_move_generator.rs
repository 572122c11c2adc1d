//! Full legal move generation pipeline.
//!
//! Aggregates piece-wise pseudo-legal generation, appends castle moves, then
//! filters out candidates that leave the mover's own king in check by
//! simulating each one with a make/undo pair. Terminal and draw flags are
//! refreshed as part of the same pass.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::chess_types::Square;
use crate::game_state::draw_rules::is_drawn_position;
use crate::game_state::game_state::GameState;
use crate::move_generation::castle_moves::generate_castle_moves;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Every move obeying piece movement rules for the side to move, ignoring
/// king safety. This is the hot path of the whole engine: the legality
/// filter, the attack query, and every search node run through it.
pub fn generate_pseudo_legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mover = state.side_to_move;

    for row in 0..8 {
        for col in 0..8 {
            let Some(piece) = state.board[row][col] else {
                continue;
            };
            if piece.color != mover {
                continue;
            }

            let from = Square::new(row, col);
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(state, from, &mut moves),
                PieceKind::Knight => generate_knight_moves(state, from, &mut moves),
                PieceKind::Bishop => generate_bishop_moves(state, from, &mut moves),
                PieceKind::Rook => generate_rook_moves(state, from, &mut moves),
                PieceKind::Queen => generate_queen_moves(state, from, &mut moves),
                PieceKind::King => generate_king_moves(state, from, &mut moves),
            }
        }
    }

    moves
}

/// Legal moves for the side to move, with the checkmate/stalemate flags
/// refreshed for the current position. The simulate/undo filter leaves the
/// state exactly as it found it for every candidate, kept or discarded.
pub fn generate_legal_moves(state: &mut GameState) -> Vec<Move> {
    let mut candidates = generate_pseudo_legal_moves(state);
    let mover = state.side_to_move;
    let king_square = state.king_square(mover);
    generate_castle_moves(state, king_square, &mut candidates);

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        state.make_move(mv);
        // Probe the mover's king, not the opponent now to move.
        state.side_to_move = mover;
        let leaves_king_attacked = is_king_in_check(state);
        state.side_to_move = mover.opposite();
        state.undo_move();

        if !leaves_king_attacked {
            legal.push(mv);
        }
    }

    if legal.is_empty() {
        if is_king_in_check(state) {
            state.checkmate = true;
        } else {
            state.stalemate = true;
        }
    } else {
        state.checkmate = false;
        state.stalemate = false;
    }

    // Draw detection may force a drawn status even with moves available.
    if is_drawn_position(&state.board, &state.notation_log) {
        state.stalemate = true;
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_pseudo_legal_moves};
    use crate::game_state::game_state::GameState;

    #[test]
    fn initial_position_has_twenty_legal_moves() {
        let mut state = GameState::new_game();
        assert_eq!(generate_pseudo_legal_moves(&state).len(), 20);
        assert_eq!(generate_legal_moves(&mut state).len(), 20);
        assert!(!state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        // The e-file knight is pinned by the rook on e8.
        let mut state = GameState::from_fen("4r1k1/8/8/8/8/4N3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let legal = generate_legal_moves(&mut state);
        assert!(
            legal.iter().all(|mv| mv.start != crate::game_state::chess_types::Square::new(5, 4)),
            "pinned knight must have no legal moves"
        );
    }

    #[test]
    fn filter_leaves_state_untouched() {
        let mut state = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let board_before = state.board;
        let side_before = state.side_to_move;
        let rights_before = state.castling_rights;
        let ep_before = state.en_passant_target;

        let _ = generate_legal_moves(&mut state);

        assert_eq!(state.board, board_before);
        assert_eq!(state.side_to_move, side_before);
        assert_eq!(state.castling_rights, rights_before);
        assert_eq!(state.en_passant_target, ep_before);
        assert!(state.move_log.is_empty());
    }

    #[test]
    fn back_rank_mate_sets_the_checkmate_flag() {
        use crate::game_state::chess_types::Square;

        let mut state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1")
            .expect("FEN should parse");
        let mv = state
            .legal_moves()
            .into_iter()
            .find(|m| m.end == Square::new(0, 4))
            .expect("Re8 should be available");
        state.make_move(mv);
        let replies = generate_legal_moves(&mut state);
        assert!(replies.is_empty());
        assert!(state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn escape_square_prevents_checkmate() {
        use crate::game_state::chess_types::Square;

        // Same pattern but g7 is open, so the king slips out.
        let mut state = GameState::from_fen("6k1/5p1p/8/8/8/8/8/4R1K1 w - - 0 1")
            .expect("FEN should parse");
        let mv = state
            .legal_moves()
            .into_iter()
            .find(|m| m.end == Square::new(0, 4))
            .expect("Re8 should be available");
        state.make_move(mv);
        let replies = generate_legal_moves(&mut state);
        assert!(!replies.is_empty());
        assert!(!state.checkmate);
    }

    #[test]
    fn stalemate_sets_only_the_stalemate_flag() {
        // Black king on a8, boxed by the queen on b6: no moves, no check.
        let mut state =
            GameState::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&mut state);
        assert!(legal.is_empty());
        assert!(state.stalemate);
        assert!(!state.checkmate);
    }

    #[test]
    fn drawn_material_forces_stalemate_status_despite_moves() {
        let mut state =
            GameState::from_fen("4k3/8/8/8/8/8/8/3NK3 w - - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&mut state);
        assert!(!legal.is_empty());
        assert!(state.stalemate);
    }
}
