//! Castling move generation.
//!
//! A castle is emitted as a single two-square king move; `make_move` performs
//! the rook relocation as a side effect. Legality here means: the wing's
//! right is still held, the squares between king and rook are empty, and
//! neither the king's square nor either square it crosses is attacked.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::Move;

/// Append the available castle moves for the side to move, whose king stands
/// on `king_square`.
pub fn generate_castle_moves(state: &mut GameState, king_square: Square, out: &mut Vec<Move>) {
    let mover = state.side_to_move;
    let attacker = mover.opposite();

    // No castling out of check.
    if is_square_attacked(state, king_square, attacker) {
        return;
    }

    if state.castling_rights.kingside(mover) {
        generate_kingside_castle(state, king_square, out);
    }
    if state.castling_rights.queenside(mover) {
        generate_queenside_castle(state, king_square, out);
    }
}

fn generate_kingside_castle(state: &mut GameState, king_square: Square, out: &mut Vec<Move>) {
    let (row, col) = (king_square.row, king_square.col);
    if state.board[row][col + 1].is_some() || state.board[row][col + 2].is_some() {
        return;
    }

    let attacker = state.side_to_move.opposite();
    if is_square_attacked(state, Square::new(row, col + 1), attacker)
        || is_square_attacked(state, Square::new(row, col + 2), attacker)
    {
        return;
    }

    out.push(Move::with_castle(king_square, Square::new(row, col + 2), &state.board));
}

fn generate_queenside_castle(state: &mut GameState, king_square: Square, out: &mut Vec<Move>) {
    let (row, col) = (king_square.row, king_square.col);
    if state.board[row][col - 1].is_some()
        || state.board[row][col - 2].is_some()
        || state.board[row][col - 3].is_some()
    {
        return;
    }

    let attacker = state.side_to_move.opposite();
    if is_square_attacked(state, Square::new(row, col - 1), attacker)
        || is_square_attacked(state, Square::new(row, col - 2), attacker)
    {
        return;
    }

    out.push(Move::with_castle(king_square, Square::new(row, col - 2), &state.board));
}
