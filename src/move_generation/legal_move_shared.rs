//! Shared helpers for piece-wise pseudo-legal generation.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Walk each `(row_step, col_step)` ray from `from` until the board edge,
/// an own piece (stop, excluded) or an enemy piece (stop, included as a
/// capture). Used by bishop, rook, and queen generation.
pub fn generate_ray_moves(
    state: &GameState,
    from: Square,
    directions: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    let mover = state.side_to_move;

    for &(row_step, col_step) in directions {
        for distance in 1..8 {
            let end_row = from.row as i32 + row_step * distance;
            let end_col = from.col as i32 + col_step * distance;
            if !(0..8).contains(&end_row) || !(0..8).contains(&end_col) {
                break;
            }

            let end = Square::new(end_row as usize, end_col as usize);
            match state.piece_at(end) {
                None => out.push(Move::new(from, end, &state.board)),
                Some(piece) if piece.color != mover => {
                    out.push(Move::new(from, end, &state.board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Single-step destinations from a fixed offset table (knight and king).
/// A destination is accepted unless an ally occupies it.
pub fn generate_offset_moves(
    state: &GameState,
    from: Square,
    offsets: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    let mover = state.side_to_move;

    for &(row_step, col_step) in offsets {
        let end_row = from.row as i32 + row_step;
        let end_col = from.col as i32 + col_step;
        if !(0..8).contains(&end_row) || !(0..8).contains(&end_col) {
            continue;
        }

        let end = Square::new(end_row as usize, end_col as usize);
        if state.piece_at(end).is_none_or(|piece| piece.color != mover) {
            out.push(Move::new(from, end, &state.board));
        }
    }
}
