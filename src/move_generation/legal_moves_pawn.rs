use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Pseudo-legal pawn moves from `from`: single push, double push from the
/// unmoved rank, diagonal captures onto enemy pieces, and the en-passant
/// capture when a diagonal lands on the current en-passant target.
pub fn generate_pawn_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    let mover = state.side_to_move;
    let (forward, home_row) = match mover {
        Color::White => (-1i32, 6usize),
        Color::Black => (1i32, 1usize),
    };

    let one_ahead = (from.row as i32 + forward) as usize;

    // Pushes. Generator output stays on the board: a pawn on the back rank
    // has already promoted, so `one_ahead` is always in range here.
    if state.board[one_ahead][from.col].is_none() {
        out.push(Move::new(from, Square::new(one_ahead, from.col), &state.board));

        if from.row == home_row {
            let two_ahead = (from.row as i32 + 2 * forward) as usize;
            if state.board[two_ahead][from.col].is_none() {
                out.push(Move::new(from, Square::new(two_ahead, from.col), &state.board));
            }
        }
    }

    // Diagonal captures, en passant included.
    for col_step in [-1i32, 1] {
        let end_col = from.col as i32 + col_step;
        if !(0..8).contains(&end_col) {
            continue;
        }

        let end = Square::new(one_ahead, end_col as usize);
        match state.piece_at(end) {
            Some(piece) if piece.color != mover => {
                out.push(Move::new(from, end, &state.board));
            }
            None if state.en_passant_target == Some(end) => {
                out.push(Move::with_en_passant(from, end, &state.board));
            }
            _ => {}
        }
    }
}
