//! Short algebraic notation for moves.
//!
//! The produced form is `{pawn file or piece letter}{x on capture}{target}`
//! with castle moves rewritten to `0-0`/`0-0-0` and a trailing `#`/`+` for
//! checkmate/check. Formatting reads the position's terminal flags, which
//! must already be current for the position *after* the move.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{file_char, square_to_algebraic};

/// Notation for `mv`, which must already be applied to `state` with the
/// terminal flags refreshed for the resulting position.
pub fn move_notation(state: &mut GameState, mv: &Move) -> String {
    let takes = if mv.piece_captured.is_some() { "x" } else { "" };

    let piece = match mv.piece_moved.kind {
        PieceKind::Pawn => {
            if takes.is_empty() {
                String::new()
            } else {
                file_char(mv.start.col).to_string()
            }
        }
        kind => kind.letter().to_string(),
    };

    let mut text = format!("{piece}{takes}{}", square_to_algebraic(mv.end));

    // Non-capturing king moves landing on a post-castle king square read as
    // castle notation.
    if mv.piece_moved.kind == PieceKind::King
        && takes.is_empty()
        && (mv.end.row == 0 || mv.end.row == 7)
    {
        if mv.end.col == 6 {
            text = "0-0".to_owned();
        } else if mv.end.col == 2 {
            text = "0-0-0".to_owned();
        }
    }

    if is_king_in_check(state) {
        if state.checkmate {
            text.push('#');
        } else {
            text.push('+');
        }
    }

    text
}

/// Apply `mv`, refresh the terminal flags, format, and undo. Used wherever a
/// candidate move's notation is needed without committing it (opening-book
/// resolution, match logging).
pub fn notated_move(state: &mut GameState, mv: Move) -> String {
    state.make_move(mv);
    let _ = generate_legal_moves(state);
    let text = move_notation(state, &mv);
    state.undo_move();
    text
}
