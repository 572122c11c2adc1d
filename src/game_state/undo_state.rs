use crate::game_state::chess_types::{CastlingRights, Square};

/// Single undo record for `make_move` / `undo_move`.
///
/// Everything else a move changed is recoverable from the popped [`Move`]
/// record itself; only the rights and the en-passant target need a snapshot
/// because they are overwritten unconditionally on every move.
///
/// [`Move`]: crate::moves::move_descriptions::Move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
