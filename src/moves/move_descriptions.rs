//! Immutable move records.
//!
//! A `Move` captures a transition and its metadata as observed on the board
//! *before* any mutation, which is what lets `undo_move` invert a move from
//! the record alone.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};

/// One (pseudo-)legal move. Constructed only for in-bounds squares produced
/// by the move generator; construction performs no range checking.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// Contents of the destination square at construction time, overridden
    /// with the opposing pawn for en-passant captures.
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Self::build(start, end, board, false, false)
    }

    pub fn with_en_passant(start: Square, end: Square, board: &Board) -> Self {
        Self::build(start, end, board, true, false)
    }

    pub fn with_castle(start: Square, end: Square, board: &Board) -> Self {
        Self::build(start, end, board, false, true)
    }

    fn build(start: Square, end: Square, board: &Board, is_en_passant: bool, is_castle: bool) -> Self {
        let piece_moved =
            board[start.row][start.col].expect("move start square must hold a piece");

        let piece_captured = if is_en_passant {
            // The victim pawn sits on the start row in the destination file.
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board[end.row][end.col]
        };

        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.opposite().home_row();

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            is_castle,
        }
    }

    /// Coordinate-derived identity: two moves are the same move exactly when
    /// their start and end squares agree. Captured-piece metadata and the
    /// promotion choice (always a queen) are deliberately excluded.
    #[inline]
    pub fn move_id(&self) -> u32 {
        (self.start.row * 1000 + self.start.col * 100 + self.end.row * 10 + self.end.col) as u32
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn equality_ignores_captured_piece_metadata() {
        let empty_target = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let occupied_target = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");

        let quiet = Move::new(Square::new(6, 4), Square::new(5, 4), &empty_target.board);
        let capture = Move::new(Square::new(6, 4), Square::new(5, 4), &occupied_target.board);
        assert_eq!(quiet, capture);
        assert_ne!(quiet.piece_captured, capture.piece_captured);
    }

    #[test]
    fn en_passant_records_the_opposing_pawn_as_captured() {
        let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse");
        let mv = Move::with_en_passant(Square::new(3, 4), Square::new(2, 3), &state.board);
        assert_eq!(
            mv.piece_captured.map(|p| (p.color, p.kind)),
            Some((Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn pawn_reaching_the_back_rank_is_a_promotion() {
        let state =
            GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN should parse");
        let mv = Move::new(Square::new(1, 4), Square::new(0, 4), &state.board);
        assert!(mv.is_promotion);

        let not_yet = GameState::from_fen("8/8/4P3/8/8/8/k7/4K3 w - - 0 1")
            .expect("FEN should parse");
        let push = Move::new(Square::new(2, 4), Square::new(1, 4), &not_yet.board);
        assert!(!push.is_promotion);
    }
}
