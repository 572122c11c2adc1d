//! Core mutable position state.
//!
//! `GameState` is the central model for the engine. It owns the board, the
//! side to move, cached king locations, castling rights, the en-passant
//! target, move/notation history, terminal flags, and the undo stack used by
//! make/undo style workflows in the legality filter and the search.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Full position state for one game, mutated in place by `make_move` and
/// restored exactly by `undo_move`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub white_king_square: Square,
    pub black_king_square: Square,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,

    // Terminal flags, refreshed whenever legal moves are recomputed.
    pub checkmate: bool,
    pub stalemate: bool,

    /// Set the first time either side castles; cleared when a castle is
    /// undone. Read by the evaluator only.
    pub has_castled: bool,

    // --- History ---
    pub move_log: Vec<Move>,
    /// Human-readable move strings, appended by the play layer after each
    /// committed move. Consulted by the opening book and the repeated-move
    /// draw heuristic; never touched by `make_move`/`undo_move`.
    pub notation_log: Vec<String>,
    pub undo_stack: Vec<UndoState>,
}

impl GameState {
    /// Standard starting position with full castling rights.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row][square.col]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    /// Current legal moves for the side to move. Also refreshes the
    /// checkmate/stalemate flags as a side effect.
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Whether the side to move's king is currently attacked.
    #[inline]
    pub fn in_check(&mut self) -> bool {
        is_king_in_check(self)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Apply `mv` unconditionally. Legality must already have been
    /// established through the legal move filter; no validation happens here.
    pub fn make_move(&mut self, mv: Move) {
        self.undo_stack.push(UndoState {
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.board[mv.start.row][mv.start.col] = None;
        self.board[mv.end.row][mv.end.col] = Some(mv.piece_moved);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            match mv.piece_moved.color {
                Color::White => self.white_king_square = mv.end,
                Color::Black => self.black_king_square = mv.end,
            }
        }

        if mv.is_promotion {
            self.board[mv.end.row][mv.end.col] =
                Some(Piece::new(mv.piece_moved.color, PieceKind::Queen));
        }

        if mv.is_en_passant {
            // The captured pawn sits beside the start square, not on the
            // destination.
            self.board[mv.start.row][mv.end.col] = None;
        }

        if mv.piece_moved.kind == PieceKind::Pawn && mv.start.row.abs_diff(mv.end.row) == 2 {
            self.en_passant_target =
                Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col));
        } else {
            self.en_passant_target = None;
        }

        if mv.is_castle {
            self.has_castled = true;
            if mv.end.col > mv.start.col {
                // Kingside: rook hops from the corner to the king's other side.
                self.board[mv.end.row][mv.end.col - 1] = self.board[mv.end.row][mv.end.col + 1];
                self.board[mv.end.row][mv.end.col + 1] = None;
            } else {
                self.board[mv.end.row][mv.end.col + 1] = self.board[mv.end.row][mv.end.col - 2];
                self.board[mv.end.row][mv.end.col - 2] = None;
            }
        }

        self.update_castle_rights(&mv);
    }

    /// Exact inverse of the most recent `make_move`; a no-op when the move
    /// log is empty.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let undo = self
            .undo_stack
            .pop()
            .expect("undo stack stays in lockstep with the move log");

        self.board[mv.start.row][mv.start.col] = Some(mv.piece_moved);
        self.board[mv.end.row][mv.end.col] = mv.piece_captured;
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            match mv.piece_moved.color {
                Color::White => self.white_king_square = mv.start,
                Color::Black => self.black_king_square = mv.start,
            }
        }

        if mv.is_en_passant {
            // The destination square was empty before the capture; the taken
            // pawn goes back beside the start square.
            self.board[mv.end.row][mv.end.col] = None;
            self.board[mv.start.row][mv.end.col] = mv.piece_captured;
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;

        if mv.is_castle {
            self.has_castled = false;
            if mv.end.col > mv.start.col {
                self.board[mv.end.row][mv.end.col + 1] = self.board[mv.end.row][mv.end.col - 1];
                self.board[mv.end.row][mv.end.col - 1] = None;
            } else {
                self.board[mv.end.row][mv.end.col - 2] = self.board[mv.end.row][mv.end.col + 1];
                self.board[mv.end.row][mv.end.col + 1] = None;
            }
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    /// Strip castling rights invalidated by `mv`: any king move loses both
    /// wings, a rook move from its corner loses that wing.
    fn update_castle_rights(&mut self, mv: &Move) {
        match (mv.piece_moved.color, mv.piece_moved.kind) {
            (Color::White, PieceKind::King) => {
                self.castling_rights.white_kingside = false;
                self.castling_rights.white_queenside = false;
            }
            (Color::Black, PieceKind::King) => {
                self.castling_rights.black_kingside = false;
                self.castling_rights.black_queenside = false;
            }
            (Color::White, PieceKind::Rook) if mv.start.row == 7 => {
                if mv.start.col == 0 {
                    self.castling_rights.white_queenside = false;
                } else if mv.start.col == 7 {
                    self.castling_rights.white_kingside = false;
                }
            }
            (Color::Black, PieceKind::Rook) if mv.start.row == 0 => {
                if mv.start.col == 0 {
                    self.castling_rights.black_queenside = false;
                } else if mv.start.col == 7 {
                    self.castling_rights.black_kingside = false;
                }
            }
            _ => {}
        }
    }
}
