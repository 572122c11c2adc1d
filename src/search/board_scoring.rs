//! Pluggable board evaluation interfaces and implementations.
//!
//! Search remains modular by delegating static position scoring to this
//! trait, allowing alternate heuristics to be swapped without altering search
//! code. Scores are always from White's perspective; the search applies the
//! turn multiplier.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Sentinel value for a decided game; also the search window bound.
pub const CHECKMATE_SCORE: f64 = 1000.0;
pub const STALEMATE_SCORE: f64 = 0.0;

const MATERIAL_WEIGHT: f64 = 1.5;
const MOBILITY_WEIGHT: f64 = 0.25;
const UNDEVELOPED_MINOR_PENALTY: f64 = 0.1;
const INNER_CENTER_WEIGHT: f64 = 0.1;
const OUTER_CENTER_WEIGHT: f64 = 0.05;
const LOST_CASTLING_PENALTY: f64 = 0.3;
const CASTLED_BONUS: f64 = 0.5;

pub trait BoardScorer {
    /// Score from White's perspective. `legal_moves` must be the current
    /// legal move list for `game_state`, whose terminal flags must already
    /// be refreshed.
    fn score(&self, game_state: &GameState, legal_moves: &[Move]) -> f64;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// A decided position bypasses every heuristic term: the mated side is the
/// side to move, draws are dead level.
fn terminal_score(game_state: &GameState) -> Option<f64> {
    if game_state.checkmate {
        return Some(match game_state.side_to_move {
            Color::White => -CHECKMATE_SCORE,
            Color::Black => CHECKMATE_SCORE,
        });
    }
    if game_state.stalemate {
        return Some(STALEMATE_SCORE);
    }
    None
}

/// Material-only baseline scorer used for comparisons and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, _legal_moves: &[Move]) -> f64 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        let mut score = 0.0;
        for row in &game_state.board {
            for square in row {
                if let Some(piece) = square {
                    match piece.color {
                        Color::White => score += piece_value(piece.kind),
                        Color::Black => score -= piece_value(piece.kind),
                    }
                }
            }
        }
        score
    }
}

/// The production evaluator: weighted material plus mobility, development,
/// central occupancy, and castling terms for the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    /// Mobility per piece, docked for each knight still at home. The check
    /// deliberately matches knights only, not bishops.
    fn activity_term(game_state: &GameState, legal_moves: &[Move], own_pieces: u32) -> f64 {
        let mover = game_state.side_to_move;
        let mut activity = (legal_moves.len() as f64 / own_pieces as f64) * MOBILITY_WEIGHT;

        let home_row = mover.home_row();
        for col in 0..8 {
            if game_state.board[home_row][col] == Some(Piece::new(mover, PieceKind::Knight)) {
                activity -= UNDEVELOPED_MINOR_PENALTY;
            }
        }

        activity
    }

    /// Occupancy bonus over the central 4x4 block, the inner 2x2 weighted
    /// higher. Counts the mover's knights only, like the development term.
    fn center_term(game_state: &GameState) -> f64 {
        let mover = game_state.side_to_move;
        let mut bonus = 0.0;

        for i in 0..4 {
            for j in 0..4 {
                let weight = if (1..=2).contains(&i) && (1..=2).contains(&j) {
                    INNER_CENTER_WEIGHT
                } else {
                    OUTER_CENTER_WEIGHT
                };
                if game_state.board[2 + i][2 + j] == Some(Piece::new(mover, PieceKind::Knight)) {
                    bonus += weight;
                }
            }
        }

        bonus
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &GameState, legal_moves: &[Move]) -> f64 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        let mut score = 0.0;
        let mut white_pieces = 0u32;
        let mut black_pieces = 0u32;

        for row in &game_state.board {
            for square in row {
                if let Some(piece) = square {
                    match piece.color {
                        Color::White => {
                            score += piece_value(piece.kind) * MATERIAL_WEIGHT;
                            white_pieces += 1;
                        }
                        Color::Black => {
                            score -= piece_value(piece.kind) * MATERIAL_WEIGHT;
                            black_pieces += 1;
                        }
                    }
                }
            }
        }

        let mover = game_state.side_to_move;
        let own_pieces = match mover {
            Color::White => white_pieces,
            Color::Black => black_pieces,
        };
        let positional = Self::activity_term(game_state, legal_moves, own_pieces)
            + Self::center_term(game_state);

        if game_state.castling_rights.both_lost(Color::White) {
            score -= LOST_CASTLING_PENALTY;
        }
        if game_state.castling_rights.both_lost(Color::Black) {
            score += LOST_CASTLING_PENALTY;
        }

        if game_state.has_castled {
            match mover {
                Color::White => score += CASTLED_BONUS,
                Color::Black => score -= CASTLED_BONUS,
            }
        }

        match mover {
            Color::White => score + positional,
            Color::Black => score - positional,
        }
    }
}
