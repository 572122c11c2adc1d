//! Fixed-depth negamax search, plain and alpha-beta pruned.
//!
//! The search walks one mutable `GameState` through strictly nested
//! make/undo pairs; there is exactly one current board at any instant,
//! shared with the rules engine. Both variants visit moves in generator
//! order and return identical values; pruning only reduces the node count.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, CHECKMATE_SCORE};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Outcome of one search invocation. `best_move` is the move recorded at the
/// root during the deepest matching recursion; ties keep the first candidate
/// in generator order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub nodes: u64,
}

#[inline]
const fn turn_multiplier(color: Color) -> f64 {
    match color {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}

/// Alpha-beta pruned negamax over the current legal moves.
pub fn alpha_beta_search<S: BoardScorer>(
    state: &mut GameState,
    legal_moves: &[Move],
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut result = SearchResult::default();
    result.best_score = negamax(
        state,
        legal_moves,
        scorer,
        config.max_depth,
        Some((-CHECKMATE_SCORE, CHECKMATE_SCORE)),
        turn_multiplier(state.side_to_move),
        config.max_depth,
        &mut result.best_move,
        &mut result.nodes,
    );
    result
}

/// Plain negamax without pruning; used to validate that pruning never
/// changes the chosen value.
pub fn negamax_search<S: BoardScorer>(
    state: &mut GameState,
    legal_moves: &[Move],
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut result = SearchResult::default();
    result.best_score = negamax(
        state,
        legal_moves,
        scorer,
        config.max_depth,
        None,
        turn_multiplier(state.side_to_move),
        config.max_depth,
        &mut result.best_move,
        &mut result.nodes,
    );
    result
}

/// Shared recursion. `bounds` carries the (alpha, beta) window when pruning
/// is enabled; the root move slot is written only at `depth == top_depth`.
#[allow(clippy::too_many_arguments)]
fn negamax<S: BoardScorer>(
    state: &mut GameState,
    moves: &[Move],
    scorer: &S,
    depth: u8,
    bounds: Option<(f64, f64)>,
    turn: f64,
    top_depth: u8,
    best_move: &mut Option<Move>,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;

    if depth == 0 {
        return turn * scorer.score(state, moves);
    }

    let (mut alpha, beta) = bounds.unwrap_or((-CHECKMATE_SCORE, CHECKMATE_SCORE));
    let mut max_score = -CHECKMATE_SCORE;

    for mv in moves {
        state.make_move(*mv);
        let replies = generate_legal_moves(state);
        let score = -negamax(
            state,
            &replies,
            scorer,
            depth - 1,
            bounds.map(|_| (-beta, -alpha)),
            -turn,
            top_depth,
            best_move,
            nodes,
        );
        state.undo_move();

        if score > max_score {
            max_score = score;
            if depth == top_depth {
                *best_move = Some(*mv);
            }
        }

        if bounds.is_some() {
            if max_score > alpha {
                alpha = max_score;
            }
            if alpha >= beta {
                break;
            }
        }
    }

    max_score
}
