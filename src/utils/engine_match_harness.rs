//! Minimal headless engine-vs-engine match driver.
//!
//! Runs two `Engine` implementations against each other through the same
//! operations a front end uses: fetch legal moves, apply the chosen move,
//! refresh the legal list and terminal flags, and append the move's notation
//! to the game's notation log.

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::notation::move_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    Draw,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PGN result token for this outcome.
    pub fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::Draw | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
}

/// Play a single match; `white` moves first.
pub fn play_engine_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: MatchConfig,
) -> MatchResult {
    let mut state = GameState::new_game();
    let mut legal_moves = state.legal_moves();

    for _ply in 0..config.max_plies {
        if state.checkmate {
            // The side to move has been mated.
            let outcome = match state.side_to_move {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            };
            return MatchResult {
                outcome,
                final_state: state,
            };
        }
        if state.stalemate {
            return MatchResult {
                outcome: MatchOutcome::Draw,
                final_state: state,
            };
        }

        let engine = match state.side_to_move {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let Some(chosen) = engine.choose_move(&mut state, &legal_moves) else {
            return MatchResult {
                outcome: MatchOutcome::Draw,
                final_state: state,
            };
        };

        state.make_move(chosen);
        let _ = state.legal_moves();
        let notated = move_notation(&mut state, &chosen);
        state.notation_log.push(notated);
        // Recompute once more so the draw heuristic sees the move just
        // notated, then reuse the list for the next ply.
        legal_moves = state.legal_moves();
    }

    MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
    }
}
