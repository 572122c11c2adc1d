//! Book-then-search engine.
//!
//! One instance is a self-contained search session for a game: it owns the
//! opening book and its enabled flag, the search configuration, and the
//! scorer. Per ply the book is consulted first; once no line matches the
//! played history (or a matched token resolves to no legal move) the book is
//! disabled for the rest of the game and every later ply goes straight to
//! the alpha-beta search, with a uniform random move as the final fallback.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::StandardScorer;
use crate::search::negamax::{alpha_beta_search, SearchConfig};
use crate::tables::opening_book::OpeningBook;
use crate::utils::notation::notated_move;

pub struct BookNegamaxEngine {
    config: SearchConfig,
    scorer: StandardScorer,
    opening_book: OpeningBook,
    book_enabled: bool,
}

impl BookNegamaxEngine {
    /// Engine with the default book and the given fixed search depth.
    pub fn new(max_depth: u8) -> Self {
        Self::with_book(max_depth, OpeningBook::load_default())
    }

    pub fn with_book(max_depth: u8, opening_book: OpeningBook) -> Self {
        let book_enabled = !opening_book.is_empty();
        Self {
            config: SearchConfig { max_depth },
            scorer: StandardScorer,
            opening_book,
            book_enabled,
        }
    }

    /// Engine that never consults a book; a missing or unreadable book file
    /// degrades to this silently.
    pub fn without_book(max_depth: u8) -> Self {
        Self::with_book(max_depth, OpeningBook::default())
    }

    pub fn book_enabled(&self) -> bool {
        self.book_enabled
    }

    /// Resolve the book's next token against the current legal moves by
    /// notation equality. Any miss permanently leaves the book.
    fn book_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = rand::rng();
        let Some(token) = self
            .opening_book
            .continuation(&game_state.notation_log, &mut rng)
        else {
            self.book_enabled = false;
            return None;
        };

        for mv in legal_moves {
            if notated_move(game_state, *mv) == token {
                return Some(*mv);
            }
        }

        self.book_enabled = false;
        None
    }
}

impl Engine for BookNegamaxEngine {
    fn name(&self) -> &str {
        "Damson Negamax"
    }

    fn choose_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> Option<Move> {
        if self.book_enabled {
            if let Some(book_move) = self.book_move(game_state, legal_moves) {
                return Some(book_move);
            }
        }

        let result = alpha_beta_search(game_state, legal_moves, &self.scorer, self.config);
        result.best_move.or_else(|| {
            let mut rng = rand::rng();
            legal_moves.choose(&mut rng).copied()
        })
    }
}
