//! Headless self-play demo.
//!
//! Plays one engine-vs-engine game and prints the final board, the outcome,
//! and the game as PGN. Usage: `self_play [depth] [max_plies]`.

use std::env;

use damson_chess::engines::engine_negamax::BookNegamaxEngine;
use damson_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use damson_chess::utils::pgn::write_pgn;
use damson_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut args = env::args().skip(1);
    let depth: u8 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let max_plies: u16 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(200);

    let mut white = BookNegamaxEngine::new(depth);
    let mut black = BookNegamaxEngine::new(depth);

    let result = play_engine_match(&mut white, &mut black, MatchConfig { max_plies });

    println!("{}", render_game_state(&result.final_state));
    println!();
    println!(
        "outcome: {:?} after {} plies",
        result.outcome,
        result.final_state.notation_log.len()
    );
    println!();
    println!(
        "{}",
        write_pgn(
            &result.final_state.notation_log,
            result.outcome.result_token()
        )
    );
}
