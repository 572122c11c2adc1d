use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use damson_chess::game_state::game_state::GameState;
use damson_chess::search::board_scoring::StandardScorer;
use damson_chess::search::negamax::{alpha_beta_search, negamax_search, SearchConfig};

const MIDGAME_FEN: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    for depth in [1u8, 2, 3] {
        let config = SearchConfig { max_depth: depth };

        group.bench_with_input(
            BenchmarkId::new("alpha_beta", depth),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut state =
                        GameState::from_fen(MIDGAME_FEN).expect("benchmark FEN should parse");
                    let legal = state.legal_moves();
                    let result =
                        alpha_beta_search(&mut state, &legal, &StandardScorer, *config);
                    black_box(result.best_score)
                });
            },
        );
    }

    // Plain negamax at shallow depth as the pruning baseline.
    let config = SearchConfig { max_depth: 2 };
    group.bench_with_input(
        BenchmarkId::new("plain_negamax", 2u8),
        &config,
        |b, config| {
            b.iter(|| {
                let mut state =
                    GameState::from_fen(MIDGAME_FEN).expect("benchmark FEN should parse");
                let legal = state.legal_moves();
                let result = negamax_search(&mut state, &legal, &StandardScorer, *config);
                black_box(result.best_score)
            });
        },
    );

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
