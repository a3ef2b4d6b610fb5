//! Minimax benchmarks from a few fixed positions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tictactoe_minimax::core::{Board, Mark};
use tictactoe_minimax::games::tictactoe::TicTacToe;
use tictactoe_minimax::search::{MinimaxSearch, SearchConfig};

fn bench_empty_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("empty_board");
    group.sample_size(10);

    let configs = [
        ("plain", SearchConfig::new()),
        ("cache", SearchConfig::new().with_transposition_table(true)),
        ("parallel", SearchConfig::new().with_parallel_root(true)),
        (
            "cache_parallel",
            SearchConfig::new()
                .with_transposition_table(true)
                .with_parallel_root(true),
        ),
    ];

    for (name, config) in configs {
        group.bench_function(name, |b| {
            let mut search = MinimaxSearch::new(TicTacToe, config.clone());
            b.iter(|| search.search(black_box(&Board::empty())))
        });
    }

    group.finish();
}

fn bench_midgame(c: &mut Criterion) {
    let board = Board::from_rows([
        [Mark::X, Mark::O, Mark::Empty],
        [Mark::Empty, Mark::X, Mark::Empty],
        [Mark::O, Mark::Empty, Mark::Empty],
    ]);

    c.bench_function("midgame_plain", |b| {
        let mut search = MinimaxSearch::new(TicTacToe, SearchConfig::new());
        b.iter(|| search.search(black_box(&board)))
    });
}

criterion_group!(benches, bench_empty_board, bench_midgame);
criterion_main!(benches);
