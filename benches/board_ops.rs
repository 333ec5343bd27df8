use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitboard_2048::core::{process_line, Board, Game};
use bitboard_2048::types::Direction;

fn mixed_board() -> Board {
    Board::from_exponents([
        [1, 1, 2, 0],
        [3, 0, 3, 4],
        [0, 2, 2, 2],
        [5, 6, 0, 6],
    ])
}

fn bench_process_line(c: &mut Criterion) {
    c.bench_function("process_line", |b| {
        b.iter(|| process_line(black_box([1, 1, 2, 2])))
    });
}

fn bench_shift(c: &mut Criterion) {
    let board = mixed_board();

    c.bench_function("shift_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut next = black_box(board);
                next.shift(dir);
                black_box(next);
            }
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let board = Board::from_exponents([
        [1, 2, 3, 4],
        [2, 3, 4, 5],
        [3, 4, 5, 6],
        [4, 5, 6, 7],
    ]);

    c.bench_function("is_game_over_full_board", |b| {
        b.iter(|| black_box(board).is_game_over())
    });
}

fn bench_move_with_spawn(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("move_and_spawn", |b| {
        b.iter(|| {
            game.set_board(mixed_board());
            game.move_tiles(black_box(Direction::Left), true)
        })
    });
}

criterion_group!(
    benches,
    bench_process_line,
    bench_shift,
    bench_game_over_check,
    bench_move_with_spawn
);
criterion_main!(benches);
