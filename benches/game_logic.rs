use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{definition, rotate_mask, Board, Game, RenderSnapshot};
use blockfall::types::{Cell, Command, PieceKind, SessionSignal};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.handle_signal(SessionSignal::Start);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 14..18 {
                for x in 0..10 {
                    board.set(x, y, Cell::Piece(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_move_command(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.handle_signal(SessionSignal::Start);

    c.bench_function("move_command", |b| {
        b.iter(|| {
            game.handle_command(black_box(Command::MoveRight));
            game.handle_command(black_box(Command::MoveLeft));
        })
    });
}

fn bench_rotate_mask(c: &mut Criterion) {
    let mask = definition(PieceKind::T).mask;

    c.bench_function("rotate_mask", |b| {
        b.iter(|| rotate_mask(black_box(&mask), black_box(1)))
    });
}

fn bench_render_snapshot(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.handle_signal(SessionSignal::Start);
    let mut snap = RenderSnapshot::default();

    c.bench_function("render_snapshot", |b| {
        b.iter(|| {
            game.render_snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move_command,
    bench_rotate_mask,
    bench_render_snapshot
);
criterion_main!(benches);
