use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use memory_puzzle::core::{Board, BoardConfig, GameState, Layout, TileGeometry};
use memory_puzzle::term::{FrameBuffer, GameView, Viewport};
use memory_puzzle::types::{CellPos, TICK_MS};

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::default();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_board_10x7", |b| {
        b.iter(|| Board::generate(black_box(&config), &mut rng))
    });
}

fn bench_cell_at(c: &mut Criterion) {
    let layout = Layout::centered(&BoardConfig::default(), TileGeometry::default(), 80, 24);

    c.bench_function("cell_at_full_screen", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for y in 0..24 {
                for x in 0..80 {
                    if layout.cell_at(black_box(x), black_box(y)).is_some() {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

/// Select every pair in order, ticking until the game accepts input again.
fn solve_round(state: &mut GameState) {
    let positions: Vec<CellPos> = state.board().positions().collect();
    for &first in &positions {
        if state.revealed().is_revealed(first) {
            continue;
        }
        let Some(icon) = state.board().icon(first) else {
            continue;
        };
        let Some(second) = state.board().cells_with_icon(icon).find(|&p| p != first) else {
            continue;
        };
        for pos in [first, second] {
            state.select(pos);
            while state.sweep().is_some() {
                state.tick(TICK_MS);
            }
        }
    }
}

fn bench_solve_round(c: &mut Criterion) {
    c.bench_function("solve_round_10x7", |b| {
        b.iter(|| {
            let mut state = GameState::new(BoardConfig::default(), black_box(7));
            state.start();
            solve_round(&mut state);
            state.is_won()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(BoardConfig::default(), 7);
    state.start();
    let layout = Layout::centered(state.config(), TileGeometry::default(), 80, 22);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(
                &state,
                &layout,
                Some(CellPos::new(3, 2)),
                Viewport::new(80, 24),
                &mut fb,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_cell_at,
    bench_solve_round,
    bench_render
);
criterion_main!(benches);
