use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bomber::core::{Field, GameRules, Session, SimpleRng, World};
use tui_bomber::engine::headless::{MemoryScores, RecordingDisplay, ScriptedScheduler};
use tui_bomber::engine::{run_round, Settings};
use tui_bomber::term::{FrameBuffer, GameView, Hud, MessageLine};

fn bench_tick(c: &mut Criterion) {
    let fresh = Session::new(Field::new(160, 48), GameRules::default(), 12345);
    let mut session = fresh.clone();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_over() {
                session = fresh.clone();
            }
            black_box(session.tick());
        })
    });
}

fn bench_generate_world(c: &mut Criterion) {
    let field = Field::new(200, 60);
    c.bench_function("generate_world_200", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(black_box(7));
            World::generate(field, &mut rng)
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let session = Session::new(Field::new(160, 48), GameRules::default(), 12345);
    let message = MessageLine::default();
    let view = GameView::new();
    let mut fb = FrameBuffer::new(160, 48);

    c.bench_function("render_frame_160x48", |b| {
        b.iter(|| {
            let hud = Hud {
                player: "Bench",
                message: &message,
                scroll: black_box(3),
            };
            view.render_into(&session, &hud, &mut fb);
        })
    });
}

fn bench_headless_round(c: &mut Criterion) {
    let settings = Settings::default();
    c.bench_function("headless_round_80x24", |b| {
        b.iter(|| {
            let mut session = Session::new(Field::new(80, 24), settings.rules, black_box(9));
            run_round(
                "Bench",
                &settings,
                &mut session,
                &mut ScriptedScheduler::new([]),
                &mut RecordingDisplay::default(),
                &mut MemoryScores::default(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_generate_world,
    bench_render_frame,
    bench_headless_round
);
criterion_main!(benches);
