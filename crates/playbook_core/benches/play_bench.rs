use criterion::{black_box, criterion_group, criterion_main, Criterion};

use playbook_core::engine::kinematics::{steer, BrakingMode};
use playbook_core::engine::physics_constants::{field, motion};
use playbook_core::engine::route::{Route, Waypoint, WaypointAction};
use playbook_core::engine::timestep::TICK_DT;
use playbook_core::engine::types::Vec2;
use playbook_core::engine::{LivePlay, PlayConfig, Strategy};

fn bench_steer(c: &mut Criterion) {
    let vel = Vec2::new(12.0, -4.0);
    let pos = Vec2::new(120.0, 540.0);
    let target = Vec2::new(300.0, 200.0);

    c.bench_function("steer_single_step", |b| {
        b.iter(|| {
            steer(
                black_box(vel),
                black_box(pos),
                black_box(target),
                BrakingMode::Enabled { radius_factor: 1.0 },
                motion::TOP_SPEED,
                TICK_DT,
            )
        })
    });
}

fn bench_full_play(c: &mut Criterion) {
    c.bench_function("full_play_to_resolution", |b| {
        b.iter(|| {
            let mut play = LivePlay::new(PlayConfig::default());
            for (i, x) in [150.0, 250.0, 350.0].iter().enumerate() {
                play.assign_route(
                    i,
                    Route::new([
                        Waypoint {
                            pos: Vec2::new(*x, field::HEIGHT_PX - 5.0),
                            action: WaypointAction::SprintThrough,
                        },
                        Waypoint { pos: Vec2::new(*x, 520.0), action: WaypointAction::StopHere },
                    ]),
                );
            }
            for i in 0..field::NUM_DEFENDERS {
                let spawn = Vec2::new(100.0 + 75.0 * i as f32, 420.0);
                play.assign_strategy(i, Strategy::Zone { centroid: spawn }, spawn);
            }

            for _ in 0..100 {
                play.tick(TICK_DT);
            }
            play.throw_ball(Vec2::new(250.0, 520.0), 1.0);
            loop {
                if play.tick(TICK_DT).is_some() {
                    break;
                }
            }
            black_box(play.outcome())
        })
    });
}

criterion_group!(benches, bench_steer, bench_full_play);
criterion_main!(benches);
