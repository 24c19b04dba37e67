//! # Pose Store Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use robot_lib::state::{Pose2d, RobotState};

/// Number of observations in the history, 10 s at 100 Hz
const NUM_OBSERVATIONS: usize = 1000;

fn pose_store_benchmark(c: &mut Criterion) {
    // ---- Build a history of a robot driving in an arc ----

    let robot_state = RobotState::new();
    for i in 0..NUM_OBSERVATIONS {
        let t = i as f64 * 0.01;
        robot_state.observe_field_to_robot(t, Pose2d::new(t.cos(), t.sin(), t));
    }

    c.bench_function("RobotState::get_field_to_robot", |b| {
        b.iter(|| robot_state.get_field_to_robot(black_box(4.567)))
    });

    c.bench_function("RobotState::get_latest_field_to_robot", |b| {
        b.iter(|| robot_state.get_latest_field_to_robot())
    });

    let mut t = NUM_OBSERVATIONS as f64 * 0.01;
    c.bench_function("RobotState::observe_field_to_robot", |b| {
        b.iter(|| {
            t += 0.01;
            robot_state.observe_field_to_robot(black_box(t), Pose2d::new(t, 0.0, 0.0))
        })
    });
}

criterion_group!(benches, pose_store_benchmark);
criterion_main!(benches);
