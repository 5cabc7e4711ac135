use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::{Quat, Vec3};
use sinew::animation::{
    AnimationClip, AnimationSettings, AnimationSource, ChannelCursor, NodeAnimSource, QuatKey,
    VectorKey,
};

const BONES: usize = 64;
const KEYS: usize = 240;

/// A 64-bone clip with irregular key spacing and distinct per-track counts.
fn build_clip() -> AnimationClip {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut source = AnimationSource::new("bench", KEYS as f64, 30.0);

    for bone in 0..BONES {
        let jitter = |i: usize| (i as f64) + ((i * 7 + bone) % 5) as f64 * 0.1;

        source.channels.push(
            NodeAnimSource::new(format!("bone_{bone}"))
                .with_position_keys(
                    (0..KEYS)
                        .map(|i| VectorKey::new(jitter(i), Vec3::new(i as f32, bone as f32, 0.0)))
                        .collect(),
                )
                .with_rotation_keys(
                    (0..KEYS / 2)
                        .map(|i| {
                            QuatKey::from_quat(jitter(i * 2), Quat::from_rotation_y(i as f32 * 0.05))
                        })
                        .collect(),
                )
                .with_scaling_keys(
                    (0..KEYS / 8)
                        .map(|i| VectorKey::new(jitter(i * 8), Vec3::splat(1.0 + i as f32 * 0.01)))
                        .collect(),
                )
                .with_states(1, 1),
        );
    }

    AnimationClip::load(&source, &AnimationSettings::default()).expect("lenient load cannot fail")
}

// ============================================================================
// Full-pose sampling
// ============================================================================

fn bench_pose_binary_search(c: &mut Criterion) {
    let clip = build_clip();

    c.bench_function("pose_64_bones_binary_search", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            let t = clip.seconds_to_ticks(frame as f32 / 60.0) % clip.duration();
            frame = frame.wrapping_add(1);
            for channel in clip.channels() {
                black_box(channel.trs_matrix(black_box(t)));
            }
        });
    });
}

fn bench_pose_cursor(c: &mut Criterion) {
    let clip = build_clip();

    c.bench_function("pose_64_bones_cursor", |b| {
        let mut cursors = vec![ChannelCursor::default(); clip.channels().len()];
        let mut frame = 0u32;
        b.iter(|| {
            let t = clip.seconds_to_ticks(frame as f32 / 60.0) % clip.duration();
            frame = frame.wrapping_add(1);
            for (channel, cursor) in clip.channels().iter().zip(cursors.iter_mut()) {
                black_box(channel.trs_matrix_with_cursor(black_box(t), cursor));
            }
        });
    });
}

// ============================================================================
// Single-track sampling
// ============================================================================

fn bench_single_rotation(c: &mut Criterion) {
    let clip = build_clip();
    let channel = &clip.channels()[0];

    c.bench_function("rotation_slerp_1000_samples", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(channel.rotation(black_box(i as f32 * 0.24)));
            }
        });
    });
}

criterion_group!(benches, bench_pose_binary_search, bench_pose_cursor, bench_single_rotation);
criterion_main!(benches);
