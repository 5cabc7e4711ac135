//! Animation Source Tests
//!
//! Tests for:
//! - Quaternion ingestion order and normalization
//! - Source validation errors
//! - Serde round-trips of the source contract and settings

use glam::{Quat, Vec3};

use sinew::animation::source::{AnimationSource, NodeAnimSource, QuatKey, VectorKey};
use sinew::animation::target::TargetPath;
use sinew::SinewError;

// ============================================================================
// QuatKey
// ============================================================================

#[test]
fn quat_key_is_scalar_first() {
    let q = Quat::from_rotation_z(0.7);
    let key = QuatKey::from_quat(1.0, q);

    assert_eq!(key.value, [q.w, q.x, q.y, q.z]);
    assert!(key.to_quat().abs_diff_eq(q, 1e-6));
}

#[test]
fn quat_key_normalizes_on_ingest() {
    let key = QuatKey::new(0.0, [2.0, 0.0, 0.0, 0.0]);
    assert_eq!(key.to_quat(), Quat::IDENTITY);

    let zero = QuatKey::new(0.0, [0.0; 4]);
    assert_eq!(zero.to_quat(), Quat::IDENTITY);

    let nan = QuatKey::new(0.0, [f32::NAN, 0.0, 0.0, 0.0]);
    assert_eq!(nan.to_quat(), Quat::IDENTITY);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validate_accepts_increasing_times() {
    let node = NodeAnimSource::new("neck")
        .with_position_keys(vec![VectorKey::new(0.0, Vec3::ZERO), VectorKey::new(0.5, Vec3::X)])
        .with_rotation_keys(vec![QuatKey::from_quat(0.0, Quat::IDENTITY)]);
    assert!(node.validate().is_ok());
    assert!(NodeAnimSource::new("bare").validate().is_ok());
}

#[test]
fn validate_reports_track_and_index() {
    let node = NodeAnimSource::new("neck").with_scaling_keys(vec![
        VectorKey::new(0.0, Vec3::ONE),
        VectorKey::new(2.0, Vec3::ONE),
        VectorKey::new(1.0, Vec3::ONE),
    ]);

    assert_eq!(
        node.validate(),
        Err(SinewError::NonIncreasingKeyTimes {
            node: "neck".to_string(),
            track: TargetPath::Scale,
            index: 2,
            previous: 2.0,
            current: 1.0,
        })
    );
}

#[test]
fn validate_rejects_non_finite_times() {
    let node = NodeAnimSource::new("ear")
        .with_rotation_keys(vec![QuatKey::from_quat(f64::NAN, Quat::IDENTITY)]);

    let err = node.validate().unwrap_err();
    assert!(matches!(
        err,
        SinewError::NonFiniteKeyTime { track: TargetPath::Rotation, index: 0, .. }
    ));
    assert!(err.to_string().contains("'ear' rotation track"), "{err}");
}

#[test]
fn validate_rejects_bad_clip_timing() {
    for (duration, rate) in [(-1.0, 24.0), (10.0, f64::INFINITY), (f64::NAN, 30.0)] {
        let source = AnimationSource::new("bad", duration, rate);
        assert!(
            matches!(source.validate(), Err(SinewError::InvalidClipTiming { .. })),
            "duration {duration}, rate {rate}"
        );
    }
    assert!(AnimationSource::new("ok", 0.0, 0.0).validate().is_ok());
}

#[test]
fn validate_checks_every_channel() {
    let source = AnimationSource::new("run", 10.0, 30.0)
        .with_channel(NodeAnimSource::new("a"))
        .with_channel(
            NodeAnimSource::new("b")
                .with_position_keys(vec![VectorKey::new(1.0, Vec3::ZERO), VectorKey::new(1.0, Vec3::X)]),
        );

    let err = source.validate().unwrap_err();
    assert!(matches!(err, SinewError::NonIncreasingKeyTimes { ref node, .. } if node == "b"));
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_contract {
    use super::*;
    use sinew::animation::settings::{AnimationSettings, KeyValidation};

    #[test]
    fn source_deserializes_with_defaults() -> anyhow::Result<()> {
        let json = r#"{
            "name": "wave",
            "duration": 30.0,
            "ticks_per_second": 30.0,
            "channels": [
                {
                    "node_name": "hand.R",
                    "position_keys": [
                        { "time": 0.0, "value": [0.0, 0.0, 0.0] },
                        { "time": 15.0, "value": [0.0, 2.0, 0.0] }
                    ],
                    "rotation_keys": [
                        { "time": 0.0, "value": [1.0, 0.0, 0.0, 0.0] }
                    ],
                    "post_state": 1
                }
            ]
        }"#;

        let source: AnimationSource = serde_json::from_str(json)?;
        assert_eq!(source.channels.len(), 1);

        let hand = &source.channels[0];
        assert_eq!(hand.position_keys[1].value, Vec3::new(0.0, 2.0, 0.0));
        assert!(hand.scaling_keys.is_empty());
        assert_eq!(hand.pre_state, 0);
        assert_eq!(hand.post_state, 1);
        assert_eq!(hand.rotation_keys[0].to_quat(), Quat::IDENTITY);
        Ok(())
    }

    #[test]
    fn source_survives_json() -> anyhow::Result<()> {
        let source = AnimationSource::new("nod", 12.0, 24.0).with_channel(
            NodeAnimSource::new("head")
                .with_rotation_keys(vec![
                    QuatKey::from_quat(0.0, Quat::IDENTITY),
                    QuatKey::new(6.0, [0.5, 0.5, 0.5, 0.5]),
                ])
                .with_states(1, 0),
        );

        let json = serde_json::to_string(&source)?;
        let back: AnimationSource = serde_json::from_str(&json)?;
        assert_eq!(back, source);
        Ok(())
    }

    #[test]
    fn settings_deserialize_partially() -> anyhow::Result<()> {
        let settings: AnimationSettings = serde_json::from_str(r#"{ "key_validation": "Strict" }"#)?;
        assert_eq!(settings.key_validation, KeyValidation::Strict);
        assert_eq!(settings.fallback_ticks_per_second, 25.0);
        Ok(())
    }
}
