use glam::{Mat4, Quat, Vec3};

use crate::policy::{BoundaryPolicy, Extrapolation};
use crate::source::NodeAnimSource;
use crate::target::TargetPath;
use crate::tracks::{KeyframeCursor, KeyframeTrack};
use crate::values::normalize_or_identity;

/// Translation, rotation and scale of one node at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// `Translate * Rotate * Scale`.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One [`KeyframeCursor`] per track, for sequential playback of a channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelCursor {
    pub translation: KeyframeCursor,
    pub rotation: KeyframeCursor,
    pub scale: KeyframeCursor,
}

/// The complete keyframe history of one animated node.
///
/// Immutable after construction; share it behind an `Arc` and sample from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct AnimationChannel {
    node_name: String,
    translations: KeyframeTrack<Vec3>,
    rotations: KeyframeTrack<Quat>,
    scalings: KeyframeTrack<Vec3>,
    extrapolation: Extrapolation,
}

impl AnimationChannel {
    /// Builds a channel from in-memory keys. Rotations are normalized.
    #[must_use]
    pub fn new(
        node_name: impl Into<String>,
        translations: Vec<(f32, Vec3)>,
        rotations: Vec<(f32, Quat)>,
        scalings: Vec<(f32, Vec3)>,
        extrapolation: Extrapolation,
    ) -> Self {
        let channel = Self {
            node_name: node_name.into(),
            translations: KeyframeTrack::from_keys(translations, Vec3::ZERO),
            rotations: KeyframeTrack::from_keys(
                rotations.into_iter().map(|(t, q)| (t, normalize_or_identity(q))),
                Quat::IDENTITY,
            ),
            scalings: KeyframeTrack::from_keys(scalings, Vec3::ONE),
            extrapolation,
        };
        channel.report_load_issues();
        channel
    }

    /// Copies every key of `source`, in source order, and caches the
    /// reciprocal segment durations.
    #[must_use]
    pub fn from_source(source: &NodeAnimSource) -> Self {
        log::debug!(
            "Loading animation channel for node '{}': {} translation keys, {} rotation keys, {} scaling keys (pre-state {}, post-state {})",
            source.node_name,
            source.position_keys.len(),
            source.rotation_keys.len(),
            source.scaling_keys.len(),
            source.pre_state,
            source.post_state,
        );

        let channel = Self {
            node_name: source.node_name.clone(),
            translations: KeyframeTrack::from_keys(
                source.position_keys.iter().map(|k| (k.time as f32, k.value)),
                Vec3::ZERO,
            ),
            rotations: KeyframeTrack::from_keys(
                source.rotation_keys.iter().map(|k| (k.time as f32, k.to_quat())),
                Quat::IDENTITY,
            ),
            scalings: KeyframeTrack::from_keys(
                source.scaling_keys.iter().map(|k| (k.time as f32, k.value)),
                Vec3::ONE,
            ),
            extrapolation: Extrapolation::from_codes(source.pre_state, source.post_state),
        };
        channel.report_load_issues();
        channel
    }

    fn report_load_issues(&self) {
        for (label, policy) in [
            ("pre-range", self.extrapolation.pre),
            ("post-range", self.extrapolation.post),
        ] {
            if let BoundaryPolicy::Unrecognized(code) = policy {
                log::warn!(
                    "Channel '{}': {label} policy {code} not implemented, sampling extrapolates along the edge segment",
                    self.node_name
                );
            }
        }

        for (target, degenerate) in [
            (TargetPath::Translation, self.translations.degenerate_segment_count()),
            (TargetPath::Rotation, self.rotations.degenerate_segment_count()),
            (TargetPath::Scale, self.scalings.degenerate_segment_count()),
        ] {
            if degenerate > 0 {
                log::warn!(
                    "Channel '{}': {target} track has {degenerate} zero-length segment(s), they sample to their start key",
                    self.node_name
                );
            }
        }
    }

    #[must_use]
    pub fn target_node_name(&self) -> &str {
        &self.node_name
    }

    #[must_use]
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    #[must_use]
    pub fn translations(&self) -> &KeyframeTrack<Vec3> {
        &self.translations
    }

    #[must_use]
    pub fn rotations(&self) -> &KeyframeTrack<Quat> {
        &self.rotations
    }

    #[must_use]
    pub fn scalings(&self) -> &KeyframeTrack<Vec3> {
        &self.scalings
    }

    /// Latest key time across the three tracks. Empty tracks are skipped;
    /// a channel without any key reports `0.0`.
    #[must_use]
    pub fn max_time(&self) -> f32 {
        [
            self.translations.last_time(),
            self.rotations.last_time(),
            self.scalings.last_time(),
        ]
        .into_iter()
        .flatten()
        .reduce(f32::max)
        .unwrap_or(0.0)
    }

    #[must_use]
    pub fn translation(&self, time: f32) -> Vec3 {
        self.translations.sample(time, self.extrapolation)
    }

    #[must_use]
    pub fn scaling(&self, time: f32) -> Vec3 {
        self.scalings.sample(time, self.extrapolation)
    }

    /// Always unit length.
    #[must_use]
    pub fn rotation(&self, time: f32) -> Quat {
        self.rotations.sample(time, self.extrapolation)
    }

    #[must_use]
    pub fn sample(&self, time: f32) -> LocalTransform {
        LocalTransform {
            translation: self.translation(time),
            rotation: self.rotation(time),
            scale: self.scaling(time),
        }
    }

    /// Local `Translate * Rotate * Scale` matrix in the source's
    /// (parent-relative) space.
    #[must_use]
    pub fn trs_matrix(&self, time: f32) -> Mat4 {
        self.sample(time).to_matrix()
    }

    /// Cursor-accelerated [`sample`](Self::sample); the result is identical.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut ChannelCursor) -> LocalTransform {
        LocalTransform {
            translation: self.translations.sample_with_cursor(
                time,
                self.extrapolation,
                &mut cursor.translation,
            ),
            rotation: self.rotations.sample_with_cursor(
                time,
                self.extrapolation,
                &mut cursor.rotation,
            ),
            scale: self.scalings.sample_with_cursor(time, self.extrapolation, &mut cursor.scale),
        }
    }

    pub fn trs_matrix_with_cursor(&self, time: f32, cursor: &mut ChannelCursor) -> Mat4 {
        self.sample_with_cursor(time, cursor).to_matrix()
    }
}
