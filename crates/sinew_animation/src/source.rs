//! Animation Source Contract
//!
//! Plain data handed to the core by whatever extracted the keyframes from a
//! scene file. One [`AnimationSource`] describes one clip; each
//! [`NodeAnimSource`] holds the raw keys of one animated node.
//!
//! Key counts are the vector lengths. Times are in ticks, as `f64`, and are
//! narrowed to `f32` when a channel is built. Rotations arrive as
//! `(w, x, y, z)` arrays.

use glam::{Quat, Vec3};

use crate::errors::{Result, SinewError};
use crate::target::TargetPath;
use crate::values::normalize_or_identity;

/// A translation or scale key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorKey {
    pub time: f64,
    pub value: Vec3,
}

impl VectorKey {
    #[must_use]
    pub const fn new(time: f64, value: Vec3) -> Self {
        Self { time, value }
    }
}

/// A rotation key. `value` is ordered `(w, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuatKey {
    pub time: f64,
    pub value: [f32; 4],
}

impl QuatKey {
    #[must_use]
    pub const fn new(time: f64, value: [f32; 4]) -> Self {
        Self { time, value }
    }

    /// Builds a key from a `glam` quaternion, storing it scalar-first.
    #[must_use]
    pub fn from_quat(time: f64, q: Quat) -> Self {
        Self::new(time, [q.w, q.x, q.y, q.z])
    }

    /// The key's rotation as a unit quaternion. A zero-length value becomes
    /// the identity.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        let [w, x, y, z] = self.value;
        normalize_or_identity(Quat::from_xyzw(x, y, z, w))
    }
}

/// Raw keyframes of one animated node.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeAnimSource {
    pub node_name: String,
    pub position_keys: Vec<VectorKey>,
    pub rotation_keys: Vec<QuatKey>,
    pub scaling_keys: Vec<VectorKey>,
    /// Pre-range policy code, see [`BoundaryPolicy`](crate::BoundaryPolicy).
    pub pre_state: u32,
    /// Post-range policy code.
    pub post_state: u32,
}

impl NodeAnimSource {
    #[must_use]
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_position_keys(mut self, keys: Vec<VectorKey>) -> Self {
        self.position_keys = keys;
        self
    }

    #[must_use]
    pub fn with_rotation_keys(mut self, keys: Vec<QuatKey>) -> Self {
        self.rotation_keys = keys;
        self
    }

    #[must_use]
    pub fn with_scaling_keys(mut self, keys: Vec<VectorKey>) -> Self {
        self.scaling_keys = keys;
        self
    }

    #[must_use]
    pub fn with_states(mut self, pre_state: u32, post_state: u32) -> Self {
        self.pre_state = pre_state;
        self.post_state = post_state;
        self
    }

    /// Checks that every track's key times are finite and strictly increasing
    /// once narrowed to the `f32` precision channels store them at.
    pub fn validate(&self) -> Result<()> {
        self.validate_times(TargetPath::Translation, self.position_keys.iter().map(|k| k.time))?;
        self.validate_times(TargetPath::Rotation, self.rotation_keys.iter().map(|k| k.time))?;
        self.validate_times(TargetPath::Scale, self.scaling_keys.iter().map(|k| k.time))
    }

    fn validate_times(&self, track: TargetPath, times: impl Iterator<Item = f64>) -> Result<()> {
        let mut previous: Option<(f64, f32)> = None;

        for (index, time) in times.enumerate() {
            let stored = time as f32;
            if !stored.is_finite() {
                return Err(SinewError::NonFiniteKeyTime {
                    node: self.node_name.clone(),
                    track,
                    index,
                    time,
                });
            }
            if let Some((previous, previous_stored)) = previous
                && stored <= previous_stored
            {
                return Err(SinewError::NonIncreasingKeyTimes {
                    node: self.node_name.clone(),
                    track,
                    index,
                    previous,
                    current: time,
                });
            }
            previous = Some((time, stored));
        }

        Ok(())
    }
}

/// Raw data of one animation clip.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationSource {
    pub name: String,
    /// Clip length in ticks.
    pub duration: f64,
    /// Playback rate. Zero means the source did not specify one.
    pub ticks_per_second: f64,
    pub channels: Vec<NodeAnimSource>,
}

impl AnimationSource {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f64, ticks_per_second: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            ticks_per_second,
            channels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: NodeAnimSource) -> Self {
        self.channels.push(channel);
        self
    }

    /// Checks clip timing and every node's key times.
    pub fn validate(&self) -> Result<()> {
        let timing_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !timing_ok(self.duration) || !timing_ok(self.ticks_per_second) {
            return Err(SinewError::InvalidClipTiming {
                clip: self.name.clone(),
                duration: self.duration,
                ticks_per_second: self.ticks_per_second,
            });
        }

        self.channels.iter().try_for_each(NodeAnimSource::validate)
    }
}
