#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # Sinew
//!
//! Keyframe sampling for skeletal animation. Loaders hand over raw per-node
//! keys as an [`AnimationSource`]; the resulting [`AnimationClip`] exposes one
//! [`AnimationChannel`] per node, each producing a local TRS matrix at any
//! time.
//!
//! ```rust,ignore
//! use sinew::{AnimationClip, AnimationSettings};
//!
//! let clip = AnimationClip::load(&source, &AnimationSettings::default())?;
//! let hips = clip.channel("Hips").expect("clip animates the hips");
//! let local = hips.trs_matrix(12.5);
//! ```

pub use sinew_animation as animation;

pub use animation::{
    AnimationChannel, AnimationClip, AnimationSettings, AnimationSource, BoundaryPolicy,
    Extrapolation, KeyValidation, NodeAnimSource, QuatKey, Result, SinewError, VectorKey,
};

pub mod prelude {
    pub use crate::animation::{
        AnimationChannel, AnimationClip, AnimationSettings, AnimationSource, BoundaryPolicy,
        ChannelCursor, Extrapolation, KeyValidation, LocalTransform, NodeAnimSource, QuatKey,
        TargetPath, VectorKey,
    };
    pub use glam::{Mat4, Quat, Vec3};
}
