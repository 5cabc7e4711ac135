//! Skeletal animation sampling.
//!
//! An [`AnimationChannel`] owns the sparse translation, rotation and scale
//! keys of one node and evaluates them at any time. An [`AnimationClip`]
//! groups the channels extracted from one [`AnimationSource`] together with
//! the clip's duration and playback rate.
//!
//! ```rust,ignore
//! use sinew_animation::{AnimationClip, AnimationSettings};
//!
//! let clip = AnimationClip::load(&source, &AnimationSettings::default())?;
//! let ticks = clip.seconds_to_ticks(elapsed_seconds) % clip.duration();
//! for channel in clip.channels() {
//!     let local = channel.trs_matrix(ticks);
//!     pose.set_local(channel.target_node_name(), local);
//! }
//! ```
//!
//! Playback time, skeleton hierarchy and blending between clips are left to
//! the caller.

pub mod channel;
pub mod clip;
pub mod errors;
pub mod policy;
pub mod settings;
pub mod source;
pub mod target;
pub mod tracks;
pub mod values;

pub use channel::{AnimationChannel, ChannelCursor, LocalTransform};
pub use clip::AnimationClip;
pub use errors::{Result, SinewError};
pub use policy::{BoundaryPolicy, Extrapolation};
pub use settings::{AnimationSettings, DEFAULT_TICKS_PER_SECOND, KeyValidation};
pub use source::{AnimationSource, NodeAnimSource, QuatKey, VectorKey};
pub use target::TargetPath;
pub use tracks::{KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
