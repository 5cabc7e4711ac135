//! Error Types
//!
//! Sampling never fails: an empty track yields its neutral value and boundary
//! policies always resolve to a usable result. Errors only come from
//! **strict** loading, where an [`AnimationSource`](crate::AnimationSource) is
//! checked before any channel is built.
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SinewError>`.
//!
//! ```rust,ignore
//! use sinew_animation::{AnimationClip, AnimationSettings, KeyValidation};
//!
//! let settings = AnimationSettings::default().with_key_validation(KeyValidation::Strict);
//! let clip = AnimationClip::load(&source, &settings)?;
//! ```

use thiserror::Error;

use crate::target::TargetPath;

/// Errors reported while validating animation source data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinewError {
    // ========================================================================
    // Keyframe Errors
    // ========================================================================
    /// A key carries a NaN or infinite timestamp.
    #[error("Non-finite key time in '{node}' {track} track (key {index}: {time})")]
    NonFiniteKeyTime {
        /// Node the track belongs to
        node: String,
        /// Which track of the node
        track: TargetPath,
        /// Index of the offending key
        index: usize,
        /// The offending timestamp
        time: f64,
    },

    /// Two adjacent keys are not in strictly increasing time order.
    #[error(
        "Key times in '{node}' {track} track are not strictly increasing at key {index} ({previous} -> {current})"
    )]
    NonIncreasingKeyTimes {
        /// Node the track belongs to
        node: String,
        /// Which track of the node
        track: TargetPath,
        /// Index of the second key of the pair
        index: usize,
        /// Timestamp of key `index - 1`
        previous: f64,
        /// Timestamp of key `index`
        current: f64,
    },

    // ========================================================================
    // Clip Errors
    // ========================================================================
    /// Clip duration or playback rate is negative or not finite.
    #[error("Invalid timing for clip '{clip}': duration {duration}, ticks per second {ticks_per_second}")]
    InvalidClipTiming {
        /// Clip name as reported by the source
        clip: String,
        /// Duration in ticks
        duration: f64,
        /// Playback rate
        ticks_per_second: f64,
    },
}

/// Alias for `Result<T, SinewError>`.
pub type Result<T> = std::result::Result<T, SinewError>;
