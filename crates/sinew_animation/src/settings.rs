//! Animation Loading Settings
//!
//! [`AnimationSettings`] controls how an [`AnimationSource`](crate::AnimationSource)
//! becomes an [`AnimationClip`](crate::AnimationClip). Sampling itself has no
//! configuration: it is a pure function of the loaded keys and the query time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sinew_animation::{AnimationClip, AnimationSettings, KeyValidation};
//!
//! // Default: lenient loading, 25 ticks/s when the source gives no rate
//! let clip = AnimationClip::load(&source, &AnimationSettings::default())?;
//!
//! // Reject sources with unordered or non-finite key times
//! let settings = AnimationSettings {
//!     key_validation: KeyValidation::Strict,
//!     ..Default::default()
//! };
//! let clip = AnimationClip::load(&source, &settings)?;
//! ```

/// Playback rate assumed for clips whose source reports zero ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: f64 = 25.0;

/// How key timestamps are checked while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyValidation {
    /// Load everything. Duplicate timestamps become zero-length segments that
    /// sample to their start key, and are logged.
    #[default]
    Lenient,
    /// Fail the load on non-finite or non-increasing key times, or on a
    /// negative or non-finite clip duration or rate.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationSettings {
    pub key_validation: KeyValidation,
    /// Rate used for tick/second conversions when the source rate is zero.
    pub fallback_ticks_per_second: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            key_validation: KeyValidation::Lenient,
            fallback_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl AnimationSettings {
    #[must_use]
    pub fn with_key_validation(mut self, key_validation: KeyValidation) -> Self {
        self.key_validation = key_validation;
        self
    }

    #[must_use]
    pub fn with_fallback_ticks_per_second(mut self, ticks_per_second: f64) -> Self {
        self.fallback_ticks_per_second = ticks_per_second;
        self
    }
}
