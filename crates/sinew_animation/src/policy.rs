//! Boundary extrapolation policies.
//!
//! A channel carries one pre-range and one post-range policy, decoded from the
//! small integer codes supplied by the animation source. Both apply to all
//! three tracks of the channel.

/// Behaviour for query times outside a track's keyed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryPolicy {
    /// Return the track's neutral value (zero translation, unit scale,
    /// identity rotation). Source code `0`.
    #[default]
    HoldDefault,
    /// Return the nearest boundary key. Source code `1`.
    HoldBoundary,
    /// Any other source code. Reported as a diagnostic; sampling falls through
    /// to interpolation along the first or last segment.
    Unrecognized(u32),
}

impl BoundaryPolicy {
    pub const HOLD_DEFAULT_CODE: u32 = 0;
    pub const HOLD_BOUNDARY_CODE: u32 = 1;

    /// The raw source code this policy was decoded from.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            BoundaryPolicy::HoldDefault => Self::HOLD_DEFAULT_CODE,
            BoundaryPolicy::HoldBoundary => Self::HOLD_BOUNDARY_CODE,
            BoundaryPolicy::Unrecognized(code) => code,
        }
    }

    #[must_use]
    pub fn is_recognized(self) -> bool {
        !matches!(self, BoundaryPolicy::Unrecognized(_))
    }
}

impl From<u32> for BoundaryPolicy {
    fn from(code: u32) -> Self {
        match code {
            Self::HOLD_DEFAULT_CODE => BoundaryPolicy::HoldDefault,
            Self::HOLD_BOUNDARY_CODE => BoundaryPolicy::HoldBoundary,
            other => BoundaryPolicy::Unrecognized(other),
        }
    }
}

/// Pre-range and post-range policy pair shared by a channel's tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrapolation {
    /// Applies when the query time is strictly before the first key.
    pub pre: BoundaryPolicy,
    /// Applies after the last key. `HoldDefault` triggers strictly after it,
    /// `HoldBoundary` at or after it.
    pub post: BoundaryPolicy,
}

impl Extrapolation {
    #[must_use]
    pub const fn new(pre: BoundaryPolicy, post: BoundaryPolicy) -> Self {
        Self { pre, post }
    }

    /// Decodes a pair of raw source codes.
    #[must_use]
    pub fn from_codes(pre_state: u32, post_state: u32) -> Self {
        Self {
            pre: pre_state.into(),
            post: post_state.into(),
        }
    }

    /// Both ends hold the boundary key.
    #[must_use]
    pub const fn clamped() -> Self {
        Self::new(BoundaryPolicy::HoldBoundary, BoundaryPolicy::HoldBoundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_decode_and_round_trip() {
        assert_eq!(BoundaryPolicy::from(0), BoundaryPolicy::HoldDefault);
        assert_eq!(BoundaryPolicy::from(1), BoundaryPolicy::HoldBoundary);
        assert_eq!(BoundaryPolicy::from(3), BoundaryPolicy::Unrecognized(3));
        assert_eq!(BoundaryPolicy::from(3).code(), 3);
        assert!(!BoundaryPolicy::from(2).is_recognized());
    }

    #[test]
    fn default_holds_neutral_on_both_ends() {
        let ex = Extrapolation::default();
        assert_eq!(ex.pre, BoundaryPolicy::HoldDefault);
        assert_eq!(ex.post, BoundaryPolicy::HoldDefault);
        assert_eq!(Extrapolation::from_codes(1, 7).post, BoundaryPolicy::Unrecognized(7));
    }
}
