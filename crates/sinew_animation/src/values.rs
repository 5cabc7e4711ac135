use glam::{Quat, Vec3, Vec4};

/// A keyframe value that can be blended between two bracketing keys.
///
/// `factor` is 0 at the start key and 1 at the end key. Values outside
/// `[0, 1]` extrapolate along the segment.
pub trait Interpolatable: Copy {
    fn interpolate(start: Self, end: Self, factor: f32) -> Self;

    /// Whether every component is finite.
    fn is_finite(&self) -> bool;
}

impl Interpolatable for Vec3 {
    #[inline]
    fn interpolate(start: Self, end: Self, factor: f32) -> Self {
        start.lerp(end, factor)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Vec3::is_finite(*self)
    }
}

impl Interpolatable for Quat {
    /// Shortest-arc slerp, renormalized to counter floating-point drift.
    #[inline]
    fn interpolate(start: Self, end: Self, factor: f32) -> Self {
        start.slerp(end, factor).normalize()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Quat::is_finite(*self)
    }
}

/// Normalizes `q`, falling back to the identity for zero or non-finite input.
#[must_use]
pub fn normalize_or_identity(q: Quat) -> Quat {
    Vec4::from(q).try_normalize().map_or(Quat::IDENTITY, Quat::from_vec4)
}
