use crate::policy::{BoundaryPolicy, Extrapolation};
use crate::values::Interpolatable;

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the segment used by the previous lookup on one track.
///
/// Owned by the caller, so the track itself stays immutable and can be
/// sampled from many threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Sparse keyframes for one transform component.
///
/// `times` is sorted ascending and index-aligned with `values`.
/// `inverse_deltas[i]` caches `1 / (times[i + 1] - times[i])` so sampling
/// multiplies instead of divides.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
    inverse_deltas: Vec<f32>,
    neutral: T,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// Builds a track from parallel time and value sequences.
    ///
    /// Mismatched lengths are truncated to the shorter sequence.
    #[must_use]
    pub fn new(mut times: Vec<f32>, mut values: Vec<T>, neutral: T) -> Self {
        if times.len() != values.len() {
            log::warn!(
                "Keyframe track has {} times but {} values, truncating to {}",
                times.len(),
                values.len(),
                times.len().min(values.len())
            );
            let len = times.len().min(values.len());
            times.truncate(len);
            values.truncate(len);
        }

        let inverse_deltas = compute_inverse_deltas(&times);

        Self {
            times,
            values,
            inverse_deltas,
            neutral,
        }
    }

    /// Builds a track from `(time, value)` pairs in source order.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = (f32, T)>, neutral: T) -> Self {
        let (times, values): (Vec<f32>, Vec<T>) = keys.into_iter().unzip();
        Self::new(times, values, neutral)
    }

    /// An empty track that always samples to `neutral`.
    #[must_use]
    pub fn empty(neutral: T) -> Self {
        Self::new(Vec::new(), Vec::new(), neutral)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// One entry per segment; empty for tracks with fewer than two keys.
    #[must_use]
    pub fn inverse_deltas(&self) -> &[f32] {
        &self.inverse_deltas
    }

    /// Value returned for empty tracks and under `HoldDefault`.
    #[must_use]
    pub fn neutral(&self) -> T {
        self.neutral
    }

    #[must_use]
    pub fn first_time(&self) -> Option<f32> {
        self.times.first().copied()
    }

    #[must_use]
    pub fn last_time(&self) -> Option<f32> {
        self.times.last().copied()
    }

    /// Number of segments whose keys share a timestamp (or run backwards).
    /// Their cached reciprocal is zero, so they sample to their start key.
    #[must_use]
    pub fn degenerate_segment_count(&self) -> usize {
        self.inverse_deltas.iter().filter(|&&inv| inv <= 0.0).count()
    }

    /// Index of the segment `[times[i], times[i + 1]]` used for `time`.
    ///
    /// Lower-bound search, then one step back, clamped to the first and last
    /// segments. A query exactly at `times[0]` selects segment 0.
    #[must_use]
    pub fn locate_segment(&self, time: f32) -> usize {
        let next = self.times.partition_point(|&t| t < time);
        next.saturating_sub(1).min(self.times.len().saturating_sub(2))
    }

    /// Samples the track at `time`. O(log n) in the key count.
    #[must_use]
    pub fn sample(&self, time: f32, extrapolation: Extrapolation) -> T {
        if let Some(value) = self.sample_outside(time, extrapolation) {
            return value;
        }

        let segment = self.locate_segment(time);
        self.interpolate_segment(segment, time)
    }

    /// Same result as [`sample`](Self::sample), but starts the segment search
    /// from the cursor and scans a few neighbours before falling back to
    /// binary search. Sequential playback hits in O(1).
    pub fn sample_with_cursor(
        &self,
        time: f32,
        extrapolation: Extrapolation,
        cursor: &mut KeyframeCursor,
    ) -> T {
        if let Some(value) = self.sample_outside(time, extrapolation) {
            return value;
        }

        let segment = self.locate_segment_from(time, cursor.last_index);
        cursor.last_index = segment;
        self.interpolate_segment(segment, time)
    }

    /// Resolves everything that does not need interpolation: empty and
    /// single-key tracks, and times captured by a boundary policy.
    fn sample_outside(&self, time: f32, extrapolation: Extrapolation) -> Option<T> {
        let (Some(&first), Some(&last)) = (self.times.first(), self.times.last()) else {
            return Some(self.neutral);
        };

        match extrapolation.pre {
            BoundaryPolicy::HoldDefault if time < first => return Some(self.neutral),
            BoundaryPolicy::HoldBoundary if time < first => return self.values.first().copied(),
            BoundaryPolicy::Unrecognized(code) => {
                log::debug!("Pre-range policy {code} not implemented, interpolating at t={time}");
            }
            _ => {}
        }

        // The post-range hold is inclusive: a query exactly at the last key is
        // already past the end.
        match extrapolation.post {
            BoundaryPolicy::HoldDefault if time > last => return Some(self.neutral),
            BoundaryPolicy::HoldBoundary if time >= last => return self.values.last().copied(),
            BoundaryPolicy::Unrecognized(code) => {
                log::debug!("Post-range policy {code} not implemented, interpolating at t={time}");
            }
            _ => {}
        }

        if self.times.len() == 1 {
            return self.values.first().copied();
        }

        None
    }

    fn locate_segment_from(&self, time: f32, hint: usize) -> usize {
        let last_segment = self.times.len() - 2;
        let mut segment = hint.min(last_segment);

        for _ in 0..=MAX_SCAN_OFFSET {
            if self.segment_contains(segment, time) {
                return segment;
            }
            if segment < last_segment && time > self.times[segment + 1] {
                segment += 1;
            } else if segment > 0 && time <= self.times[segment] {
                segment -= 1;
            } else {
                break;
            }
        }

        // Large jump (scrubbing, loop wrap): global search.
        self.locate_segment(time)
    }

    /// Whether `locate_segment(time)` would return `segment`.
    fn segment_contains(&self, segment: usize, time: f32) -> bool {
        let after_start = segment == 0 || self.times[segment] < time;
        let before_end = segment + 2 == self.times.len() || time <= self.times[segment + 1];
        after_start && before_end
    }

    /// Requires at least two keys and `segment <= len - 2`.
    fn interpolate_segment(&self, segment: usize, time: f32) -> T {
        let factor = (time - self.times[segment]) * self.inverse_deltas[segment];
        let factor = if factor.is_finite() { factor } else { 0.0 };

        let (start, end) = (self.values[segment], self.values[segment + 1]);
        let value = T::interpolate(start, end, factor);
        if value.is_finite() {
            return value;
        }

        // Far extrapolation overflowed: hold the key on that side instead.
        if factor < 0.0 { start } else { end }
    }
}

/// Reciprocal of each segment's duration. Zero-length, backwards or
/// overflowing segments store `0.0`.
fn compute_inverse_deltas(times: &[f32]) -> Vec<f32> {
    times
        .windows(2)
        .map(|pair| {
            let inv = (pair[1] - pair[0]).recip();
            if inv.is_finite() && inv > 0.0 { inv } else { 0.0 }
        })
        .collect()
}
