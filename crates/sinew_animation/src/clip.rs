use std::sync::Arc;

use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::channel::AnimationChannel;
use crate::errors::Result;
use crate::settings::{AnimationSettings, DEFAULT_TICKS_PER_SECOND, KeyValidation};
use crate::source::AnimationSource;

/// A named, time-bounded set of channels, one per animated node.
///
/// Duration and rate are fixed once loaded; only the name may change.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    name: String,
    duration: f64,
    ticks_per_second: f64,
    fallback_ticks_per_second: f64,
    channels: Vec<Arc<AnimationChannel>>,
    // node name -> index into `channels`
    channel_index: FxHashMap<String, usize>,
}

impl Default for AnimationClip {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 0.0,
            ticks_per_second: 0.0,
            fallback_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            channels: Vec::new(),
            channel_index: FxHashMap::default(),
        }
    }

    /// Builds a clip named after `source`.
    ///
    /// With [`KeyValidation::Strict`] the source is validated first and the
    /// first problem is returned as an error.
    pub fn load(source: &AnimationSource, settings: &AnimationSettings) -> Result<Self> {
        if settings.key_validation == KeyValidation::Strict {
            source.validate()?;
        }

        let mut clip = Self::new(source.name.clone());
        clip.fallback_ticks_per_second = settings.fallback_ticks_per_second;
        clip.add_channels(source);
        Ok(clip)
    }

    /// Records the source's duration and rate and appends one channel per
    /// node track.
    ///
    /// Meant to be called once per clip: a second call appends the channels
    /// again.
    pub fn add_channels(&mut self, source: &AnimationSource) {
        self.duration = source.duration;
        self.ticks_per_second = source.ticks_per_second;

        self.channels.reserve(source.channels.len());
        for node in &source.channels {
            let index = self.channels.len();
            self.channels.push(Arc::new(AnimationChannel::from_source(node)));
            self.channel_index.entry(node.node_name.clone()).or_insert(index);
        }

        log::info!(
            "Animation clip '{}': {} channels, duration {} ticks at {} ticks/s",
            self.name,
            self.channels.len(),
            self.duration,
            self.ticks_per_second,
        );
    }

    #[must_use]
    pub fn channels(&self) -> &[Arc<AnimationChannel>] {
        &self.channels
    }

    /// The channel animating `node_name`. With duplicate names the first
    /// loaded channel wins.
    #[must_use]
    pub fn channel(&self, node_name: &str) -> Option<&Arc<AnimationChannel>> {
        self.channel_index
            .get(node_name)
            .and_then(|&index| self.channels.get(index))
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Length in ticks, as given by the source.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration as f32
    }

    /// Rate as given by the source; may be zero.
    #[must_use]
    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second as f32
    }

    /// The source rate, or the configured fallback when the source gave none.
    #[must_use]
    pub fn effective_ticks_per_second(&self) -> f32 {
        if self.ticks_per_second > 0.0 {
            self.ticks_per_second as f32
        } else {
            self.fallback_ticks_per_second as f32
        }
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        let rate = self.effective_ticks_per_second();
        if rate > 0.0 { self.duration() / rate } else { 0.0 }
    }

    /// Converts a playback position in seconds to the clip's tick time base.
    #[must_use]
    pub fn seconds_to_ticks(&self, seconds: f32) -> f32 {
        seconds * self.effective_ticks_per_second()
    }

    /// Latest key time over all channels, which may differ from `duration`.
    #[must_use]
    pub fn max_channel_time(&self) -> f32 {
        self.channels
            .iter()
            .map(|channel| channel.max_time())
            .fold(0.0_f32, f32::max)
    }

    /// Local TRS matrix of every channel at `time` (in ticks).
    pub fn local_matrices(&self, time: f32) -> impl Iterator<Item = (&str, Mat4)> + '_ {
        self.channels
            .iter()
            .map(move |channel| (channel.target_node_name(), channel.trs_matrix(time)))
    }
}
