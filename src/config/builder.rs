use crate::{
    animation::spring::SpringFidelity,
    config::effect::EffectId,
    config::model::SlideshowConfig,
    foundation::core::{Canvas, Fps},
    foundation::error::SlideshowResult,
};

/// Fluent constructor for [`SlideshowConfig`]; [`build`](Self::build) validates.
pub struct SlideshowBuilder {
    cfg: SlideshowConfig,
}

impl SlideshowBuilder {
    /// Start from service defaults with the given primary audio reference.
    pub fn new(primary_audio: impl Into<String>) -> Self {
        Self {
            cfg: SlideshowConfig::new(Vec::new(), primary_audio),
        }
    }

    /// Append one image reference.
    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.cfg.images.push(src.into());
        self
    }

    /// Append several image references, in order.
    pub fn images<I, S>(mut self, srcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.images.extend(srcs.into_iter().map(Into::into));
        self
    }

    /// Set the secondary audio track and its volume.
    pub fn secondary_audio(mut self, src: impl Into<String>, volume: f64) -> Self {
        self.cfg.secondary_audio = Some(src.into());
        self.cfg.secondary_volume = volume;
        self
    }

    /// Set the primary track volume.
    pub fn primary_volume(mut self, volume: f64) -> Self {
        self.cfg.primary_volume = volume;
        self
    }

    /// Set steady and transition durations, in seconds.
    pub fn durations(mut self, image_secs: f64, transition_secs: f64) -> Self {
        self.cfg.image_duration_secs = image_secs;
        self.cfg.transition_duration_secs = transition_secs;
        self
    }

    /// Transition effect used between every pair of images.
    pub fn effect(mut self, effect: EffectId) -> Self {
        self.cfg.effect = effect;
        self
    }

    /// Output frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.cfg.fps = fps;
        self
    }

    /// Output canvas size in pixels.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.cfg.canvas = Canvas { width, height };
        self
    }

    /// Spring sampling mode.
    pub fn spring_fidelity(mut self, fidelity: SpringFidelity) -> Self {
        self.cfg.spring_fidelity = fidelity;
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> SlideshowResult<SlideshowConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/builder.rs"]
mod tests;
