use std::sync::Arc;

use crate::{
    animation::{spring::eased_progress, zoom::zoom_decay_scale},
    config::model::SlideshowConfig,
    effects::params::{RenderParams, Role},
    effects::registry,
    eval::observer::FrameObserver,
    foundation::core::FrameIndex,
    foundation::error::SlideshowResult,
    timeline::segmenter::{FramePhase, SegmentTiming, segment_frame},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Audio mix levels. Constant over the whole slideshow.
pub struct AudioParams {
    /// Primary track volume in `[0, 1]`.
    pub primary_volume: f64,
    /// Secondary track volume in `[0, 1]`.
    pub secondary_volume: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the render host needs to composite one frame.
pub struct FrameParams {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Timeline position of the frame.
    pub phase: FramePhase,
    /// Spring-eased transition progress; 0 outside transitions.
    pub eased_progress: f64,
    /// Role of each image, in config order.
    pub roles: Vec<Role>,
    /// Render parameters of each image, in config order.
    pub per_image: Vec<RenderParams>,
    /// Audio mix levels.
    pub audio: AudioParams,
}

/// A validated slideshow, ready to answer per-frame queries.
///
/// Construction validates the config once; afterwards [`render_params`](Self::render_params) is
/// a pure function of the frame and can be called from any thread, in any order.
#[derive(Clone)]
pub struct Slideshow {
    config: SlideshowConfig,
    timing: SegmentTiming,
    observer: Option<Arc<dyn FrameObserver>>,
}

impl std::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("config", &self.config)
            .field("timing", &self.timing)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Slideshow {
    /// Validate `config` and derive its timing.
    #[tracing::instrument(skip(config), fields(effect = config.effect.as_str(), images = config.images.len()))]
    pub fn new(config: SlideshowConfig) -> SlideshowResult<Self> {
        config.validate()?;
        let timing = SegmentTiming::from_config(&config);
        tracing::debug!(
            segment_frames = timing.segment_frames,
            steady_frames = timing.steady_frames,
            total_frames = timing.total_frames(),
            "slideshow timing"
        );
        Ok(Self {
            config,
            timing,
            observer: None,
        })
    }

    /// Attach a per-frame observer.
    pub fn with_observer(mut self, observer: Arc<dyn FrameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The validated config.
    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    /// Frame counts derived from the config.
    pub fn timing(&self) -> SegmentTiming {
        self.timing
    }

    /// Total frames of the timeline; valid frames are `[0, total_frames)`.
    pub fn total_frames(&self) -> u64 {
        self.timing.total_frames()
    }

    /// Static audio mix levels, copied from the config.
    pub fn audio(&self) -> AudioParams {
        AudioParams {
            primary_volume: self.config.primary_volume,
            secondary_volume: self.config.secondary_volume,
        }
    }

    /// Compute the render parameters of every image on `frame`.
    ///
    /// Frames outside `[0, total_frames)` are rejected with
    /// [`SlideshowError::OutOfRange`](crate::SlideshowError::OutOfRange); they are never clamped.
    pub fn render_params(&self, frame: FrameIndex) -> SlideshowResult<FrameParams> {
        let phase = segment_frame(self.timing, frame)?;
        let effect = self.config.effect;

        let eased = if phase.in_transition {
            eased_progress(
                phase.linear_progress,
                self.config.transition_duration_secs,
                self.config.fps,
                self.config.spring_fidelity,
            )
        } else {
            0.0
        };
        let zoom_scale = if effect.is_zoom_family() {
            zoom_decay_scale(
                phase.frame_within_image,
                self.config.fps,
                self.timing.steady_frames,
            )
        } else {
            1.0
        };

        let incoming = phase.incoming_index();
        let n = self.config.images.len();
        let mut roles = Vec::with_capacity(n);
        let mut per_image = Vec::with_capacity(n);
        for i in 0..n {
            let role = if i == phase.current_index {
                Role::Current
            } else if incoming == Some(i) {
                Role::Next
            } else {
                Role::Inactive
            };
            let params = match role {
                Role::Current if !phase.in_transition => registry::steady(effect, zoom_scale),
                _ => registry::evaluate(effect, role, eased, zoom_scale),
            };
            roles.push(role);
            per_image.push(params);
        }

        let out = FrameParams {
            frame,
            phase,
            eased_progress: eased,
            roles,
            per_image,
            audio: self.audio(),
        };
        if let Some(observer) = &self.observer {
            observer.on_frame(effect, &out);
        }
        Ok(out)
    }
}

/// One-shot query: validate `config`, then compute the parameters of `frame`.
///
/// Prefer [`Slideshow`] when evaluating many frames, so validation runs once.
pub fn compute_render_params(
    frame: FrameIndex,
    config: &SlideshowConfig,
) -> SlideshowResult<FrameParams> {
    Slideshow::new(config.clone())?.render_params(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
