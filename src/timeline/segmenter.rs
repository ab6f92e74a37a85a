use crate::{
    config::model::SlideshowConfig,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{SlideshowError, SlideshowResult},
};

/// Frame counts derived from a config.
///
/// A segment is one image's lifetime: `steady_frames` of steady display followed by
/// `segment_frames - steady_frames` frames of transition into the next image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentTiming {
    /// Frames per segment, `round((image + transition) * fps)`.
    pub segment_frames: u64,
    /// Steady frames per segment, `round(image * fps)`.
    pub steady_frames: u64,
    /// Number of images (and segments).
    pub image_count: usize,
    /// Frame rate the counts were derived at.
    pub fps: Fps,
}

impl SegmentTiming {
    /// Derive frame counts from `cfg`. `cfg` is expected to be validated.
    pub fn from_config(cfg: &SlideshowConfig) -> Self {
        let fps = cfg.fps;
        Self {
            segment_frames: fps
                .secs_to_frames_round(cfg.image_duration_secs + cfg.transition_duration_secs),
            steady_frames: fps.secs_to_frames_round(cfg.image_duration_secs),
            image_count: cfg.images.len(),
            fps,
        }
    }

    /// Frames spent transitioning at the end of each segment.
    pub fn transition_frames(self) -> u64 {
        self.segment_frames.saturating_sub(self.steady_frames)
    }

    /// Length of the whole slideshow, `segment_frames * image_count`.
    pub fn total_frames(self) -> u64 {
        self.segment_frames.saturating_mul(self.image_count as u64)
    }

    /// Length of the whole slideshow, in seconds.
    pub fn total_secs(self) -> f64 {
        self.fps.frames_to_secs(self.total_frames())
    }

    /// First frame of segment `index`.
    pub fn segment_start(self, index: usize) -> FrameIndex {
        FrameIndex(self.segment_frames.saturating_mul(index as u64))
    }
}

/// Where a frame falls on the slideshow timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FramePhase {
    /// Image (and segment) currently on screen.
    pub current_index: usize,
    /// Successor of the current image; `None` for the last image.
    pub next_index: Option<usize>,
    /// Frames elapsed since the current segment started.
    pub frame_within_image: u64,
    /// `true` once the steady phase of the current segment is over. Never set for a
    /// single-image slideshow.
    pub in_transition: bool,
    /// Linear transition progress in `[0, 1]`; 0 outside transitions.
    pub linear_progress: f64,
}

impl FramePhase {
    /// The image holding the `next` role on this frame, if any.
    pub fn incoming_index(&self) -> Option<usize> {
        if self.in_transition {
            self.next_index
        } else {
            None
        }
    }
}

/// Map a global frame to its segment, phase and linear progress.
///
/// Frames at or past the end of the timeline are an error; callers decide whether to clamp.
pub fn segment_frame(timing: SegmentTiming, frame: FrameIndex) -> SlideshowResult<FramePhase> {
    let total = timing.total_frames();
    if frame.0 >= total || timing.segment_frames == 0 {
        return Err(SlideshowError::out_of_range(frame.0, total));
    }

    let segment = frame.0 / timing.segment_frames;
    let offset = frame.0 % timing.segment_frames;
    let current_index = segment as usize;
    let next_index = (current_index + 1 < timing.image_count).then_some(current_index + 1);

    // A lone image has nothing to hand over to and stays steady for its whole segment.
    let in_transition = timing.image_count > 1 && offset >= timing.steady_frames;
    let linear_progress = if in_transition {
        let window = timing.transition_frames();
        if window == 0 {
            1.0
        } else {
            ((offset - timing.steady_frames) as f64 / window as f64).clamp(0.0, 1.0)
        }
    } else {
        0.0
    };

    Ok(FramePhase {
        current_index,
        next_index,
        frame_within_image: offset,
        in_transition,
        linear_progress,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segmenter.rs"]
mod tests;
