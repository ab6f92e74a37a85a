use crate::{
    eval::compositor::{FrameParams, Slideshow},
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::SlideshowResult,
};

/// One audio track handed to the render host, mixed at a constant volume.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioTrack {
    /// Track reference, as given in the config.
    pub src: String,
    /// Mix volume in `[0, 1]`.
    pub volume: f64,
}

/// Configuration provided to a [`ParamsSink`] before any frame is pushed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Total frames of the slideshow (not just of the streamed range).
    pub total_frames: u64,
    /// Image references, in config order; `per_image` entries follow this order.
    pub images: Vec<String>,
    /// Primary audio track.
    pub primary_audio: AudioTrack,
    /// Optional secondary audio track.
    pub secondary_audio: Option<AudioTrack>,
}

/// Sink contract for consuming evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested range.
pub trait ParamsSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SlideshowResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, params: &FrameParams) -> SlideshowResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SlideshowResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameParams>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames, in push order.
    pub fn frames(&self) -> &[FrameParams] {
        &self.frames
    }

    /// Indices of the captured frames, in push order.
    pub fn frame_indices(&self) -> Vec<FrameIndex> {
        self.frames.iter().map(|f| f.frame).collect()
    }

    /// `true` once `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl ParamsSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SlideshowResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, params: &FrameParams) -> SlideshowResult<()> {
        self.frames.push(params.clone());
        Ok(())
    }

    fn end(&mut self) -> SlideshowResult<()> {
        self.ended = true;
        Ok(())
    }
}

impl SinkConfig {
    /// Describe the output of `show` for a sink.
    pub fn from_slideshow(show: &Slideshow) -> Self {
        let cfg = show.config();
        Self {
            canvas: cfg.canvas,
            fps: cfg.fps,
            total_frames: show.total_frames(),
            images: cfg.images.clone(),
            primary_audio: AudioTrack {
                src: cfg.primary_audio.clone(),
                volume: cfg.primary_volume,
            },
            secondary_audio: cfg.secondary_audio.as_ref().map(|src| AudioTrack {
                src: src.clone(),
                volume: cfg.secondary_volume,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
