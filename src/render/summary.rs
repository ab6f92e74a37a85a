use crate::{
    config::effect::EffectId,
    encode::sink::AudioTrack,
    eval::compositor::Slideshow,
    foundation::core::{Canvas, Fps},
};

/// Audio tracks of a job.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioSummary {
    /// Primary track.
    pub primary: AudioTrack,
    /// Secondary track, when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<AudioTrack>,
}

/// Description of a render job, reported to callers before any frame is produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct JobSummary {
    /// Total video length, in seconds.
    pub duration_secs: f64,
    /// Total video length, in frames.
    pub total_frames: u64,
    /// Frames per image segment, transition included.
    pub segment_frames: u64,
    /// Steady frames per segment.
    pub steady_frames: u64,
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Transition effect.
    pub effect: EffectId,
    /// Number of images.
    pub images_count: usize,
    /// Audio tracks and volumes.
    pub audio: AudioSummary,
}

impl JobSummary {
    /// Summarize the job described by `show`.
    pub fn from_slideshow(show: &Slideshow) -> Self {
        let cfg = show.config();
        let timing = show.timing();
        Self {
            duration_secs: timing.total_secs(),
            total_frames: timing.total_frames(),
            segment_frames: timing.segment_frames,
            steady_frames: timing.steady_frames,
            canvas: cfg.canvas,
            fps: cfg.fps,
            effect: cfg.effect,
            images_count: cfg.images.len(),
            audio: AudioSummary {
                primary: AudioTrack {
                    src: cfg.primary_audio.clone(),
                    volume: cfg.primary_volume,
                },
                secondary: cfg.secondary_audio.as_ref().map(|src| AudioTrack {
                    src: src.clone(),
                    volume: cfg.secondary_volume,
                }),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/summary.rs"]
mod tests;
