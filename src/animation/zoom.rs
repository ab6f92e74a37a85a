use crate::{foundation::core::Fps, transform::non_linear::interpolate_clamped};

/// Scale at the start of an image's entrance zoom.
pub const ZOOM_START_SCALE: f64 = 1.2;
/// Scale once the entrance zoom has settled.
pub const ZOOM_END_SCALE: f64 = 1.0;

/// Entrance zoom of the current image, `frame_within_image` frames after it became current.
///
/// The zoom settles from 120% to 100% over one second, or over the whole steady phase when
/// that is shorter.
pub fn zoom_decay_scale(frame_within_image: u64, fps: Fps, steady_frames: u64) -> f64 {
    let window = u64::from(fps.get()).min(steady_frames);
    if window == 0 {
        return ZOOM_END_SCALE;
    }
    let progress = (frame_within_image as f64) / (window as f64);
    interpolate_clamped(progress, [0.0, 1.0], [ZOOM_START_SCALE, ZOOM_END_SCALE])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/zoom.rs"]
mod tests;
