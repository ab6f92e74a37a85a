use crate::foundation::error::{SlideshowError, SlideshowResult};

pub use kurbo::{Affine, Point, Vec2};

/// Global, 0-based frame index on the slideshow timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> SlideshowResult<Self> {
        if start.0 > end.0 {
            return Err(SlideshowError::configuration(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }
}

/// Integral output frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    /// Build a frame rate, rejecting zero.
    pub fn new(fps: u32) -> SlideshowResult<Self> {
        if fps == 0 {
            return Err(SlideshowError::configuration("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Frames per second as an integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Frames per second as `f64`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Duration of `frames` frames, in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) / self.as_f64()
    }

    /// Number of whole frames closest to `secs` seconds.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<u32> for Fps {
    type Error = SlideshowError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fps> for u32 {
    fn from(value: Fps) -> Self {
        value.0
    }
}

/// Output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    // 9:16 vertical, the format of mobile stories.
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

impl Canvas {
    /// Canvas centre in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
