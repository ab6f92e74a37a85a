/// Convenience result type used across the engine.
pub type SlideshowResult<T> = Result<T, SlideshowError>;

/// Top-level error taxonomy used by engine APIs.
///
/// All configuration failures are detected once, before any frame is evaluated.
/// Frame evaluation itself only fails for frames outside the timeline.
#[derive(thiserror::Error, Debug)]
pub enum SlideshowError {
    /// Invalid slideshow configuration (image count, durations, volumes, effect id, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A frame was requested outside `[0, total_frames)`.
    #[error("out of range error: frame {frame} is outside [0, {total_frames})")]
    OutOfRange {
        /// Requested frame.
        frame: u64,
        /// Total frames of the slideshow timeline.
        total_frames: u64,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideshowError {
    /// Build a [`SlideshowError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SlideshowError::OutOfRange`] value.
    pub fn out_of_range(frame: u64, total_frames: u64) -> Self {
        Self::OutOfRange {
            frame,
            total_frames,
        }
    }

    /// Build a [`SlideshowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
