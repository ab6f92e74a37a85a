use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::spring::SpringFidelity,
    config::effect::EffectId,
    foundation::core::{Canvas, Fps},
    foundation::error::{SlideshowError, SlideshowResult},
};

/// Smallest number of images a slideshow accepts.
pub const MIN_IMAGES: usize = 1;
/// Largest number of images a slideshow accepts.
pub const MAX_IMAGES: usize = 5;
/// Accepted steady display time per image, in seconds.
pub const IMAGE_DURATION_RANGE: (f64, f64) = (1.0, 10.0);
/// Accepted transition time, in seconds.
pub const TRANSITION_DURATION_RANGE: (f64, f64) = (0.1, 5.0);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Immutable description of one slideshow render job.
///
/// The config is a pure data model that can be:
/// - built programmatically (see [`crate::SlideshowBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Fields that are omitted in JSON take the defaults of the rendering service
/// (3 s per image, 1 s transitions, `fade`, 30 fps, 1080x1920).
pub struct SlideshowConfig {
    /// Ordered image references, 1 to 5 entries.
    pub images: Vec<String>,
    /// Primary audio track reference (narration, voice-over).
    pub primary_audio: String,
    /// Optional secondary audio track reference (background music).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_audio: Option<String>,
    /// Primary track volume in `[0, 1]`.
    #[serde(default = "default_primary_volume")]
    pub primary_volume: f64,
    /// Secondary track volume in `[0, 1]`.
    #[serde(default = "default_secondary_volume")]
    pub secondary_volume: f64,
    /// Steady display time of each image, in seconds.
    #[serde(default = "default_image_duration")]
    pub image_duration_secs: f64,
    /// Transition time between images, in seconds.
    #[serde(default = "default_transition_duration")]
    pub transition_duration_secs: f64,
    /// Transition effect.
    #[serde(default)]
    pub effect: EffectId,
    /// Output frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Output canvas.
    #[serde(default)]
    pub canvas: Canvas,
    /// Spring sampling mode.
    #[serde(default)]
    pub spring_fidelity: SpringFidelity,
}

fn default_primary_volume() -> f64 {
    1.0
}

fn default_secondary_volume() -> f64 {
    0.3
}

fn default_image_duration() -> f64 {
    3.0
}

fn default_transition_duration() -> f64 {
    1.0
}

impl SlideshowConfig {
    /// Config with service defaults for everything but the media references.
    pub fn new(images: Vec<String>, primary_audio: impl Into<String>) -> Self {
        Self {
            images,
            primary_audio: primary_audio.into(),
            secondary_audio: None,
            primary_volume: default_primary_volume(),
            secondary_volume: default_secondary_volume(),
            image_duration_secs: default_image_duration(),
            transition_duration_secs: default_transition_duration(),
            effect: EffectId::default(),
            fps: Fps::default(),
            canvas: Canvas::default(),
            spring_fidelity: SpringFidelity::default(),
        }
    }

    /// Parse a config from a JSON reader. The result is not validated yet.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlideshowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlideshowError::configuration(format!("parse slideshow JSON: {e}")))
    }

    /// Parse a config from a JSON string. The result is not validated yet.
    pub fn from_json_str(s: &str) -> SlideshowResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SlideshowError::configuration(format!("parse slideshow JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk. The result is not validated yet.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> SlideshowResult<Self> {
        let f = File::open(path).map_err(|e| {
            SlideshowError::configuration(format!(
                "open slideshow JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> SlideshowResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlideshowError::serde(e.to_string()))
    }

    /// Check every invariant of the config.
    pub fn validate(&self) -> SlideshowResult<()> {
        let n = self.images.len();
        if !(MIN_IMAGES..=MAX_IMAGES).contains(&n) {
            return Err(SlideshowError::configuration(format!(
                "slideshow needs between {MIN_IMAGES} and {MAX_IMAGES} images, got {n}"
            )));
        }
        if let Some(i) = self.images.iter().position(|s| s.trim().is_empty()) {
            return Err(SlideshowError::configuration(format!(
                "image reference #{i} must be non-empty"
            )));
        }
        if self.primary_audio.trim().is_empty() {
            return Err(SlideshowError::configuration(
                "primary_audio reference must be non-empty",
            ));
        }
        if let Some(src) = &self.secondary_audio
            && src.trim().is_empty()
        {
            return Err(SlideshowError::configuration(
                "secondary_audio reference must be non-empty when set",
            ));
        }

        check_range(
            "image_duration_secs",
            self.image_duration_secs,
            IMAGE_DURATION_RANGE,
        )?;
        check_range(
            "transition_duration_secs",
            self.transition_duration_secs,
            TRANSITION_DURATION_RANGE,
        )?;
        check_range("primary_volume", self.primary_volume, (0.0, 1.0))?;
        check_range("secondary_volume", self.secondary_volume, (0.0, 1.0))?;

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SlideshowError::configuration(
                "canvas width and height must be > 0",
            ));
        }
        Ok(())
    }
}

fn check_range(field: &str, v: f64, (lo, hi): (f64, f64)) -> SlideshowResult<()> {
    if !v.is_finite() || v < lo || v > hi {
        return Err(SlideshowError::configuration(format!(
            "{field} must be within [{lo}, {hi}], got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
