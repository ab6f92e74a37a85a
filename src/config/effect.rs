use std::{fmt, str::FromStr};

use crate::foundation::error::{SlideshowError, SlideshowResult};

/// Transition effect applied between consecutive images.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum EffectId {
    /// Fade out with a subtle zoom and dimming; the next image drifts in.
    #[default]
    Fade,
    /// Plain opacity dissolve.
    Crossfade,
    /// Each image settles from 120% to 100%, fading into the next.
    ZoomOut,
    /// Zoom-out settle combined with the fade transition.
    ZoomOutFade,
    /// Zoom-out settle combined with a crossfade.
    ZoomCrossfade,
    /// Next image grows from 80% to 100% while fading in.
    ZoomIn,
    /// Push from right to left.
    SlideLeft,
    /// Push from left to right.
    SlideRight,
    /// Push from bottom to top.
    SlideUp,
    /// Push from top to bottom.
    SlideDown,
    /// Rotate while fading.
    RotateFade,
    /// Scale and rotate with dimming.
    ScaleRotate,
}

impl EffectId {
    /// Every effect, in catalog order.
    pub const ALL: [EffectId; 12] = [
        Self::Fade,
        Self::Crossfade,
        Self::ZoomOut,
        Self::ZoomOutFade,
        Self::ZoomCrossfade,
        Self::ZoomIn,
        Self::SlideLeft,
        Self::SlideRight,
        Self::SlideUp,
        Self::SlideDown,
        Self::RotateFade,
        Self::ScaleRotate,
    ];

    /// Canonical kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Crossfade => "crossfade",
            Self::ZoomOut => "zoom-out",
            Self::ZoomOutFade => "zoom-out-fade",
            Self::ZoomCrossfade => "zoom-crossfade",
            Self::ZoomIn => "zoom-in",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::SlideUp => "slide-up",
            Self::SlideDown => "slide-down",
            Self::RotateFade => "rotate-fade",
            Self::ScaleRotate => "scale-rotate",
        }
    }

    /// Human-readable name, e.g. `"Zoom out fade"`.
    pub fn display_name(self) -> String {
        let words = self.as_str().replace('-', " ");
        let mut chars = words.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Short description shown in effect listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fade => "Smooth fade with a subtle zoom",
            Self::Crossfade => "Soft dissolve between images (opacity)",
            Self::ZoomOut => "Each image starts at 120% zoom and settles to 100%",
            Self::ZoomOutFade => "Zoom-out (120%\u{2192}100%) + fade on transition",
            Self::ZoomCrossfade => "Zoom-out (120%\u{2192}100%) + crossfade on transition",
            Self::ZoomIn => "Zoom in from 80% to 100% with fade",
            Self::SlideLeft => "Slides from right to left",
            Self::SlideRight => "Slides from left to right",
            Self::SlideUp => "Slides from bottom to top",
            Self::SlideDown => "Slides from top to bottom",
            Self::RotateFade => "Rotation with fade and scale",
            Self::ScaleRotate => "Scale with rotation and brightness change",
        }
    }

    /// Effects whose current image runs the 120%→100% entrance zoom.
    pub fn is_zoom_family(self) -> bool {
        matches!(
            self,
            Self::ZoomOut | Self::ZoomOutFade | Self::ZoomCrossfade
        )
    }

    /// Parse an effect identifier; surrounding whitespace and ASCII case are ignored.
    pub fn parse(s: &str) -> SlideshowResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Err(SlideshowError::configuration("effect id must be non-empty"));
        }
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| {
                SlideshowError::configuration(format!(
                    "unknown effect '{wanted}'; accepted values: {}",
                    accepted_ids()
                ))
            })
    }
}

impl FromStr for EffectId {
    type Err = SlideshowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EffectId {
    type Error = SlideshowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn accepted_ids() -> String {
    EffectId::ALL
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row of the effect listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EffectInfo {
    /// Canonical identifier.
    pub id: EffectId,
    /// Human-readable name.
    pub name: String,
    /// Short description.
    pub description: &'static str,
}

/// Listing of every supported effect, in catalog order.
pub fn effect_catalog() -> Vec<EffectInfo> {
    EffectId::ALL
        .into_iter()
        .map(|id| EffectInfo {
            id,
            name: id.display_name(),
            description: id.description(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/config/effect.rs"]
mod tests;
