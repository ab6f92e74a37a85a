use crate::foundation::core::{Affine, Canvas, Vec2};

/// Part an image plays on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The image whose segment contains the frame.
    Current,
    /// The successor of the current image, while a transition is running.
    Next,
    /// Any other image.
    Inactive,
}

/// Visual state of one image on one frame, consumed by the render host.
///
/// Brightness is a pixel-value multiplier; every other channel is a geometric transform applied
/// about the canvas centre (see [`RenderParams::to_affine`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderParams {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal offset, percent of canvas width.
    pub translate_x_percent: f64,
    /// Vertical offset, percent of canvas height.
    pub translate_y_percent: f64,
    /// Additional horizontal offset in unscaled image pixels.
    pub translate_x_px: f64,
    /// Clockwise rotation in degrees.
    pub rotation_degrees: f64,
    /// Brightness multiplier, `>= 0`.
    pub brightness: f64,
}

impl RenderParams {
    /// Fully visible, untransformed image.
    pub const IDENTITY: RenderParams = RenderParams {
        opacity: 1.0,
        scale: 1.0,
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
        translate_x_px: 0.0,
        rotation_degrees: 0.0,
        brightness: 1.0,
    };

    /// Hidden state shared by every inactive image, whatever the effect.
    pub const INACTIVE: RenderParams = RenderParams {
        opacity: 0.0,
        scale: 0.8,
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
        translate_x_px: 0.0,
        rotation_degrees: 0.0,
        brightness: 0.5,
    };

    /// `true` when the image contributes nothing to the frame and can be skipped.
    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Image-space to canvas-space transform for an image filling `canvas`.
    ///
    /// Canonical order: `T(offset) * T(centre) * R(rotation) * S(scale) * T(px) * T(-centre)`.
    /// The pixel offset sits inside the scale, so it moves the image by `scale * px`.
    pub fn to_affine(&self, canvas: Canvas) -> Affine {
        let center = canvas.center().to_vec2();
        let offset = Vec2::new(
            self.translate_x_percent / 100.0 * f64::from(canvas.width),
            self.translate_y_percent / 100.0 * f64::from(canvas.height),
        );
        Affine::translate(offset)
            * Affine::translate(center)
            * Affine::rotate(self.rotation_degrees.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(Vec2::new(self.translate_x_px, 0.0))
            * Affine::translate(-center)
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/params.rs"]
mod tests;
