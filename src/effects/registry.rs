//! Table of the twelve transition effects.
//!
//! Each effect is pure data: one [`RoleTrack`] for the outgoing (current) image and one for the
//! incoming (next) image. Every channel of a track is sampled with the eased transition
//! progress, clamped to `[0, 1]`.

use crate::{
    config::effect::EffectId,
    effects::params::{RenderParams, Role},
    transform::linear::lerp,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Channel {
    /// Constant for the whole transition.
    Fixed(f64),
    /// `from → to` over the transition.
    Ramp(f64, f64),
    /// From the entrance zoom scale `z` to `z * end_factor` over the transition.
    Zoom { end_factor: f64 },
}

impl Channel {
    fn sample(self, eased: f64, zoom_scale: f64) -> f64 {
        match self {
            Self::Fixed(v) => v,
            Self::Ramp(from, to) => lerp(from, to, eased),
            Self::Zoom { end_factor } => lerp(zoom_scale, zoom_scale * end_factor, eased),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RoleTrack {
    pub(crate) opacity: Channel,
    pub(crate) scale: Channel,
    pub(crate) translate_x_percent: Channel,
    pub(crate) translate_y_percent: Channel,
    pub(crate) translate_x_px: Channel,
    pub(crate) rotation_degrees: Channel,
    pub(crate) brightness: Channel,
}

impl RoleTrack {
    fn sample(&self, eased: f64, zoom_scale: f64) -> RenderParams {
        RenderParams {
            opacity: self.opacity.sample(eased, zoom_scale).clamp(0.0, 1.0),
            scale: self.scale.sample(eased, zoom_scale),
            translate_x_percent: self.translate_x_percent.sample(eased, zoom_scale),
            translate_y_percent: self.translate_y_percent.sample(eased, zoom_scale),
            translate_x_px: self.translate_x_px.sample(eased, zoom_scale),
            rotation_degrees: self.rotation_degrees.sample(eased, zoom_scale),
            brightness: self.brightness.sample(eased, zoom_scale).max(0.0),
        }
    }
}

const STILL: RoleTrack = RoleTrack {
    opacity: Channel::Fixed(1.0),
    scale: Channel::Fixed(1.0),
    translate_x_percent: Channel::Fixed(0.0),
    translate_y_percent: Channel::Fixed(0.0),
    translate_x_px: Channel::Fixed(0.0),
    rotation_degrees: Channel::Fixed(0.0),
    brightness: Channel::Fixed(1.0),
};

const FADE_OUT: Channel = Channel::Ramp(1.0, 0.0);
const FADE_IN: Channel = Channel::Ramp(0.0, 1.0);
const ZOOM_SETTLE: Channel = Channel::Zoom { end_factor: 1.0 };

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EffectSpec {
    pub(crate) current: RoleTrack,
    pub(crate) next: RoleTrack,
}

const FADE: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        scale: Channel::Ramp(1.0, 1.1),
        brightness: Channel::Ramp(1.0, 0.5),
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        scale: Channel::Ramp(0.9, 1.0),
        translate_x_px: Channel::Ramp(50.0, 0.0),
        ..STILL
    },
};

const CROSSFADE: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        ..STILL
    },
};

const ZOOM_OUT: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        scale: ZOOM_SETTLE,
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        scale: Channel::Fixed(1.2),
        ..STILL
    },
};

const ZOOM_OUT_FADE: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        scale: Channel::Zoom { end_factor: 1.1 },
        brightness: Channel::Ramp(1.0, 0.5),
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        scale: Channel::Ramp(0.9, 1.2),
        translate_x_px: Channel::Ramp(50.0, 0.0),
        ..STILL
    },
};

// The outgoing image keeps settling exactly like zoom-out; only the name differs.
const ZOOM_CROSSFADE: EffectSpec = ZOOM_OUT;

const ZOOM_IN: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        scale: Channel::Ramp(0.8, 1.0),
        ..STILL
    },
};

const SLIDE_LEFT: EffectSpec = EffectSpec {
    current: RoleTrack {
        translate_x_percent: Channel::Ramp(0.0, -100.0),
        ..STILL
    },
    next: RoleTrack {
        translate_x_percent: Channel::Ramp(100.0, 0.0),
        ..STILL
    },
};

const SLIDE_RIGHT: EffectSpec = EffectSpec {
    current: RoleTrack {
        translate_x_percent: Channel::Ramp(0.0, 100.0),
        ..STILL
    },
    next: RoleTrack {
        translate_x_percent: Channel::Ramp(-100.0, 0.0),
        ..STILL
    },
};

const SLIDE_UP: EffectSpec = EffectSpec {
    current: RoleTrack {
        translate_y_percent: Channel::Ramp(0.0, -100.0),
        ..STILL
    },
    next: RoleTrack {
        translate_y_percent: Channel::Ramp(100.0, 0.0),
        ..STILL
    },
};

const SLIDE_DOWN: EffectSpec = EffectSpec {
    current: RoleTrack {
        translate_y_percent: Channel::Ramp(0.0, 100.0),
        ..STILL
    },
    next: RoleTrack {
        translate_y_percent: Channel::Ramp(-100.0, 0.0),
        ..STILL
    },
};

const ROTATE_FADE: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        rotation_degrees: Channel::Ramp(0.0, 15.0),
        scale: Channel::Ramp(1.0, 0.9),
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        rotation_degrees: Channel::Ramp(-15.0, 0.0),
        scale: Channel::Ramp(0.9, 1.0),
        ..STILL
    },
};

const SCALE_ROTATE: EffectSpec = EffectSpec {
    current: RoleTrack {
        opacity: FADE_OUT,
        scale: Channel::Ramp(1.0, 1.2),
        rotation_degrees: Channel::Ramp(0.0, -10.0),
        brightness: Channel::Ramp(1.0, 0.7),
        ..STILL
    },
    next: RoleTrack {
        opacity: FADE_IN,
        scale: Channel::Ramp(0.8, 1.0),
        rotation_degrees: Channel::Ramp(10.0, 0.0),
        ..STILL
    },
};

pub(crate) fn effect_spec(effect: EffectId) -> &'static EffectSpec {
    match effect {
        EffectId::Fade => &FADE,
        EffectId::Crossfade => &CROSSFADE,
        EffectId::ZoomOut => &ZOOM_OUT,
        EffectId::ZoomOutFade => &ZOOM_OUT_FADE,
        EffectId::ZoomCrossfade => &ZOOM_CROSSFADE,
        EffectId::ZoomIn => &ZOOM_IN,
        EffectId::SlideLeft => &SLIDE_LEFT,
        EffectId::SlideRight => &SLIDE_RIGHT,
        EffectId::SlideUp => &SLIDE_UP,
        EffectId::SlideDown => &SLIDE_DOWN,
        EffectId::RotateFade => &ROTATE_FADE,
        EffectId::ScaleRotate => &SCALE_ROTATE,
    }
}

/// Parameters of an image in `role` during a transition of `effect`.
///
/// `eased` is the spring-eased transition progress and is clamped to `[0, 1]`. `zoom_scale` is
/// the entrance zoom of the current image; it only matters for zoom-family effects.
pub fn evaluate(effect: EffectId, role: Role, eased: f64, zoom_scale: f64) -> RenderParams {
    let spec = effect_spec(effect);
    match role {
        Role::Current => spec.current.sample(eased, zoom_scale),
        Role::Next => spec.next.sample(eased, zoom_scale),
        Role::Inactive => RenderParams::INACTIVE,
    }
}

/// Parameters of the current image outside transitions.
pub fn steady(effect: EffectId, zoom_scale: f64) -> RenderParams {
    let scale = if effect.is_zoom_family() {
        zoom_scale
    } else {
        1.0
    };
    RenderParams {
        scale,
        ..RenderParams::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
