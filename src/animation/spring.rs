use crate::foundation::core::Fps;

/// Physical constants of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring stiffness `k`.
    pub stiffness: f64,
    /// Mass `m`.
    pub mass: f64,
}

impl SpringConfig {
    /// The spring every slideshow transition is eased with.
    pub const TRANSITION: SpringConfig = SpringConfig {
        damping: 100.0,
        stiffness: 200.0,
        mass: 0.1,
    };

    /// Damping ratio `ζ = c / (2·√(k·m))`.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency `ω₀ = √(k/m)`.
    pub fn natural_frequency(self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

/// How the spring curve is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringFidelity {
    /// Frame-stepped integration, identical to the reference renderer output.
    #[default]
    Reference,
    /// Single closed-form evaluation, ignoring the integrator step cap (relaxed fidelity).
    Analytic,
}

// Longest step the integrator takes, in milliseconds.
const MAX_STEP_MS: f64 = 64.0;

#[derive(Clone, Copy, Debug)]
struct SpringState {
    current: f64,
    velocity: f64,
    last_ms: f64,
}

impl SpringState {
    const AT_REST: SpringState = SpringState {
        current: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };
}

/// Advance the oscillator from `state` to `now_ms`, moving towards 1.
fn advance(state: SpringState, now_ms: f64, cfg: SpringConfig) -> SpringState {
    let dt_ms = (now_ms - state.last_ms).min(MAX_STEP_MS);
    let v0 = -state.velocity;
    let x0 = 1.0 - state.current;
    let zeta = cfg.damping_ratio();
    let omega0 = cfg.natural_frequency();
    let t = dt_ms / 1000.0;

    let (current, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let sin1 = (omega1 * t).sin();
        let cos1 = (omega1 * t).cos();
        let envelope = (-zeta * omega0 * t).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        let velocity = zeta * omega0 * frag
            - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (1.0 - frag, velocity)
    } else {
        // ζ >= 1 uses the critically damped solution.
        let envelope = (-omega0 * t).exp();
        let current = 1.0 - envelope * (x0 + (v0 + omega0 * x0) * t);
        let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
        (current, velocity)
    };

    SpringState {
        current,
        velocity,
        last_ms: now_ms,
    }
}

/// Sample the spring released from rest at frame 0, at (possibly fractional) `frame`.
///
/// The oscillator is stepped once per whole frame, then once more to the fractional remainder.
pub fn spring_at_frame(frame: f64, fps: Fps, cfg: SpringConfig) -> f64 {
    let frame = frame.max(0.0);
    let whole = frame.floor();
    let rest = frame - whole;
    let fps = fps.as_f64();

    let mut state = SpringState::AT_REST;
    let last = whole as u64;
    for f in 0..=last {
        let mut at = f as f64;
        if f == last {
            at += rest;
        }
        state = advance(state, (at / fps) * 1000.0, cfg);
    }
    state.current
}

/// Closed-form response of the oscillator released from rest, `t_secs` after release.
///
/// Uses the same model as the stepped integrator: the under-damped solution when `ζ < 1` and the
/// critically damped solution otherwise. It only differs from [`spring_at_frame`] when frames
/// are longer than the 64 ms step cap.
pub fn spring_closed_form(t_secs: f64, cfg: SpringConfig) -> f64 {
    let t = t_secs.max(0.0);
    let zeta = cfg.damping_ratio();
    let omega0 = cfg.natural_frequency();

    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        1.0 - envelope * ((omega1 * t).cos() + (zeta * omega0 / omega1) * (omega1 * t).sin())
    } else {
        1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
    }
}

/// Convert linear transition progress into eased progress.
///
/// `linear_progress` is mapped to elapsed transition time
/// (`linear_progress * transition_secs`). The result is nominally in `[0, 1]` and is not
/// clamped here.
pub fn eased_progress(
    linear_progress: f64,
    transition_secs: f64,
    fps: Fps,
    fidelity: SpringFidelity,
) -> f64 {
    let cfg = SpringConfig::TRANSITION;
    match fidelity {
        SpringFidelity::Reference => {
            let frame = linear_progress * transition_secs * fps.as_f64();
            spring_at_frame(frame, fps, cfg)
        }
        SpringFidelity::Analytic => spring_closed_form(linear_progress * transition_secs, cfg),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
