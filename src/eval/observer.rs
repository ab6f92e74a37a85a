use crate::{config::effect::EffectId, eval::compositor::FrameParams};

/// Hook invoked after every evaluated frame.
///
/// Observers see the result but cannot influence it; evaluation stays a pure function of
/// `(frame, config)`. Frames may be evaluated concurrently and in any order.
pub trait FrameObserver: Send + Sync {
    /// Called once per evaluated frame.
    fn on_frame(&self, effect: EffectId, params: &FrameParams);
}

/// Observer that emits one `trace`-level event per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl FrameObserver for TracingObserver {
    fn on_frame(&self, effect: EffectId, params: &FrameParams) {
        tracing::trace!(
            frame = params.frame.0,
            effect = effect.as_str(),
            current = params.phase.current_index,
            in_transition = params.phase.in_transition,
            progress = params.phase.linear_progress,
            eased = params.eased_progress,
            "frame evaluated"
        );
    }
}
