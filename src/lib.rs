//! Timeline and transition engine for photo slideshows.
//!
//! Given a [`SlideshowConfig`] (1 to 5 images, durations, one transition effect, audio levels),
//! the engine answers one question per output frame: which image is current, which is entering,
//! and with what opacity, scale, translation, rotation and brightness each image is drawn.
//!
//! - Load and validate a config into a [`Slideshow`]
//! - Query single frames with [`Slideshow::render_params`]
//! - Evaluate or stream a range with [`evaluate_range`] / [`stream_range`] into a [`ParamsSink`]
//!
//! Per-frame evaluation is pure: the result depends only on the frame index and the config.
//! Pixels, decoding and encoding belong to the render host.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod effects;
/// Frame parameter sinks.
pub mod encode;
pub(crate) mod eval;
/// Range evaluation and job summaries.
pub mod render;
pub(crate) mod timeline;
/// Scalar interpolation helpers.
pub mod transform;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{SlideshowError, SlideshowResult};

pub use crate::animation::spring::{
    SpringConfig, SpringFidelity, eased_progress, spring_at_frame, spring_closed_form,
};
pub use crate::animation::zoom::{ZOOM_END_SCALE, ZOOM_START_SCALE, zoom_decay_scale};
pub use crate::config::builder::SlideshowBuilder;
pub use crate::config::effect::{EffectId, EffectInfo, effect_catalog};
pub use crate::config::model::{
    IMAGE_DURATION_RANGE, MAX_IMAGES, MIN_IMAGES, SlideshowConfig, TRANSITION_DURATION_RANGE,
};
pub use crate::effects::params::{RenderParams, Role};
pub use crate::effects::registry::{evaluate as evaluate_effect, steady as steady_params};
pub use crate::encode::jsonl::JsonLinesSink;
pub use crate::encode::sink::{AudioTrack, InMemorySink, ParamsSink, SinkConfig};
pub use crate::eval::compositor::{AudioParams, FrameParams, Slideshow, compute_render_params};
pub use crate::eval::observer::{FrameObserver, TracingObserver};
pub use crate::render::pipeline::{EvalThreading, RenderStats, evaluate_range, stream_range};
pub use crate::render::summary::{AudioSummary, JobSummary};
pub use crate::timeline::segmenter::{FramePhase, SegmentTiming, segment_frame};
