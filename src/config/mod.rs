//! Slideshow job configuration.
//!
//! A [`SlideshowConfig`](model::SlideshowConfig) is built once per render job, validated, and
//! never mutated afterwards.

pub(crate) mod builder;
pub(crate) mod effect;
pub(crate) mod model;
