//! Per-frame evaluation of the whole slideshow.

pub(crate) mod compositor;
pub(crate) mod observer;
