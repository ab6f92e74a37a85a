//! Easing curves that drive transition motion.

pub(crate) mod spring;
pub(crate) mod zoom;
