//! Frame-to-segment mapping.

pub(crate) mod segmenter;
