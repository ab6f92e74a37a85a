//! Per-image visual parameters and the transition effect table.

pub(crate) mod params;
pub(crate) mod registry;
