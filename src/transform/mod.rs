//! Scalar interpolation helpers shared by the animation and effect modules.

/// Linear interpolation helpers.
pub mod linear;
/// Clamping and range-mapping helpers.
pub mod non_linear;
