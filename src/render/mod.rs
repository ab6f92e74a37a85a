//! Range evaluation and job reporting.

/// Serial and chunked-parallel frame evaluation.
pub mod pipeline;
/// Job summary returned to callers before rendering.
pub mod summary;
