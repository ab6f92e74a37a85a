//! Consumers of evaluated frames.
//!
//! Sinks receive frame parameters in timeline order from
//! [`stream_range`](crate::stream_range). Pixel compositing and media encoding happen behind
//! this boundary, in the render host.

/// JSON-lines sink.
pub mod jsonl;
/// Generic sink trait and built-in sinks.
pub mod sink;
