use rayon::prelude::*;

use crate::{
    encode::sink::{ParamsSink, SinkConfig},
    eval::compositor::{FrameParams, Slideshow},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{SlideshowError, SlideshowResult},
};

/// How a frame range is evaluated.
///
/// Serial and parallel evaluation produce identical frames; parallel mode only changes how the
/// work is scheduled. Frames always reach sinks in timeline order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalThreading {
    /// Evaluate chunks on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker thread count override (parallel mode only).
    pub threads: Option<usize>,
    /// Frames evaluated per parallel batch.
    pub chunk_size: usize,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

impl EvalThreading {
    fn validate(&self) -> SlideshowResult<()> {
        if self.chunk_size == 0 {
            return Err(SlideshowError::configuration(
                "eval threading 'chunk_size' must be >= 1",
            ));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(SlideshowError::configuration(
                "eval threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Counters reported by [`stream_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Batches evaluated (one per frame in serial mode).
    pub chunks: u64,
}

/// Evaluate every frame of `range` and collect the results in order.
pub fn evaluate_range(
    show: &Slideshow,
    range: FrameRange,
    threading: &EvalThreading,
) -> SlideshowResult<Vec<FrameParams>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    drive(show, range, threading, |frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok(out)
}

/// Evaluate `range` and stream each frame to `sink`.
///
/// The sink sees `begin`, then every frame in increasing order, then `end`. Nothing is pushed if
/// the range or threading options are invalid.
#[tracing::instrument(skip(show, threading, sink), fields(start = range.start.0, end = range.end.0, parallel = threading.parallel))]
pub fn stream_range(
    show: &Slideshow,
    range: FrameRange,
    threading: &EvalThreading,
    sink: &mut dyn ParamsSink,
) -> SlideshowResult<RenderStats> {
    check_range(show, range)?;
    threading.validate()?;

    sink.begin(SinkConfig::from_slideshow(show))?;
    let stats = drive(show, range, threading, |frame| sink.push_frame(&frame))?;
    sink.end()?;

    tracing::debug!(frames = stats.frames, chunks = stats.chunks, "range streamed");
    Ok(stats)
}

fn check_range(show: &Slideshow, range: FrameRange) -> SlideshowResult<()> {
    let total = show.total_frames();
    if range.end.0 > total {
        return Err(SlideshowError::out_of_range(range.end.0, total));
    }
    Ok(())
}

fn drive(
    show: &Slideshow,
    range: FrameRange,
    threading: &EvalThreading,
    mut emit: impl FnMut(FrameParams) -> SlideshowResult<()>,
) -> SlideshowResult<RenderStats> {
    check_range(show, range)?;
    threading.validate()?;

    let mut stats = RenderStats::default();
    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            emit(show.render_params(FrameIndex(f))?)?;
            stats.frames += 1;
            stats.chunks += 1;
        }
        return Ok(stats);
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = threading.chunk_size as u64;

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| show.render_params(FrameIndex(f)))
                .collect::<SlideshowResult<Vec<_>>>()
        })?;
        for frame in frames {
            emit(frame)?;
            stats.frames += 1;
        }
        stats.chunks += 1;
        chunk_start = chunk_end;
    }
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> SlideshowResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| {
            SlideshowError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
