use std::io::Write;

use anyhow::Context as _;

use crate::{
    encode::sink::{ParamsSink, SinkConfig},
    eval::compositor::FrameParams,
    foundation::error::{SlideshowError, SlideshowResult},
};

/// Writes a header line with the [`SinkConfig`], then one JSON object per frame.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    lines: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap `out`; nothing is written before `begin`.
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far, header included.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> SlideshowResult<()> {
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| SlideshowError::serde(format!("encode json line: {e}")))?;
        self.out.write_all(b"\n").context("write json line")?;
        self.lines += 1;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Header<'a> {
    header: &'a SinkConfig,
}

impl<W: Write + Send> ParamsSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> SlideshowResult<()> {
        self.write_line(&Header { header: &cfg })
    }

    fn push_frame(&mut self, params: &FrameParams) -> SlideshowResult<()> {
        self.write_line(params)
    }

    fn end(&mut self) -> SlideshowResult<()> {
        self.out.flush().context("flush json lines output")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jsonl.rs"]
mod tests;
