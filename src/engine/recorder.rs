//! WAV file recorder
//!
//! Writes 32-bit float WAV files. Mono for rendered audio, or one
//! channel per modulation output when capturing the raw LFO channels.

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// WAV file recorder
pub struct Recorder {
    writer: WavWriter<BufWriter<File>>,
    sample_rate: u32,
    channels: u16,
    frames_written: u64,
}

impl Recorder {
    /// Create a mono recorder
    pub fn new(path: &Path, sample_rate: u32) -> Result<Self> {
        Self::with_channels(path, sample_rate, 1)
    }

    /// Create a recorder with an arbitrary channel count
    pub fn with_channels(path: &Path, sample_rate: u32, channels: u16) -> Result<Self> {
        if channels == 0 {
            bail!("WAV file needs at least one channel");
        }

        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };

        let writer = WavWriter::create(path, spec)
            .with_context(|| format!("failed to create WAV file: {:?}", path))?;

        Ok(Self {
            writer,
            sample_rate,
            channels,
            frames_written: 0,
        })
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of frames written
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Get the duration recorded in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames_written as f64 / f64::from(self.sample_rate)
    }

    /// Write one frame, one sample per channel
    pub fn write_frame(&mut self, frame: &[f32]) -> Result<()> {
        if frame.len() != usize::from(self.channels) {
            bail!(
                "frame has {} samples, file has {} channels",
                frame.len(),
                self.channels
            );
        }
        for &sample in frame {
            self.writer
                .write_sample(sample)
                .context("failed to write sample")?;
        }
        self.frames_written += 1;
        Ok(())
    }

    /// Write a buffer of mono samples
    pub fn write_buffer(&mut self, buffer: &[f32]) -> Result<()> {
        if self.channels != 1 {
            bail!("write_buffer is mono-only; use write_frame");
        }
        for &sample in buffer {
            self.writer
                .write_sample(sample)
                .context("failed to write sample")?;
        }
        self.frames_written += buffer.len() as u64;
        Ok(())
    }

    /// Finalize the WAV file
    ///
    /// This must be called to properly close the file and write the header.
    pub fn finalize(self) -> Result<()> {
        self.writer.finalize().context("failed to finalize WAV file")
    }
}
