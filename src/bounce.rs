//! Offline rendering of WAV files through the resonant lowpass
//!
//! One filter instance runs per channel. Audio is pushed through in fixed
//! size blocks, the same way a host's render callback would feed it.

use crate::filters::{ResonantLowpassConfig, ResonantLowpassFilter};
use anyhow::{bail, Context, Result};
use std::path::Path;

pub const DEFAULT_BLOCK_SIZE: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct BounceSettings {
    pub cutoff_hz: f64,
    pub resonance_db: f64,
    /// Frames per processing block
    pub block_size: usize,
}

impl Default for BounceSettings {
    fn default() -> Self {
        let config = ResonantLowpassConfig::default();
        Self {
            cutoff_hz: config.cutoff_hz,
            resonance_db: config.resonance_db,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Filter interleaved audio in place, one filter per channel.
///
/// `filters.len()` is the channel count and `interleaved` must hold whole
/// frames. Each channel is de-interleaved into `scratch` so the filters see
/// contiguous blocks; a buffer longer than `scratch` is handled in
/// `scratch.len()` frame pieces.
pub fn render(
    filters: &mut [ResonantLowpassFilter],
    interleaved: &mut [f32],
    scratch: &mut [f32],
) -> Result<()> {
    let channels = filters.len();
    if channels == 0 || interleaved.is_empty() {
        return Ok(());
    }
    if interleaved.len() % channels != 0 {
        bail!(
            "{} samples is not a whole number of {}-channel frames",
            interleaved.len(),
            channels
        );
    }
    if scratch.is_empty() {
        bail!("Scratch buffer must hold at least one frame");
    }

    for piece in interleaved.chunks_mut(scratch.len() * channels) {
        let frames = piece.len() / channels;
        let scratch = &mut scratch[..frames];

        for (channel, filter) in filters.iter_mut().enumerate() {
            for (frame, slot) in scratch.iter_mut().enumerate() {
                *slot = piece[frame * channels + channel];
            }
            filter.process_in_place(scratch);
            for (frame, sample) in scratch.iter().enumerate() {
                piece[frame * channels + channel] = *sample;
            }
        }
    }
    Ok(())
}

fn read_samples<R: std::io::Read>(reader: hound::WavReader<R>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read float samples")?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                bail!("Unsupported bit depth {}", spec.bits_per_sample);
            }
            let scale = 1.0 / (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read integer samples")?
        }
    };
    Ok(samples)
}

/// Render `input` through the filter and write a 32-bit float WAV to `output`.
pub fn bounce_file(input: &Path, output: &Path, settings: &BounceSettings) -> Result<()> {
    if settings.block_size == 0 {
        bail!("Block size must be at least one frame");
    }

    let reader = hound::WavReader::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let in_spec = reader.spec();
    let channels = usize::from(in_spec.channels);
    if channels == 0 {
        bail!("{} has no channels", input.display());
    }

    let mut samples = read_samples(reader)?;
    let trailing = samples.len() % channels;
    if trailing != 0 {
        log::warn!(
            "{} ends with a partial frame, dropping {} samples",
            input.display(),
            trailing
        );
        samples.truncate(samples.len() - trailing);
    }
    log::info!(
        "Bouncing {} ({} Hz, {} ch, {} frames) at cutoff {} Hz, resonance {} dB",
        input.display(),
        in_spec.sample_rate,
        channels,
        samples.len() / channels,
        settings.cutoff_hz,
        settings.resonance_db
    );

    let config = ResonantLowpassConfig::new(
        f64::from(in_spec.sample_rate),
        settings.cutoff_hz,
        settings.resonance_db,
    );
    let mut filters: Vec<ResonantLowpassFilter> = (0..channels)
        .map(|_| ResonantLowpassFilter::with_config(config))
        .collect();

    let mut scratch = vec![0.0; settings.block_size];
    for block in samples.chunks_mut(settings.block_size * channels) {
        render(&mut filters, block, &mut scratch)?;
    }

    let out_spec = hound::WavSpec {
        channels: in_spec.channels,
        sample_rate: in_spec.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(output, out_spec)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    for sample in &samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize().context("Failed to finalize output WAV")?;

    log::info!("Wrote {}", output.display());
    Ok(())
}
