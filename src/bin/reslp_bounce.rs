//! Render a WAV file through the resonant lowpass.
//!
//! reslp-bounce input.wav output.wav --cutoff 800 --resonance 6

use clap::Parser;
use reslp::bounce::{bounce_file, BounceSettings, DEFAULT_BLOCK_SIZE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reslp-bounce", about = "Filter a WAV file through the resonant lowpass")]
struct Args {
    /// Source WAV file
    input: PathBuf,

    /// Destination WAV file (written as 32-bit float)
    output: PathBuf,

    /// Cutoff frequency in Hz
    #[arg(short, long, default_value_t = 1000.0)]
    cutoff: f64,

    /// Resonance in dB (clamped to -20..20)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    resonance: f64,

    /// Frames per processing block
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

fn main() -> anyhow::Result<()> {
    reslp::utils::init_logger();

    let args = Args::parse();
    let settings = BounceSettings {
        cutoff_hz: args.cutoff,
        resonance_db: args.resonance,
        block_size: args.block_size,
    };

    bounce_file(&args.input, &args.output, &settings)
}
