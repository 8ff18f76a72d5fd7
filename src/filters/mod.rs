pub mod resonant_lowpass;

pub use self::resonant_lowpass::{
    Coefficients, ResonantLowpassConfig, ResonantLowpassFilter, DEFAULT_SAMPLE_RATE_HZ,
    MAX_NORMALIZED_CUTOFF, MAX_RESONANCE_DB, MIN_CUTOFF_HZ, MIN_RESONANCE_DB,
};
