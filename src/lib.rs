//! Resonant lowpass filter for real-time audio graphs
//!
//! A single-channel, two-pole lowpass with cutoff (Hz) and resonance (dB)
//! control. Processing is allocation free and keeps its history across
//! blocks, so it can sit directly in a render callback.

pub mod ffi;
pub mod filters;
pub mod utils;

#[cfg(feature = "bounce")]
pub mod bounce;

pub use filters::{Coefficients, ResonantLowpassConfig, ResonantLowpassFilter};
