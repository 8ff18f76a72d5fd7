use std::f64::consts::PI;

/// Lowest cutoff accepted by `set_params`, in Hz.
pub const MIN_CUTOFF_HZ: f64 = 12.0;
/// Resonance range accepted by `set_params`, in dB.
pub const MIN_RESONANCE_DB: f64 = -20.0;
pub const MAX_RESONANCE_DB: f64 = 20.0;
/// Ceiling on the normalized cutoff (1.0 = Nyquist).
pub const MAX_NORMALIZED_CUTOFF: f64 = 0.99;
/// Sample rate assumed until `init` is called with the real one.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 44100.0;

/// Recursion weights for the two-pole lowpass.
///
/// `y[n] = a0*x[n] + a1*x[n-1] + a2*x[n-2] - b1*y[n-1] - b2*y[n-2]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
}

impl Coefficients {
    /// Derive lowpass coefficients for a cutoff (Hz) and resonance (dB).
    ///
    /// Inputs are clamped the same way `ResonantLowpassFilter::set_params`
    /// clamps them. Resonance is negated before the dB to linear conversion,
    /// so a higher `resonance_db` gives a smaller linear multiplier.
    pub fn lowpass(sample_rate_hz: f64, cutoff_hz: f64, resonance_db: f64) -> Self {
        let cutoff_hz = cutoff_hz.max(MIN_CUTOFF_HZ);
        let resonance_db = resonance_db.clamp(MIN_RESONANCE_DB, MAX_RESONANCE_DB);

        // Hz -> 0..1 normalized frequency, kept just under Nyquist
        let cutoff = (2.0 * cutoff_hz / sample_rate_hz).min(MAX_NORMALIZED_CUTOFF);

        let r = 10.0_f64.powf(0.05 * -resonance_db);

        let k = 0.5 * r * (PI * cutoff).sin();
        let c1 = 0.5 * (1.0 - k) / (1.0 + k);
        let c2 = (0.5 + c1) * (PI * cutoff).cos();
        let c3 = (0.5 + c1 - c2) * 0.25;

        Self {
            a0: 2.0 * c3,
            a1: 4.0 * c3,
            a2: 2.0 * c3,
            b1: -2.0 * c2,
            b2: 2.0 * c1,
        }
    }
}

/// Construction-time settings for a `ResonantLowpassFilter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonantLowpassConfig {
    pub sample_rate_hz: f64,
    pub cutoff_hz: f64,
    pub resonance_db: f64,
}

impl ResonantLowpassConfig {
    pub fn new(sample_rate_hz: f64, cutoff_hz: f64, resonance_db: f64) -> Self {
        Self {
            sample_rate_hz,
            cutoff_hz,
            resonance_db,
        }
    }
}

impl Default for ResonantLowpassConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ, 1000.0, 0.0)
    }
}

/// Single-channel resonant lowpass filter.
///
/// Second order IIR with cutoff and resonance control, meant to run on the
/// audio thread: `set_params` and `process` never allocate, lock or log.
/// Use one instance per channel.
#[derive(Debug, Clone)]
pub struct ResonantLowpassFilter {
    sample_rate_hz: f64,

    // Raw (pre-clamp) parameters of the last recompute; None until the first
    // set_params after init.
    last_params: Option<(f64, f64)>,

    // Delay line
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,

    coeffs: Coefficients,
}

impl ResonantLowpassFilter {
    /// Create a filter for the given sample rate.
    ///
    /// Coefficients stay at zero (silent output) until `set_params` is called.
    pub fn new(sample_rate_hz: f64) -> Self {
        let mut filter = Self {
            sample_rate_hz,
            last_params: None,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            coeffs: Coefficients::default(),
        };
        filter.init(sample_rate_hz);
        filter
    }

    /// Create a filter and apply cutoff/resonance from `config`.
    pub fn with_config(config: ResonantLowpassConfig) -> Self {
        let mut filter = Self::new(config.sample_rate_hz);
        filter.set_params(config.cutoff_hz, config.resonance_db);
        filter
    }

    /// (Re)initialize for a sample rate.
    ///
    /// Clears the delay line and forces the next `set_params` to recompute
    /// coefficients, even if it repeats the previous values.
    pub fn init(&mut self, sample_rate_hz: f64) {
        log::trace!("resonant lowpass init at {} Hz", sample_rate_hz);
        self.sample_rate_hz = sample_rate_hz;
        self.reset();
        self.last_params = None;
    }

    /// Clear the delay line, keeping coefficients and sample rate.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Set cutoff (Hz) and resonance (dB).
    ///
    /// Repeating the exact previous raw values is a no-op. Otherwise the
    /// cutoff is floored at `MIN_CUTOFF_HZ`, resonance is clamped to
    /// `MIN_RESONANCE_DB..=MAX_RESONANCE_DB`, and all five coefficients are
    /// replaced at once. The delay line is left alone.
    #[inline]
    pub fn set_params(&mut self, cutoff_hz: f64, resonance_db: f64) {
        if let Some((last_cutoff, last_resonance)) = self.last_params {
            if last_cutoff.to_bits() == cutoff_hz.to_bits()
                && last_resonance.to_bits() == resonance_db.to_bits()
            {
                return;
            }
        }

        self.last_params = Some((cutoff_hz, resonance_db));
        self.coeffs = Coefficients::lowpass(self.sample_rate_hz, cutoff_hz, resonance_db);
    }

    /// Process a single sample through the filter.
    ///
    /// A NaN result is replaced with 0.0 before it reaches the delay line.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let x = f64::from(input);
        let mut output =
            (c.a0 * x + c.a1 * self.x1 + c.a2 * self.x2 - c.b1 * self.y1 - c.b2 * self.y2) as f32;
        if output.is_nan() {
            output = 0.0;
        }

        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = f64::from(output);

        output
    }

    /// Filter `source` into `dest`.
    ///
    /// Processes `min(source.len(), dest.len())` frames. State carries over
    /// between calls, so consecutive blocks of one stream filter seamlessly.
    pub fn process_block(&mut self, source: &[f32], dest: &mut [f32]) {
        for (input, output) in source.iter().zip(dest.iter_mut()) {
            *output = self.process(*input);
        }
    }

    /// Filter `buffer` in place.
    pub fn process_in_place(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate_hz
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coeffs
    }

    /// True once `set_params` has run since the last `init`.
    pub fn has_coefficients(&self) -> bool {
        self.last_params.is_some()
    }
}

impl Default for ResonantLowpassFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}
