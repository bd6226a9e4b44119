//! Parameter smoothing for click-free runtime retuning.
//!
//! Component values derived from control parameters (cutoff, diode count)
//! cannot jump between samples without audible discontinuities. Each
//! smoothed parameter owns its own ramp state: a current value advancing
//! exponentially toward a target, one step per processed sample.

use libm::exp;

/// A parameter with built-in exponential smoothing.
///
/// One-pole lowpass toward the target: `y[n] = y[n-1] + coeff * (target - y[n-1])`
/// with `coeff = 1 - exp(-1 / (tau * sample_rate))` and `tau` the smoothing
/// time constant. A zero smoothing time degenerates to instant changes.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedParam {
    /// Current smoothed value
    current: f64,
    /// Target value we're smoothing towards
    target: f64,
    /// Smoothing coefficient (1 = instant, ~0 = very slow)
    coeff: f64,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Smoothing time in milliseconds
    smoothing_time_ms: f64,
}

impl SmoothedParam {
    /// Create a smoothed parameter. Smoothing is inactive until both a
    /// sample rate and a smoothing time are configured.
    pub fn new(initial: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            coeff: 1.0,
            sample_rate: 44100.0,
            smoothing_time_ms: 0.0,
        }
    }

    /// Create with full configuration.
    pub fn with_config(initial: f64, sample_rate: f64, smoothing_time_ms: f64) -> Self {
        let mut param = Self::new(initial);
        param.sample_rate = sample_rate;
        param.smoothing_time_ms = smoothing_time_ms;
        param.recalculate_coeff();
        param
    }

    /// Set the target value (the parameter will smooth towards it).
    #[inline]
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Set target and snap to it immediately (no smoothing).
    #[inline]
    pub fn set_immediate(&mut self, value: f64) {
        self.target = value;
        self.current = value;
    }

    /// Update sample rate and recalculate the smoothing coefficient.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.recalculate_coeff();
    }

    /// Set the smoothing time constant in milliseconds.
    pub fn set_smoothing_time_ms(&mut self, time_ms: f64) {
        self.smoothing_time_ms = time_ms;
        self.recalculate_coeff();
    }

    /// Advance the ramp by one sample and return the new value.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        self.current += self.coeff * (self.target - self.current);
        self.current
    }

    /// Current value without advancing.
    #[inline]
    pub fn get(&self) -> f64 {
        self.current
    }

    /// Target value.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the ramp has effectively reached its target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < 1e-9
    }

    /// Jump to the target immediately.
    #[inline]
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    fn recalculate_coeff(&mut self) {
        if self.smoothing_time_ms <= 0.0 || self.sample_rate <= 0.0 {
            self.coeff = 1.0; // Instant (no smoothing)
        } else {
            let time_constant = self.smoothing_time_ms / 1000.0;
            let samples = time_constant * self.sample_rate;
            self.coeff = 1.0 - exp(-1.0 / samples);
        }
    }
}

impl Default for SmoothedParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}
