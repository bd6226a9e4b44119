//! Nonlinear diode-clipper stage with smoothed parameter control.

use core::f64::consts::PI;

use cascada_wdf::{Capacitor, DiodePair, ParallelAdaptor, ResistiveVoltageSource, SmoothedParam,
    WdfLeaf};

use crate::filter::clamp_cutoff;

/// Clipper capacitance (F).
const CLIPPER_C: f64 = 47.0e-9;

/// Smoothing time constant for cutoff and diode-count ramps (ms).
const SMOOTHING_MS: f64 = 10.0;

/// Default cutoff applied on prepare (Hz).
const DEFAULT_CUTOFF_HZ: f64 = 500.0;

/// Default diode saturation current (A), a 1N4148-class silicon diode.
const DEFAULT_SATURATION_CURRENT: f64 = 2.52e-9;

/// Default number of series diodes per leg.
const DEFAULT_N_DIODES: f64 = 2.0;

/// Diode clipper: a one-pole RC input stage loaded by an anti-parallel
/// diode pair.
///
/// ```text
///      DiodePair (root)
///           |
///     ParallelAdaptor
///      /           \
/// Capacitor   ResistiveVoltageSource
/// ```
///
/// The source's series resistance is tuned from the cutoff frequency, so
/// the linear part of the circuit is a low-pass whose output the diodes
/// clamp. Cutoff and diode count ride 10 ms exponential ramps so control
/// changes interleaved with the sample stream stay click-free; the
/// saturation current applies immediately. With any ramp active the
/// transfer function is slightly time-varying, and the diode element makes
/// it nonlinear at every sample.
#[derive(Debug, Clone)]
pub struct DiodeClipper {
    vs: ResistiveVoltageSource,
    c: Capacitor,
    par: ParallelAdaptor,
    diodes: DiodePair,
    cutoff: SmoothedParam,
    n_diodes: SmoothedParam,
    saturation_current: f64,
    sample_rate: f64,
}

impl DiodeClipper {
    pub fn new() -> Self {
        let sample_rate = 48000.0;
        let vs = ResistiveVoltageSource::new(resistance_for(DEFAULT_CUTOFF_HZ));
        let c = Capacitor::new(CLIPPER_C, sample_rate);
        let par = ParallelAdaptor::new(c.port_resistance(), vs.port_resistance());
        Self {
            vs,
            c,
            par,
            diodes: DiodePair::new(DEFAULT_SATURATION_CURRENT, DEFAULT_N_DIODES),
            cutoff: SmoothedParam::with_config(DEFAULT_CUTOFF_HZ, sample_rate, SMOOTHING_MS),
            n_diodes: SmoothedParam::with_config(DEFAULT_N_DIODES, sample_rate, SMOOTHING_MS),
            saturation_current: DEFAULT_SATURATION_CURRENT,
            sample_rate,
        }
    }

    /// Store the sample rate, retune the capacitor, and arm both ramps at
    /// their defaults.
    pub fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.c.set_sample_rate(sample_rate); // capacitor needs fs

        self.cutoff = SmoothedParam::with_config(DEFAULT_CUTOFF_HZ, sample_rate, SMOOTHING_MS);
        self.n_diodes = SmoothedParam::with_config(DEFAULT_N_DIODES, sample_rate, SMOOTHING_MS);
        self.update_resistance(DEFAULT_CUTOFF_HZ);
        self.diodes
            .set_parameters(self.saturation_current, DEFAULT_N_DIODES);
    }

    /// Retarget the clipper's controls.
    ///
    /// The cutoff is clamped to the Nyquist-safe range. With `force_now`
    /// both ramps jump instantly (one-shot/offline use); otherwise they
    /// glide over the smoothing time. The saturation current is applied
    /// immediately either way: only cutoff and diode count are
    /// perceptually sensitive enough to need smoothing.
    pub fn set_parameters(
        &mut self,
        cutoff_hz: f64,
        saturation_current: f64,
        n_diodes: f64,
        force_now: bool,
    ) {
        let cutoff_hz = clamp_cutoff(cutoff_hz, self.sample_rate);

        if force_now {
            self.cutoff.set_immediate(cutoff_hz);
            self.n_diodes.set_immediate(n_diodes);
            self.update_resistance(cutoff_hz);
        } else {
            self.cutoff.set_target(cutoff_hz);
            self.n_diodes.set_target(n_diodes);
        }

        self.saturation_current = saturation_current;
        self.diodes
            .set_parameters(saturation_current, self.n_diodes.get());
    }

    /// Current (possibly mid-ramp) cutoff in Hz.
    pub fn cutoff(&self) -> f64 {
        self.cutoff.get()
    }

    /// Process one sample: advance the ramps, retune whatever moved, then
    /// run a single scatter exchange against the diode pair and return the
    /// capacitor voltage.
    #[inline]
    pub fn process_sample(&mut self, x: f64) -> f64 {
        if !self.cutoff.is_settled() {
            let fc = self.cutoff.advance();
            self.update_resistance(fc);
        }
        if !self.n_diodes.is_settled() {
            let n = self.n_diodes.advance();
            self.diodes.set_parameters(self.saturation_current, n);
        }

        self.vs.set_voltage(x);

        let b_c = self.c.reflected();
        let b_vs = self.vs.reflected();
        let b_up = self.par.scatter_up(b_c, b_vs);

        let a_down = self.diodes.process(b_up, self.par.port_resistance());

        let (a_c, a_vs) = self.par.scatter_down(a_down);
        self.c.set_incident(a_c);
        self.vs.set_incident(a_vs);

        (a_c + b_c) / 2.0 // output across the cap
    }

    /// Clear the capacitor memory without touching the tuning.
    pub fn reset(&mut self) {
        self.c.reset();
        self.par.reset();
    }

    fn update_resistance(&mut self, cutoff_hz: f64) {
        self.vs.set_resistance(resistance_for(cutoff_hz));
        self.par
            .update_ports(self.c.port_resistance(), self.vs.port_resistance());
    }
}

/// `R = 1 / (2 pi fc C)` for the clipper capacitance.
fn resistance_for(cutoff_hz: f64) -> f64 {
    1.0 / (2.0 * PI * cutoff_hz * CLIPPER_C)
}

impl Default for DiodeClipper {
    fn default() -> Self {
        Self::new()
    }
}
