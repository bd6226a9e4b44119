//! First-order RC high-pass stage and its second-order cascade.

use core::f64::consts::PI;

use cascada_wdf::{Capacitor, Resistor, SeriesAdaptor, VoltageSource, WdfLeaf};

use crate::filter::{Filter, FilterKind, FilterOrder, clamp_cutoff};

/// Fixed capacitance of the high-pass family (F).
const HIGHPASS_C: f64 = 1.0e-7;

/// Cascading two identical first-order sections moves the composite
/// -3 dB point away from the per-stage cutoff. This empirical divisor
/// re-aligns the cascade with the nominal cutoff. Calibration value:
/// verify against the frequency-response analyzer before touching it.
const HP_CASCADE_K: f64 = 1.553;

/// First-order RC high-pass: series capacitor into a shunt resistor.
///
/// Same tree as the low-pass with the element roles swapped; the output
/// is taken across the resistor.
#[derive(Debug, Clone)]
pub struct RcHighPass {
    vin: VoltageSource,
    series: SeriesAdaptor,
    c: Capacitor,
    r: Resistor,
    sample_rate: f64,
    cutoff: f64,
}

impl RcHighPass {
    pub fn new() -> Self {
        let sample_rate = 44100.0;
        let cutoff = 1000.0;
        let c = Capacitor::new(HIGHPASS_C, sample_rate);
        let r = Resistor::new(resistance_for(cutoff));
        let series = SeriesAdaptor::new(c.port_resistance(), r.port_resistance());
        Self {
            vin: VoltageSource::new(),
            series,
            c,
            r,
            sample_rate,
            cutoff,
        }
    }

    fn update_components(&mut self) {
        self.r.set_resistance(resistance_for(self.cutoff));
        self.series
            .update_ports(self.c.port_resistance(), self.r.port_resistance());
    }
}

/// `R = 1 / (2 pi fc C)` for the fixed high-pass capacitance.
fn resistance_for(cutoff_hz: f64) -> f64 {
    1.0 / (2.0 * PI * cutoff_hz * HIGHPASS_C)
}

impl Default for RcHighPass {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for RcHighPass {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.c.set_sample_rate(sample_rate); // capacitor needs fs
        // Re-clamping keeps the cutoff legal even when the rate drops
        self.set_cutoff(self.cutoff);
    }

    #[inline]
    fn process_sample(&mut self, x: f64) -> f64 {
        self.vin.set_voltage(x); // drive the source

        let b_c = self.c.reflected();
        let b_r = self.r.reflected();
        let b_up = self.series.scatter_up(b_c, b_r);

        self.vin.set_incident(-b_up);
        let a_down = -self.vin.reflected();

        let (a_c, a_r) = self.series.scatter_down(a_down);
        self.c.set_incident(a_c);
        self.r.set_incident(a_r);

        (a_r + b_r) / 2.0 // output at the resistor
    }

    fn set_cutoff(&mut self, cutoff_hz: f64) {
        self.cutoff = clamp_cutoff(cutoff_hz, self.sample_rate);
        self.update_components();
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::HighPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::First
    }

    fn reset(&mut self) {
        self.c.reset();
        self.series.reset();
    }
}

/// Second-order high-pass: two first-order stages in series.
///
/// Each stage is tuned to `cutoff / HP_CASCADE_K` so the cascade's -3 dB
/// point lands back on the nominal cutoff. The low-pass cascade applies no
/// such correction; the asymmetry is inherited from the measured originals
/// and is preserved pending a measurement-driven justification either way.
#[derive(Debug, Clone)]
pub struct RcHighPassCascade {
    stage1: RcHighPass,
    stage2: RcHighPass,
    sample_rate: f64,
    cutoff: f64,
}

impl RcHighPassCascade {
    pub fn new() -> Self {
        Self {
            stage1: RcHighPass::new(),
            stage2: RcHighPass::new(),
            sample_rate: 44100.0,
            cutoff: 1000.0,
        }
    }
}

impl Default for RcHighPassCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for RcHighPassCascade {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.stage1.prepare(sample_rate);
        self.stage2.prepare(sample_rate);
        self.set_cutoff(self.cutoff);
    }

    #[inline]
    fn process_sample(&mut self, x: f64) -> f64 {
        self.stage2.process_sample(self.stage1.process_sample(x))
    }

    fn set_cutoff(&mut self, cutoff_hz: f64) {
        self.cutoff = clamp_cutoff(cutoff_hz, self.sample_rate);
        self.stage1.set_cutoff(self.cutoff / HP_CASCADE_K);
        self.stage2.set_cutoff(self.cutoff / HP_CASCADE_K);
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::HighPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::Second
    }

    fn reset(&mut self) {
        self.stage1.reset();
        self.stage2.reset();
    }
}
