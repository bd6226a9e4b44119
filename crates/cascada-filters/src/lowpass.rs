//! First-order RC low-pass stage and its second-order cascade.

use core::f64::consts::PI;

use cascada_wdf::{Capacitor, Resistor, SeriesAdaptor, VoltageSource, WdfLeaf};

use crate::filter::{Filter, FilterKind, FilterOrder, clamp_cutoff};

/// Fixed capacitance of the low-pass family (F). The paired resistor is
/// retuned from the cutoff; 1 uF keeps its value in a practical range
/// across the whole audio band.
const LOWPASS_C: f64 = 1.0e-6;

/// First-order RC low-pass: series resistor into a shunt capacitor.
///
/// The analog divider is modeled as a WDF tree with the signal injected
/// by an ideal voltage source at the root:
///
/// ```text
///   VoltageSource (root)
///        | (polarity inversion)
///   SeriesAdaptor
///     /       \
/// Resistor  Capacitor
/// ```
///
/// Output is the capacitor voltage. One scatter exchange per sample; the
/// capacitor's single wave sample is the only state.
#[derive(Debug, Clone)]
pub struct RcLowPass {
    vin: VoltageSource,
    series: SeriesAdaptor,
    r: Resistor,
    c: Capacitor,
    sample_rate: f64,
    cutoff: f64,
}

impl RcLowPass {
    pub fn new() -> Self {
        let sample_rate = 44100.0;
        let cutoff = 1000.0;
        let r = Resistor::new(resistance_for(cutoff));
        let c = Capacitor::new(LOWPASS_C, sample_rate);
        let series = SeriesAdaptor::new(r.port_resistance(), c.port_resistance());
        Self {
            vin: VoltageSource::new(),
            series,
            r,
            c,
            sample_rate,
            cutoff,
        }
    }

    fn update_components(&mut self) {
        self.r.set_resistance(resistance_for(self.cutoff));
        self.series
            .update_ports(self.r.port_resistance(), self.c.port_resistance());
    }
}

/// `R = 1 / (2 pi fc C)` for the fixed low-pass capacitance.
fn resistance_for(cutoff_hz: f64) -> f64 {
    1.0 / (2.0 * PI * cutoff_hz * LOWPASS_C)
}

impl Default for RcLowPass {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for RcLowPass {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.c.set_sample_rate(sample_rate); // capacitor needs fs
        // Re-clamping keeps the cutoff legal even when the rate drops
        self.set_cutoff(self.cutoff);
    }

    #[inline]
    fn process_sample(&mut self, x: f64) -> f64 {
        self.vin.set_voltage(x); // drive the source

        let b_r = self.r.reflected();
        let b_c = self.c.reflected();
        let b_up = self.series.scatter_up(b_r, b_c);

        // Polarity inversion between the junction and the source root
        self.vin.set_incident(-b_up);
        let a_down = -self.vin.reflected();

        let (a_r, a_c) = self.series.scatter_down(a_down);
        self.r.set_incident(a_r);
        self.c.set_incident(a_c);

        (a_c + b_c) / 2.0 // output at the cap
    }

    fn set_cutoff(&mut self, cutoff_hz: f64) {
        self.cutoff = clamp_cutoff(cutoff_hz, self.sample_rate);
        self.update_components();
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::LowPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::First
    }

    fn reset(&mut self) {
        self.c.reset();
        self.series.reset();
    }
}

/// Second-order low-pass: two first-order stages in series.
///
/// Both stages receive the same clamped cutoff. Unlike the high-pass
/// cascade there is no frequency-correction factor here; the asymmetry is
/// inherited from the measured originals and must be re-validated against
/// the frequency-response analyzer before changing either side.
#[derive(Debug, Clone)]
pub struct RcLowPassCascade {
    stage1: RcLowPass,
    stage2: RcLowPass,
    sample_rate: f64,
    cutoff: f64,
}

impl RcLowPassCascade {
    pub fn new() -> Self {
        Self {
            stage1: RcLowPass::new(),
            stage2: RcLowPass::new(),
            sample_rate: 44100.0,
            cutoff: 1000.0,
        }
    }
}

impl Default for RcLowPassCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for RcLowPassCascade {
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
        self.stage1.set_cutoff(self.cutoff);
        self.stage2.set_cutoff(self.cutoff);
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::LowPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::Second
    }

    fn reset(&mut self) {
        self.stage1.reset();
        self.stage2.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dc_passes_at_unity() {
        let mut filter = RcLowPass::new();
        filter.prepare(48000.0);
        filter.set_cutoff(1000.0);

        let mut out = 0.0;
        for _ in 0..48000 {
            out = filter.process_sample(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3, "DC should pass, got {out}");
    }

    #[test]
    fn first_output_sample_matches_bilinear_one_pole() {
        // WDF trapezoidal capacitor == bilinear transform of the RC divider:
        // h[0] = k / (1 + k) with k = pi * fc / fs.
        let mut filter = RcLowPass::new();
        filter.prepare(48000.0);
        filter.set_cutoff(1000.0);

        let k = PI * 1000.0 / 48000.0;
        let expected = k / (1.0 + k);
        let h0 = filter.process_sample(1.0);
        assert!(
            (h0 - expected).abs() < 1e-12,
            "h[0] = {h0}, expected {expected}"
        );
    }

    #[test]
    fn cutoff_is_clamped() {
        let mut filter = RcLowPass::new();
        filter.prepare(48000.0);
        filter.set_cutoff(1.0);
        assert_eq!(filter.cutoff(), 20.0);
        filter.set_cutoff(1e6);
        assert_eq!(filter.cutoff(), 0.45 * 48000.0);
    }

    #[test]
    fn prepare_twice_keeps_cutoff() {
        let mut filter = RcLowPass::new();
        filter.prepare(48000.0);
        filter.set_cutoff(500.0);
        filter.prepare(48000.0);
        assert_eq!(filter.cutoff(), 500.0);
    }

    #[test]
    fn reset_clears_state() {
        let mut filter = RcLowPass::new();
        filter.prepare(48000.0);
        for _ in 0..100 {
            filter.process_sample(1.0);
        }
        filter.reset();
        let out = filter.process_sample(0.0);
        assert_eq!(out, 0.0, "silence after reset should stay silent");
    }

    #[test]
    fn cascade_forwards_cutoff_uncorrected() {
        let mut cascade = RcLowPassCascade::new();
        cascade.prepare(48000.0);
        cascade.set_cutoff(2000.0);
        assert_eq!(cascade.cutoff(), 2000.0);
        assert_eq!(cascade.stage1.cutoff(), 2000.0);
        assert_eq!(cascade.stage2.cutoff(), 2000.0);
    }

    #[test]
    fn cascade_attenuates_more_than_single_stage() {
        let mut single = RcLowPass::new();
        let mut cascade = RcLowPassCascade::new();
        single.prepare(48000.0);
        cascade.prepare(48000.0);
        single.set_cutoff(500.0);
        cascade.set_cutoff(500.0);

        // Drive both with a tone one decade above cutoff and compare RMS
        let freq = 5000.0;
        let mut single_energy = 0.0;
        let mut cascade_energy = 0.0;
        for i in 0..9600 {
            let t = i as f64 / 48000.0;
            let x = libm::sin(2.0 * PI * freq * t);
            let a = single.process_sample(x);
            let b = cascade.process_sample(x);
            if i >= 4800 {
                single_energy += a * a;
                cascade_energy += b * b;
            }
        }
        assert!(
            cascade_energy < single_energy / 4.0,
            "cascade should roll off much faster: {cascade_energy} vs {single_energy}"
        );
    }
}
