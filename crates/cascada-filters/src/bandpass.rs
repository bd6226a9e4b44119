//! Band-pass filters composed of a high-pass into a low-pass.

use crate::filter::{Filter, FilterKind, FilterOrder, clamp_cutoff};
use crate::highpass::{RcHighPass, RcHighPassCascade};
use crate::lowpass::{RcLowPass, RcLowPassCascade};

/// Narrowest allowed bandwidth in octaves.
const MIN_BANDWIDTH_OCTAVES: f64 = 0.1;

/// Flat makeup gain for the first-order band-pass. Cascading a high-pass
/// into a low-pass attenuates the passband; this is a heuristic constant,
/// not a frequency-dependent correction, and is calibrated by measurement.
const BP1_MAKEUP: f64 = 1.5;

/// Flat makeup gain for the second-order band-pass.
const BP2_MAKEUP: f64 = 1.45;

/// Derive the child cutoffs for a band-pass from its center and bandwidth.
///
/// `ratio = 2^(bandwidth / 2)`; the high-pass sits `ratio` below the
/// center and the low-pass `ratio` above, each clamped independently so
/// neither child can be pushed into an unstable configuration.
fn child_cutoffs(center: f64, bandwidth_octaves: f64, sample_rate: f64) -> (f64, f64) {
    let ratio = libm::exp2(bandwidth_octaves / 2.0);
    let hp = clamp_cutoff(center / ratio, sample_rate);
    let lp = clamp_cutoff(center * ratio, sample_rate);
    (hp, lp)
}

/// First-order band-pass: first-order high-pass into first-order low-pass.
///
/// `set_cutoff` positions the center frequency; [`BandPass1::set_bandwidth`]
/// sets the spread in octaves. Both children are retuned on every
/// parameter change.
#[derive(Debug, Clone)]
pub struct BandPass1 {
    hp: RcHighPass,
    lp: RcLowPass,
    sample_rate: f64,
    cutoff: f64,
    bandwidth_octaves: f64,
    auto_gain: bool,
}

impl BandPass1 {
    pub fn new() -> Self {
        Self {
            hp: RcHighPass::new(),
            lp: RcLowPass::new(),
            sample_rate: 44100.0,
            cutoff: 1000.0,
            bandwidth_octaves: 1.0,
            auto_gain: true,
        }
    }

    /// Set the bandwidth in octaves (clamped to at least 0.1).
    pub fn set_bandwidth(&mut self, octaves: f64) {
        self.bandwidth_octaves = octaves.max(MIN_BANDWIDTH_OCTAVES);
        self.update_cutoffs();
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth_octaves
    }

    /// Enable or disable the flat passband makeup gain.
    pub fn set_auto_gain(&mut self, enabled: bool) {
        self.auto_gain = enabled;
    }

    fn update_cutoffs(&mut self) {
        let (hp, lp) = child_cutoffs(self.cutoff, self.bandwidth_octaves, self.sample_rate);
        self.hp.set_cutoff(hp);
        self.lp.set_cutoff(lp);
    }
}

impl Default for BandPass1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for BandPass1 {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.hp.prepare(sample_rate);
        self.lp.prepare(sample_rate);
        self.set_cutoff(self.cutoff);
    }

    #[inline]
    fn process_sample(&mut self, x: f64) -> f64 {
        let x = if self.auto_gain { x * BP1_MAKEUP } else { x };
        self.lp.process_sample(self.hp.process_sample(x))
    }

    fn set_cutoff(&mut self, cutoff_hz: f64) {
        self.cutoff = clamp_cutoff(cutoff_hz, self.sample_rate);
        self.update_cutoffs();
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::BandPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::First
    }

    fn reset(&mut self) {
        self.hp.reset();
        self.lp.reset();
    }
}

/// Second-order band-pass: high-pass cascade into low-pass cascade for
/// steeper skirts on both sides of the band.
#[derive(Debug, Clone)]
pub struct BandPass2 {
    hp: RcHighPassCascade,
    lp: RcLowPassCascade,
    sample_rate: f64,
    cutoff: f64,
    bandwidth_octaves: f64,
    auto_gain: bool,
}

impl BandPass2 {
    pub fn new() -> Self {
        Self {
            hp: RcHighPassCascade::new(),
            lp: RcLowPassCascade::new(),
            sample_rate: 44100.0,
            cutoff: 1000.0,
            bandwidth_octaves: 1.0,
            auto_gain: true,
        }
    }

    /// Set the bandwidth in octaves (clamped to at least 0.1).
    pub fn set_bandwidth(&mut self, octaves: f64) {
        self.bandwidth_octaves = octaves.max(MIN_BANDWIDTH_OCTAVES);
        self.update_cutoffs();
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth_octaves
    }

    /// Enable or disable the flat passband makeup gain.
    pub fn set_auto_gain(&mut self, enabled: bool) {
        self.auto_gain = enabled;
    }

    fn update_cutoffs(&mut self) {
        let (hp, lp) = child_cutoffs(self.cutoff, self.bandwidth_octaves, self.sample_rate);
        self.hp.set_cutoff(hp);
        self.lp.set_cutoff(lp);
    }
}

impl Default for BandPass2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for BandPass2 {
    fn prepare(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.hp.prepare(sample_rate);
        self.lp.prepare(sample_rate);
        self.set_cutoff(self.cutoff);
    }

    #[inline]
    fn process_sample(&mut self, x: f64) -> f64 {
        let x = if self.auto_gain { x * BP2_MAKEUP } else { x };
        self.lp.process_sample(self.hp.process_sample(x))
    }

    fn set_cutoff(&mut self, cutoff_hz: f64) {
        self.cutoff = clamp_cutoff(cutoff_hz, self.sample_rate);
        self.update_cutoffs();
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn kind(&self) -> FilterKind {
        FilterKind::BandPass
    }

    fn order(&self) -> FilterOrder {
        FilterOrder::Second
    }

    fn reset(&mut self) {
        self.hp.reset();
        self.lp.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn child_cutoffs_bracket_center() {
        let (hp, lp) = child_cutoffs(1000.0, 1.0, 48000.0);
        assert!(hp < 1000.0 && 1000.0 < lp);
        assert!((lp / hp - 2.0).abs() < 1e-12, "one octave spread");
    }

    #[test]
    fn child_cutoff_ratio_follows_bandwidth() {
        for bw in [0.5, 1.0, 2.0, 3.0] {
            let (hp, lp) = child_cutoffs(2000.0, bw, 96000.0);
            assert!(
                (lp / hp - libm::exp2(bw)).abs() < 1e-9,
                "lp/hp should be 2^bandwidth for bw={bw}"
            );
        }
    }

    #[test]
    fn bandwidth_clamped_to_floor() {
        let mut bp = BandPass1::new();
        bp.prepare(48000.0);
        bp.set_bandwidth(0.0);
        assert_eq!(bp.bandwidth(), 0.1);
    }

    #[test]
    fn center_tone_passes_band_edges_do_not() {
        let mut bp = BandPass1::new();
        bp.prepare(48000.0);
        bp.set_cutoff(1000.0);
        bp.set_bandwidth(1.0);
        bp.set_auto_gain(false);

        let energy_at = |bp: &mut BandPass1, freq: f64| {
            bp.reset();
            let mut energy = 0.0;
            for i in 0..19200 {
                let t = i as f64 / 48000.0;
                let y = bp.process_sample(libm::sin(2.0 * PI * freq * t));
                if i >= 9600 {
                    energy += y * y;
                }
            }
            energy
        };

        let center = energy_at(&mut bp, 1000.0);
        let below = energy_at(&mut bp, 50.0);
        let above = energy_at(&mut bp, 18_000.0);
        assert!(center > below * 4.0, "center {center} vs below {below}");
        assert!(center > above * 4.0, "center {center} vs above {above}");
    }

    #[test]
    fn both_orders_report_bandpass_kind() {
        assert_eq!(BandPass1::new().kind(), FilterKind::BandPass);
        assert_eq!(BandPass2::new().kind(), FilterKind::BandPass);
        assert_eq!(BandPass1::new().order(), FilterOrder::First);
        assert_eq!(BandPass2::new().order(), FilterOrder::Second);
    }

    #[test]
    fn children_clamped_independently() {
        // A wide bandwidth at a low center pushes the high-pass child to the
        // 20 Hz floor while the low-pass child stays derived.
        let (hp, lp) = child_cutoffs(40.0, 4.0, 48000.0);
        assert_eq!(hp, 20.0);
        assert!((lp - 160.0).abs() < 1e-9);
    }
}
