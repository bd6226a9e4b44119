//! Impulse-response frequency measurement.

use cascada_filters::Filter;
use rustfft::{FftPlanner, num_complex::Complex};
use std::f64::consts::PI;

/// Measured frequency response of a filter.
///
/// Magnitudes are normalized so the run's peak bin sits at 0 dB,
/// independent of the filter's absolute gain. Phase, when measured, is
/// unwrapped and reported in degrees. Bin `k` corresponds to
/// `k * sample_rate / fft_size`; only the first half of the transform
/// (up to Nyquist) is kept.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Frequency per bin (Hz).
    pub frequencies: Vec<f64>,
    /// Normalized magnitude per bin (dB, peak at 0).
    pub magnitude_db: Vec<f64>,
    /// Unwrapped phase per bin (degrees), when measured.
    pub phase_deg: Option<Vec<f64>>,
}

impl FrequencyResponse {
    /// Measure the magnitude response of `filter`.
    ///
    /// Drives the filter with a unit impulse over `2^fft_order` samples,
    /// captures the impulse response in place, and transforms it. The
    /// filter should be freshly prepared (or reset) so no stale state
    /// colors the measurement.
    pub fn measure<F>(filter: &mut F, sample_rate: f64, fft_order: u32) -> Self
    where
        F: Filter + ?Sized,
    {
        Self::analyze(filter, sample_rate, fft_order, false)
    }

    /// Measure magnitude and unwrapped phase.
    pub fn measure_with_phase<F>(filter: &mut F, sample_rate: f64, fft_order: u32) -> Self
    where
        F: Filter + ?Sized,
    {
        Self::analyze(filter, sample_rate, fft_order, true)
    }

    fn analyze<F>(filter: &mut F, sample_rate: f64, fft_order: u32, with_phase: bool) -> Self
    where
        F: Filter + ?Sized,
    {
        let fft_size = 1usize << fft_order;

        // Unit impulse, filtered in place to capture the impulse response
        let mut buffer = vec![0.0f64; fft_size];
        buffer[0] = 1.0;
        for sample in &mut buffer {
            *sample = filter.process_sample(*sample);
        }

        let mut spectrum: Vec<Complex<f64>> =
            buffer.iter().map(|&x| Complex::new(x, 0.0)).collect();
        FftPlanner::new()
            .plan_fft_forward(fft_size)
            .process(&mut spectrum);

        // Only the first half of the bins is meaningful (Nyquist limit)
        let num_bins = fft_size / 2;
        spectrum.truncate(num_bins);

        let frequencies: Vec<f64> = (0..num_bins)
            .map(|k| k as f64 * sample_rate / fft_size as f64)
            .collect();

        let magnitudes: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
        let max_magnitude = magnitudes.iter().fold(0.0f64, |acc, &m| acc.max(m));

        // A filter that fully suppresses the impulse has nothing to
        // normalize against; report -inf explicitly rather than dividing
        // by zero.
        let magnitude_db: Vec<f64> = if max_magnitude > 0.0 {
            magnitudes
                .iter()
                .map(|&m| 20.0 * (m / max_magnitude).log10())
                .collect()
        } else {
            vec![f64::NEG_INFINITY; num_bins]
        };

        let phase_deg = with_phase.then(|| {
            let raw: Vec<f64> = spectrum.iter().map(|c| c.im.atan2(c.re)).collect();
            unwrap_phase(&raw)
                .into_iter()
                .map(f64::to_degrees)
                .collect()
        });

        Self {
            frequencies,
            magnitude_db,
            phase_deg,
        }
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the response holds no bins.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Magnitude at the bin nearest to `freq_hz`.
    pub fn magnitude_near(&self, freq_hz: f64) -> f64 {
        let bin = self.nearest_bin(freq_hz);
        self.magnitude_db[bin]
    }

    /// Index of the bin nearest to `freq_hz`.
    pub fn nearest_bin(&self, freq_hz: f64) -> usize {
        if self.frequencies.len() < 2 {
            return 0;
        }
        let resolution = self.frequencies[1] - self.frequencies[0];
        let bin = (freq_hz / resolution).round() as usize;
        bin.min(self.frequencies.len() - 1)
    }

    /// First -3 dB crossing below the peak, linearly interpolated.
    ///
    /// Returns `None` when the response never drops 3 dB under its peak.
    pub fn cutoff_frequency(&self) -> Option<f64> {
        let target = -3.0;
        for i in 1..self.magnitude_db.len() {
            let (prev, cur) = (self.magnitude_db[i - 1], self.magnitude_db[i]);
            if prev >= target && cur < target {
                if !prev.is_finite() || !cur.is_finite() {
                    return Some(self.frequencies[i]);
                }
                let t = (target - prev) / (cur - prev);
                return Some(self.frequencies[i - 1]
                    + t * (self.frequencies[i] - self.frequencies[i - 1]));
            }
        }
        None
    }
}

/// Unwrap a phase trace (radians in, radians out).
///
/// Whenever the raw step between consecutive bins exceeds +pi the
/// accumulated correction drops by 2 pi, and symmetrically for steps below
/// -pi, so the returned trace is free of spurious 2 pi discontinuities.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    if phase.is_empty() {
        return Vec::new();
    }

    let two_pi = 2.0 * PI;
    let mut unwrapped = Vec::with_capacity(phase.len());
    unwrapped.push(phase[0]);
    let mut correction = 0.0;

    for i in 1..phase.len() {
        let diff = phase[i] - phase[i - 1];
        if diff > PI {
            correction -= two_pi;
        } else if diff < -PI {
            correction += two_pi;
        }
        unwrapped.push(phase[i] + correction);
    }

    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_filters::{FilterKind, FilterOrder, create};

    #[test]
    fn lowpass_dc_is_peak() {
        let mut filter = create(FilterKind::LowPass, FilterOrder::First);
        filter.prepare(48000.0);
        filter.set_cutoff(1000.0);

        let response = FrequencyResponse::measure(filter.as_mut(), 48000.0, 12);
        assert!(
            response.magnitude_db[0].abs() < 0.1,
            "DC should be the 0 dB peak, got {}",
            response.magnitude_db[0]
        );
    }

    #[test]
    fn bin_frequencies_evenly_spaced() {
        let mut filter = create(FilterKind::LowPass, FilterOrder::First);
        filter.prepare(48000.0);
        let response = FrequencyResponse::measure(filter.as_mut(), 48000.0, 10);
        assert_eq!(response.len(), 512);
        let df = 48000.0 / 1024.0;
        for (k, &f) in response.frequencies.iter().enumerate() {
            assert!((f - k as f64 * df).abs() < 1e-9);
        }
    }

    #[test]
    fn unwrap_leaves_continuous_trace_alone() {
        let trace = vec![0.0, -0.3, -0.6, -0.9];
        assert_eq!(unwrap_phase(&trace), trace);
    }

    #[test]
    fn unwrap_removes_wraparound_jump() {
        // Phase descending through -pi wraps to +pi; unwrap removes the jump
        let wrapped = vec![-2.8, -3.1, 3.0, 2.7];
        let unwrapped = unwrap_phase(&wrapped);
        for pair in unwrapped.windows(2) {
            assert!(
                (pair[1] - pair[0]).abs() <= PI,
                "adjacent unwrapped bins must stay within pi: {pair:?}"
            );
        }
        assert!((unwrapped[2] - (3.0 - 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn unwrap_empty_is_empty() {
        assert!(unwrap_phase(&[]).is_empty());
    }

    #[test]
    fn phase_variant_reports_degrees() {
        let mut filter = create(FilterKind::LowPass, FilterOrder::First);
        filter.prepare(48000.0);
        filter.set_cutoff(1000.0);

        let response = FrequencyResponse::measure_with_phase(filter.as_mut(), 48000.0, 12);
        let phase = response.phase_deg.as_ref().expect("phase requested");
        assert_eq!(phase.len(), response.len());
        // A lowpass lags: phase should head negative above DC
        assert!(phase[10] < 0.0, "lowpass phase should lag, got {}", phase[10]);
    }

    #[test]
    fn cutoff_frequency_interpolates_minus_3db() {
        let response = FrequencyResponse {
            frequencies: vec![0.0, 100.0, 200.0, 300.0],
            magnitude_db: vec![0.0, -1.0, -5.0, -20.0],
            phase_deg: None,
        };
        let fc = response.cutoff_frequency().expect("crossing exists");
        assert!((fc - 150.0).abs() < 1.0, "expected ~150 Hz, got {fc}");
    }
}
