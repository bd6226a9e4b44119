//! Real-time-factor benchmarking.

use cascada_filters::Filter;
use std::time::Instant;

/// Wall-clock cost of a filter relative to the audio it processed.
///
/// A ratio below 1.0 means the filter runs faster than real time. This is
/// a throughput probe, not a correctness check.
#[derive(Debug, Clone, Copy)]
pub struct RtfReport {
    /// Time spent driving the filter (s).
    pub wall_seconds: f64,
    /// Duration of the audio processed (s).
    pub audio_seconds: f64,
    /// `wall_seconds / audio_seconds`.
    pub ratio: f64,
}

/// Measure the real-time factor of `filter` over `seconds` of synthetic
/// signal (an impulse at sample 0, silence after - enough to keep the
/// arithmetic honest without denormal-heavy zeros everywhere).
///
/// The signal buffer is allocated up front; the timed loop performs no
/// allocation.
pub fn real_time_factor<F>(filter: &mut F, sample_rate: f64, seconds: f64) -> RtfReport
where
    F: Filter + ?Sized,
{
    let total_samples = (seconds * sample_rate) as usize;

    let mut input = vec![0.0f64; total_samples];
    if let Some(first) = input.first_mut() {
        *first = 1.0;
    }

    let start = Instant::now();
    let mut acc = 0.0;
    for &x in &input {
        acc += filter.process_sample(x);
    }
    let wall_seconds = start.elapsed().as_secs_f64();

    // Keep the accumulator observable so the drive loop cannot be
    // optimized away.
    std::hint::black_box(acc);

    let audio_seconds = total_samples as f64 / sample_rate;
    RtfReport {
        wall_seconds,
        audio_seconds,
        ratio: wall_seconds / audio_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascada_filters::{FilterKind, FilterOrder, create};

    #[test]
    fn report_is_finite_and_positive() {
        let mut filter = create(FilterKind::LowPass, FilterOrder::First);
        filter.prepare(48000.0);
        filter.set_cutoff(1000.0);

        let report = real_time_factor(filter.as_mut(), 48000.0, 0.25);
        assert!(report.ratio.is_finite() && report.ratio > 0.0);
        assert!((report.audio_seconds - 0.25).abs() < 1e-9);
        assert!(report.wall_seconds > 0.0);
    }

    #[test]
    fn audio_duration_matches_request() {
        let mut filter = create(FilterKind::BandPass, FilterOrder::Second);
        filter.prepare(44100.0);
        let report = real_time_factor(filter.as_mut(), 44100.0, 0.1);
        assert!((report.audio_seconds - 0.1).abs() < 1e-3);
    }
}
