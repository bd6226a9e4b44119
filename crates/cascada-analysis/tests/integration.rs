//! End-to-end measurements of the filter topologies.
//!
//! These tests drive the filters exactly the way the CLI does and check
//! the measured responses against the analog design targets.

use cascada_analysis::{FrequencyResponse, real_time_factor, unwrap_phase};
use cascada_filters::{Filter, FilterKind, FilterOrder, create};

const SAMPLE_RATE: f64 = 48000.0;
const FFT_ORDER: u32 = 14;

fn measured(kind: FilterKind, order: FilterOrder, cutoff: f64) -> FrequencyResponse {
    let mut filter = create(kind, order);
    filter.prepare(SAMPLE_RATE);
    filter.set_cutoff(cutoff);
    FrequencyResponse::measure(filter.as_mut(), SAMPLE_RATE, FFT_ORDER)
}

/// Linearly interpolated frequency of the first upward -3 dB crossing
/// (for high-pass shapes, where magnitude rises with frequency).
fn rising_minus_3db_crossing(response: &FrequencyResponse) -> f64 {
    for i in 1..response.magnitude_db.len() {
        let (prev, cur) = (response.magnitude_db[i - 1], response.magnitude_db[i]);
        if prev < -3.0 && cur >= -3.0 {
            if !prev.is_finite() {
                return response.frequencies[i];
            }
            let t = (-3.0 - prev) / (cur - prev);
            return response.frequencies[i - 1]
                + t * (response.frequencies[i] - response.frequencies[i - 1]);
        }
    }
    panic!("no -3 dB crossing found");
}

#[test]
fn first_order_lowpass_hits_minus_3db_at_cutoff() {
    let response = measured(FilterKind::LowPass, FilterOrder::First, 1000.0);

    assert!(response.magnitude_db[0].abs() < 0.05, "0 dB at DC");

    let cutoff_bin = response.nearest_bin(1000.0);
    let at_cutoff = response.magnitude_db[cutoff_bin];
    assert!(
        (-3.5..=-2.5).contains(&at_cutoff),
        "expected ~-3 dB at the cutoff bin, got {at_cutoff}"
    );
}

#[test]
fn first_order_lowpass_monotone_past_cutoff() {
    let response = measured(FilterKind::LowPass, FilterOrder::First, 1000.0);
    let start = response.nearest_bin(1000.0);
    for i in start..response.len() - 1 {
        assert!(
            response.magnitude_db[i + 1] <= response.magnitude_db[i] + 1e-6,
            "magnitude must decrease monotonically past cutoff (bin {i})"
        );
    }
}

#[test]
fn second_order_lowpass_doubles_the_rolloff_slope() {
    let first = measured(FilterKind::LowPass, FilterOrder::First, 1000.0);
    let second = measured(FilterKind::LowPass, FilterOrder::Second, 1000.0);

    // Slope over the octave 4 kHz -> 8 kHz, well above the corner
    let slope = |r: &FrequencyResponse| r.magnitude_near(8000.0) - r.magnitude_near(4000.0);
    let ratio = slope(&second) / slope(&first);
    assert!(
        (1.8..=2.2).contains(&ratio),
        "cascade slope should be ~2x the single stage, got {ratio}"
    );
}

#[test]
fn second_order_highpass_corner_realigned_to_nominal() {
    // The 1.553 divisor exists to put the cascade's -3 dB point back on
    // the nominal cutoff; verify it actually does.
    let response = measured(FilterKind::HighPass, FilterOrder::Second, 1000.0);
    let corner = rising_minus_3db_crossing(&response);
    assert!(
        (corner - 1000.0).abs() < 50.0,
        "high-pass cascade corner should sit near 1 kHz, got {corner}"
    );
}

#[test]
fn second_order_lowpass_corner_sits_below_nominal() {
    // The low-pass cascade applies no correction, so its composite corner
    // lands at fc / 1.554 - documenting the measured asymmetry between
    // the two cascades.
    let response = measured(FilterKind::LowPass, FilterOrder::Second, 1000.0);
    let corner = response.cutoff_frequency().expect("corner exists");
    let expected = 1000.0 / 1.5537;
    assert!(
        (corner - expected).abs() < 30.0,
        "uncorrected cascade corner should sit near {expected:.0} Hz, got {corner}"
    );
}

#[test]
fn first_order_highpass_corner_on_nominal() {
    let response = measured(FilterKind::HighPass, FilterOrder::First, 1000.0);
    let corner = rising_minus_3db_crossing(&response);
    assert!(
        (corner - 1000.0).abs() < 30.0,
        "first-order high-pass corner should sit near 1 kHz, got {corner}"
    );
}

#[test]
fn bandpass_peaks_near_center() {
    let response = measured(FilterKind::BandPass, FilterOrder::First, 1000.0);
    let peak_bin = response
        .magnitude_db
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    let peak_freq = response.frequencies[peak_bin];
    assert!(
        (600.0..=1600.0).contains(&peak_freq),
        "band-pass peak should bracket the 1 kHz center, got {peak_freq}"
    );
}

#[test]
fn unwrapped_phase_steps_stay_within_pi() {
    let mut filter = create(FilterKind::BandPass, FilterOrder::Second);
    filter.prepare(SAMPLE_RATE);
    filter.set_cutoff(1000.0);

    let response = FrequencyResponse::measure_with_phase(filter.as_mut(), SAMPLE_RATE, FFT_ORDER);
    let phase = response.phase_deg.expect("phase requested");
    for (i, pair) in phase.windows(2).enumerate() {
        assert!(
            (pair[1] - pair[0]).abs() <= 180.0 + 1e-9,
            "unwrapped phase jumped more than pi between bins {i} and {}: {pair:?}",
            i + 1
        );
    }
}

#[test]
fn phase_unwrap_handles_synthetic_wraps() {
    use std::f64::consts::PI;
    // A steadily descending phase, stored wrapped into (-pi, pi]
    let true_phase: Vec<f64> = (0..200).map(|i| -0.1 * i as f64).collect();
    let wrapped: Vec<f64> = true_phase
        .iter()
        .map(|&p| {
            let mut w = p;
            while w <= -PI {
                w += 2.0 * PI;
            }
            w
        })
        .collect();

    let unwrapped = unwrap_phase(&wrapped);
    for (u, t) in unwrapped.iter().zip(true_phase.iter()) {
        assert!((u - t).abs() < 1e-9, "unwrap should recover {t}, got {u}");
    }
}

#[test]
fn cutoff_clamp_round_trip() {
    for kind in [FilterKind::LowPass, FilterKind::HighPass, FilterKind::BandPass] {
        for order in [FilterOrder::First, FilterOrder::Second] {
            let mut filter = create(kind, order);
            filter.prepare(SAMPLE_RATE);
            for requested in [0.0, 19.9, 20.0, 440.0, 21600.0, 30000.0, 1e9] {
                filter.set_cutoff(requested);
                let expected = requested.clamp(20.0, 0.45 * SAMPLE_RATE);
                assert_eq!(
                    filter.cutoff(),
                    expected,
                    "{kind:?}/{order:?} cutoff clamp for request {requested}"
                );
            }
        }
    }
}

#[test]
fn prepare_is_idempotent() {
    let mut filter = create(FilterKind::HighPass, FilterOrder::Second);
    filter.prepare(SAMPLE_RATE);
    filter.set_cutoff(750.0);
    filter.prepare(SAMPLE_RATE);
    assert_eq!(filter.cutoff(), 750.0);
}

#[test]
fn thirty_second_rtf_run_is_sane() {
    let mut filter = create(FilterKind::LowPass, FilterOrder::First);
    filter.prepare(SAMPLE_RATE);
    filter.set_cutoff(1000.0);

    let report = real_time_factor(filter.as_mut(), SAMPLE_RATE, 30.0);
    assert!(
        report.ratio.is_finite() && report.ratio > 0.0,
        "RTF must be a finite positive number, got {}",
        report.ratio
    );
    assert!((report.audio_seconds - 30.0).abs() < 1e-6);
}

#[test]
fn zero_response_filter_reports_negative_infinity() {
    /// Pathological filter that swallows everything.
    struct Mute;
    impl Filter for Mute {
        fn prepare(&mut self, _sample_rate: f64) {}
        fn process_sample(&mut self, _x: f64) -> f64 {
            0.0
        }
        fn set_cutoff(&mut self, _cutoff_hz: f64) {}
        fn cutoff(&self) -> f64 {
            0.0
        }
        fn kind(&self) -> FilterKind {
            FilterKind::LowPass
        }
        fn order(&self) -> FilterOrder {
            FilterOrder::First
        }
        fn reset(&mut self) {}
    }

    let response = FrequencyResponse::measure(&mut Mute, SAMPLE_RATE, 10);
    assert!(
        response
            .magnitude_db
            .iter()
            .all(|m| m.is_infinite() && m.is_sign_negative()),
        "all-zero impulse response must report -inf dB, not NaN"
    );
}
