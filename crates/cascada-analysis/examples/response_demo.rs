//! Measure and print the response of a second-order band-pass.
//!
//! Run with: cargo run --example response_demo

use cascada_analysis::FrequencyResponse;
use cascada_filters::{Filter, FilterKind, FilterOrder, create};

fn main() {
    let sample_rate = 48000.0;

    let mut filter = create(FilterKind::BandPass, FilterOrder::Second);
    filter.prepare(sample_rate);
    filter.set_cutoff(1000.0);

    let response = FrequencyResponse::measure_with_phase(filter.as_mut(), sample_rate, 12);

    println!("freq_hz\tmag_db\tphase_deg");
    let phase = response.phase_deg.as_ref().unwrap();
    for i in (0..response.len()).step_by(64) {
        println!(
            "{:8.1}\t{:7.2}\t{:8.2}",
            response.frequencies[i], response.magnitude_db[i], phase[i]
        );
    }

    if let Some(corner) = response.cutoff_frequency() {
        println!("\nupper -3 dB corner: {corner:.1} Hz");
    }
}
