//! Cascada Analysis - offline measurement tools for the filter models
//!
//! Validates the wave digital filter topologies by driving them the same
//! way a host would, one sample at a time:
//!
//! - [`response`] - impulse-response frequency measurement with peak-
//!   normalized magnitude (dB) and unwrapped phase (degrees)
//! - [`rtf`] - real-time-factor benchmarking (wall clock vs. audio time)
//! - [`signal`] - impulse and sine test signal generators
//! - [`export`] - CSV writers for response and waveform tables
//!
//! # Example
//!
//! ```rust
//! use cascada_analysis::FrequencyResponse;
//! use cascada_filters::{create, Filter, FilterKind, FilterOrder};
//!
//! let mut filter = create(FilterKind::LowPass, FilterOrder::First);
//! filter.prepare(48000.0);
//! filter.set_cutoff(1000.0);
//!
//! let response = FrequencyResponse::measure(filter.as_mut(), 48000.0, 14);
//! assert!(response.magnitude_db[0].abs() < 0.1); // 0 dB at DC
//! ```

pub mod export;
pub mod response;
pub mod rtf;
pub mod signal;

pub use export::{write_response_csv, write_waveform_csv};
pub use response::{FrequencyResponse, unwrap_phase};
pub use rtf::{RtfReport, real_time_factor};
pub use signal::{impulse, sine};
