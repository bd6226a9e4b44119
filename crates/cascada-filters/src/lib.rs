//! Cascada Filters - wave digital RC filter topologies
//!
//! Models of analog RC filter networks built on the scattering primitives
//! from `cascada-wdf`, exposed as sample-by-sample processors with
//! runtime-adjustable cutoff.
//!
//! # Topologies
//!
//! - [`RcLowPass`] / [`RcHighPass`] - first-order stages, one scatter
//!   exchange per sample
//! - [`RcLowPassCascade`] / [`RcHighPassCascade`] - second-order cascades
//!   of two first-order stages
//! - [`BandPass1`] / [`BandPass2`] - high-pass into low-pass compositions
//!   with center/bandwidth control
//! - [`DiodeClipper`] - nonlinear diode-pair stage with smoothed
//!   cutoff and diode-count ramps
//!
//! Every linear topology implements the [`Filter`] trait and is
//! constructed through [`create`] from a ([`FilterKind`], [`FilterOrder`])
//! selector. Cutoffs are clamped to `[20 Hz, 0.45 * sample_rate]` on every
//! mutation, so no caller input can produce an unstable configuration.
//!
//! # Example
//!
//! ```rust
//! use cascada_filters::{create, Filter, FilterKind, FilterOrder};
//!
//! let mut filter = create(FilterKind::LowPass, FilterOrder::First);
//! filter.prepare(48000.0);
//! filter.set_cutoff(1000.0);
//!
//! let y = filter.process_sample(0.5);
//! assert!(y.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bandpass;
pub mod clipper;
pub mod filter;
pub mod highpass;
pub mod lowpass;

pub use bandpass::{BandPass1, BandPass2};
pub use clipper::DiodeClipper;
pub use filter::{
    Filter, FilterKind, FilterOrder, MAX_CUTOFF_RATIO, MIN_CUTOFF_HZ, clamp_cutoff, create,
};
pub use highpass::{RcHighPass, RcHighPassCascade};
pub use lowpass::{RcLowPass, RcLowPassCascade};
