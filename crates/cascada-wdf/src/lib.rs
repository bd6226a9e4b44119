//! Cascada WDF - wave digital filter primitives
//!
//! This crate provides the scattering layer the filter models are built on:
//! analog circuit elements discretized as digital one-ports that exchange
//! incident (`a`) and reflected (`b`) wave quantities. Because each element
//! maps to a passive analog counterpart, networks assembled from them stay
//! numerically stable for any component values.
//!
//! # Building Blocks
//!
//! ## Leaf Elements
//!
//! - [`Resistor`] - matched termination, reflects nothing
//! - [`Capacitor`] - one sample of wave memory, `Rp = 1/(2 fs C)`
//! - [`VoltageSource`] - ideal source used as an un-adapted tree root
//! - [`ResistiveVoltageSource`] - source with built-in series resistance
//!
//! ## Adaptors
//!
//! - [`SeriesAdaptor`] / [`ParallelAdaptor`] - three-port junctions with a
//!   reflection-free parent port, joining two sub-trees
//!
//! ## Nonlinear Root
//!
//! - [`DiodePair`] - anti-parallel Shockley diodes solved per sample by
//!   Newton-Raphson with a fixed iteration budget
//!
//! ## Control
//!
//! - [`SmoothedParam`] - exponential one-pole parameter ramps for
//!   click-free runtime retuning
//!
//! # Processing Protocol
//!
//! A tree processes one sample in four phases: leaves reflect waves up
//! through the adaptors, the root resolves its wave, the adaptors scatter
//! incident waves back down, and reactive elements latch their incident
//! wave as state for the next sample. Each phase is a fixed number of
//! arithmetic operations, so the per-sample cost is data-independent.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod adaptor;
pub mod element;
pub mod param;

pub use adaptor::{ParallelAdaptor, SeriesAdaptor};
pub use element::{
    Capacitor, DiodePair, Resistor, ResistiveVoltageSource, VoltageSource, WdfLeaf, THERMAL_VOLTAGE,
};
pub use param::SmoothedParam;
