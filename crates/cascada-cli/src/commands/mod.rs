//! CLI subcommands.

pub mod response;
pub mod rtf;
pub mod waveform;

use cascada_filters::{FilterKind, FilterOrder};

/// Every (kind, order) selector the factory knows, in presentation order.
pub const ALL_SELECTORS: [(FilterKind, FilterOrder); 6] = [
    (FilterKind::LowPass, FilterOrder::First),
    (FilterKind::LowPass, FilterOrder::Second),
    (FilterKind::HighPass, FilterOrder::First),
    (FilterKind::HighPass, FilterOrder::Second),
    (FilterKind::BandPass, FilterOrder::First),
    (FilterKind::BandPass, FilterOrder::Second),
];

/// Human/file label for a filter kind.
pub fn kind_label(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::LowPass => "LowPass",
        FilterKind::HighPass => "HighPass",
        FilterKind::BandPass => "BandPass",
    }
}

/// Numeric label for a filter order.
pub fn order_label(order: FilterOrder) -> u32 {
    match order {
        FilterOrder::First => 1,
        FilterOrder::Second => 2,
    }
}
