//! Real-time-factor benchmark across every filter topology.

use super::{ALL_SELECTORS, kind_label, order_label};
use cascada_analysis::real_time_factor;
use cascada_filters::{Filter, create};
use clap::Args;

#[derive(Args)]
pub struct RtfArgs {
    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    fs: f64,

    /// Cutoff / center frequency in Hz
    #[arg(long, default_value = "1000")]
    cutoff: f64,

    /// Duration of the synthetic test signal in seconds
    #[arg(long, default_value = "30")]
    seconds: f64,
}

pub fn run(args: RtfArgs) -> anyhow::Result<()> {
    println!("Analyzing real-time factors for all filter types...");
    println!("Test duration: {} seconds", args.seconds);
    println!("Sample rate: {} Hz", args.fs);
    println!("Cutoff frequency: {} Hz", args.cutoff);
    println!("\nResults:\n");

    for (kind, order) in ALL_SELECTORS {
        let mut filter = create(kind, order);
        filter.prepare(args.fs);
        filter.set_cutoff(args.cutoff);

        let report = real_time_factor(filter.as_mut(), args.fs, args.seconds);
        println!(
            "{} ({}{} order): RTF = {:.6}",
            kind_label(kind),
            order_label(order),
            ordinal_suffix(order_label(order)),
            report.ratio
        );
    }

    println!("\nReal-time factor analysis complete.");
    Ok(())
}

fn ordinal_suffix(n: u32) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
