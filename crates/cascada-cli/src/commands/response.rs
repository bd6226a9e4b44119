//! Frequency-response sweep across every filter topology.

use super::{ALL_SELECTORS, kind_label, order_label};
use anyhow::Context;
use cascada_analysis::{FrequencyResponse, write_response_csv};
use cascada_filters::{Filter, create};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ResponseArgs {
    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    fs: f64,

    /// Cutoff / center frequency in Hz
    #[arg(long, default_value = "1000")]
    cutoff: f64,

    /// FFT order (transform size is 2^order)
    #[arg(long, default_value = "14")]
    fft_order: u32,

    /// Include an unwrapped phase column
    #[arg(long)]
    phase: bool,

    /// Output directory for the CSV files
    #[arg(short, long, default_value = "frequency_responses")]
    out_dir: PathBuf,
}

pub fn run(args: ResponseArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    println!("Generating frequency response CSVs for all filter types...");
    println!("Output directory: {}", args.out_dir.display());

    for (kind, order) in ALL_SELECTORS {
        let mut filter = create(kind, order);
        filter.prepare(args.fs);
        filter.set_cutoff(args.cutoff);

        let response = if args.phase {
            FrequencyResponse::measure_with_phase(filter.as_mut(), args.fs, args.fft_order)
        } else {
            FrequencyResponse::measure(filter.as_mut(), args.fs, args.fft_order)
        };

        let filename = format!(
            "{}_{}order_cutoff{:.0}Hz.csv",
            kind_label(kind),
            order_label(order),
            filter.cutoff()
        );
        let path = args.out_dir.join(&filename);
        write_response_csv(&response, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Generated {filename}");
    }

    println!("Frequency response analysis complete.");
    Ok(())
}
