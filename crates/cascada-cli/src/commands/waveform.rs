//! Diode-clipper waveform capture: sine in, clipped signal out.

use anyhow::Context;
use cascada_analysis::{signal, write_waveform_csv};
use cascada_filters::DiodeClipper;
use cascada_io::write_wav;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct WaveformArgs {
    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    fs: f64,

    /// Signal duration in seconds
    #[arg(long, default_value = "0.01")]
    duration: f64,

    /// Sine frequency in Hz
    #[arg(long, default_value = "440")]
    freq: f64,

    /// Peak amplitude
    #[arg(long, default_value = "1.0")]
    amp: f64,

    /// Clipper cutoff frequency in Hz
    #[arg(long, default_value = "1000")]
    cutoff: f64,

    /// Diode saturation current in A
    #[arg(long, default_value = "2.52e-9")]
    saturation_current: f64,

    /// Number of series diodes per leg
    #[arg(long, default_value = "2.0")]
    diodes: f64,

    /// Also export WAV files
    #[arg(long)]
    wav: bool,

    /// Output directory
    #[arg(short, long, default_value = "waveform_analysis")]
    out_dir: PathBuf,
}

pub fn run(args: WaveformArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    println!("Generating waveform analysis for the diode clipper...");
    println!("Output directory: {}", args.out_dir.display());

    let input = signal::sine(args.freq, args.amp, args.duration, args.fs);

    let mut clipper = DiodeClipper::new();
    clipper.prepare(args.fs);
    // One-shot offline run: skip the ramps
    clipper.set_parameters(args.cutoff, args.saturation_current, args.diodes, true);

    let output: Vec<f64> = input.iter().map(|&x| clipper.process_sample(x)).collect();

    let stem = format!(
        "DiodeClipper_Sine_{:.0}Hz_cutoff{:.0}_diodes{:.0}",
        args.freq, args.cutoff, args.diodes
    );

    let csv_path = args.out_dir.join(format!("{stem}.csv"));
    write_waveform_csv(args.fs, &input, &output, &csv_path)
        .with_context(|| format!("writing {}", csv_path.display()))?;
    println!("Generated {}", csv_path.display());

    if args.wav {
        let input_path = args.out_dir.join(format!("{stem}_input.wav"));
        let output_path = args.out_dir.join(format!("{stem}_output.wav"));
        write_wav(&input_path, &input, args.fs as u32)?;
        write_wav(&output_path, &output, args.fs as u32)?;
        println!("Generated {}", input_path.display());
        println!("Generated {}", output_path.display());
    }

    println!("Waveform analysis complete.");
    Ok(())
}
