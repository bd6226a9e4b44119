//! Cascada CLI - offline driver for the wave digital filter models.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cascada")]
#[command(author, version, about = "Wave digital RC filter workbench", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure frequency responses of every filter topology
    Response(commands::response::ResponseArgs),

    /// Benchmark real-time factors of every filter topology
    Rtf(commands::rtf::RtfArgs),

    /// Drive the diode clipper with a sine and export the waveforms
    Waveform(commands::waveform::WaveformArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Response(args) => commands::response::run(args),
        Commands::Rtf(args) => commands::rtf::run(args),
        Commands::Waveform(args) => commands::waveform::run(args),
    }
}
