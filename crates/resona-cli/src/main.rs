//! Resona CLI - Command-line interface for the Resona room acoustics analyzer.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resona")]
#[command(author, version, about = "Resona room acoustics analyzer CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a room recording for reverberation and resonance
    Analyze(commands::analyze::AnalyzeArgs),

    /// Display WAV file information
    Info(commands::info::InfoArgs),

    /// Generate synthetic test recordings
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
