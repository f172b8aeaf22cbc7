//! exq command-line entry point

use clap::{Parser, Subcommand};
use exq_cli::commands::ExtractArgs;

/// Extract numbered questions from exam-paper text
#[derive(Debug, Parser)]
#[command(name = "exq", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract questions from extracted-text documents
    Extract(ExtractArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
