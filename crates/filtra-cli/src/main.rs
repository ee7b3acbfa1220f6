//! Filtra CLI - design biquad filters and inspect their frequency response.

mod commands;
mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "filtra")]
#[command(author, version, about = "Biquad filter designer and response inspector", long_about = None)]
struct Cli {
    /// Verbose logging (or set RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design filter coefficients from cutoff, Q, and gain
    Design(commands::design::DesignArgs),

    /// Evaluate and display the frequency-magnitude response
    Response(commands::response::ResponseArgs),

    /// List filter types and the parameters each one uses
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Design(args) => commands::design::run(&args),
        Commands::Response(args) => commands::response::run(&args),
        Commands::Types => {
            commands::types::run();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
