use clap::{Parser, Subcommand};
use flatknn_cli::commands::flat::{self, FlatArgs};
use flatknn_cli::commands::table::{self, TableArgs};
use flatknn_cli::commands::ScanOpts;
use flatknn_cli::telemetry;

#[derive(Parser)]
#[command(name = "flatknn")]
#[command(about = "Exact k-nearest-neighbor search under squared L2", long_about = None)]
struct Cli {
    #[command(flatten)]
    scan: ScanOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a flat n*d dataset; prints zero-based row indices
    Flat(FlatArgs),
    /// Search every row of a row file; prints row identifiers
    Table(TableArgs),
}

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Flat(args) => flat::run(args, &cli.scan),
        Commands::Table(args) => table::run(args, &cli.scan),
    }
}
