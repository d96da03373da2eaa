//! kermod CLI
//!
//! Command-line interface for inspecting and validating portable model
//! records.

use clap::{Parser, Subcommand};
use kermod_core::logging_facility::{self, Profile};
use kermod_core_types::RequestId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kermod")]
#[command(about = "kermod - metamodel inspection and validation", long_about = None)]
struct Cli {
    /// Emit debug logs while running
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the validation engine over a model record file
    Validate(commands::validate::ValidateArgs),
    /// Summarize a model record file
    Inspect(commands::inspect::InspectArgs),
    /// Check the serialization round-trip law on a model record file
    Roundtrip(commands::roundtrip::RoundtripArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Test
    });

    // Field names follow the canonical logging schema in kermod-core-types.
    let request_id = RequestId::new();
    let span = tracing::info_span!("kermod_cli", request_id = %request_id, component = "cli");
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Roundtrip(args) => commands::roundtrip::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
