//! prettylog CLI
//!
//! Command-line interface for the pretty console logger

use clap::{Parser, Subcommand};
use prettylog_core::diagnostics::{init_diagnostics, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "prettylog")]
#[command(about = "prettylog - Colourful, aligned console log lines", long_about = None)]
struct Cli {
    /// Report the logger's own diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one line of every kind
    Demo(commands::demo::DemoArgs),
    /// Print a single log line
    Emit(commands::emit::EmitArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_diagnostics(Profile::Development);
    }

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::Emit(args) => commands::emit::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
