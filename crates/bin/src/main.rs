use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries documents and reports
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("serdict=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Check(args) => commands::check::run(args, cli.format),
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Pack(args) => commands::pack::pack(args),
        Commands::Unpack(args) => commands::pack::unpack(args),
    }
}
