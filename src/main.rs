mod cli;
mod cli_cmds;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub(crate) use cli::{ConfigAction, ItemAction, OutputArgs, SavedAction};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    cli::run(cli)
}
