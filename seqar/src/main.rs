mod cli;
mod commands;
mod error;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Commands::Create(args) => commands::create(args, cli.verbose)?,
        Commands::Extract(args) => commands::extract(args, cli.verbose)?,
        Commands::List => commands::list()?,
    };

    Ok(())
}

fn main() {
    // Logs go to stderr; stdout may be carrying the archive.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_iter(wild::args_os());

    if let Err(e) = run(cli) {
        eprintln!("seqar: {:#}", e);
        std::process::exit(1);
    }
}
