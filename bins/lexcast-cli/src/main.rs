mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = config::strategy(&cli).and_then(|strategy| match &cli.command {
        Commands::Demo(args) => cmd::demo::run(args, &strategy),
        Commands::Cast(args) => cmd::cast::run(args, &strategy).map(|v| println!("{v}")),
        Commands::Convert(args) => {
            cmd::cast::run_optional(args, &strategy).map(|v| println!("{v}"))
        }
        Commands::Batch(args) => cmd::batch::run(args, &strategy),
    });
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
