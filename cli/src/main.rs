use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;

use args::{Cli, Commands};
use cli::commands::{compile, disassemble, run};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match (&cli.command, &cli.path) {
        (Some(Commands::Run { path }), _) | (None, Some(path)) => run::run_file(path),
        (Some(Commands::Disassemble { path }), _) => disassemble::disassemble_file(path),
        (Some(Commands::Compile { path, output }), _) => {
            compile::compile_file(path, output.as_deref())
        }
        (None, None) => Ok(()),
    }
}
