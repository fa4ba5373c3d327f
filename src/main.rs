use std::path::Path;

use clap::Parser;
use stacks::cli::commands::Cli;
use stacks::cli::handlers;
use stacks::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::read_config(cli.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init_logging(&config.logging);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: could not start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(handlers::dispatch(cli, config)) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
