use std::io;
use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing::Level;
use library_console::catalog::controller::ConsoleController;
use library_console::catalog::factory::create_catalog_service;
use library_console::core::domain::Configuration;
use library_console::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "library", about = "Console manager for a book catalog")]
struct CliArgs {
    /// Default file used by save and load, .bin/.ser for binary, json otherwise.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Load the default file at start-up when it exists.
    #[arg(long)]
    load: bool,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let mut config = Configuration::from_env();
    if let Some(file) = cli_args.file {
        config.data_file = file;
    }
    config.autoload = cli_args.load;
    let level = if cli_args.verbose { Level::DEBUG } else { config.tracing_level() };
    setup_tracing(level);

    let catalog_service = create_catalog_service(&config);
    let stdin = io::stdin();
    let mut controller = ConsoleController::new(config, catalog_service, stdin.lock(), io::stdout());
    controller.run()?;
    Ok(())
}
