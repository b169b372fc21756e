use clap::Parser;
use tasktree::cli::commands::Cli;
use tasktree::cli::handlers;
use tasktree::io::{config_io, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;

    // No subcommand → TUI, which owns the terminal
    let interactive = cli.command.is_none();
    let _logger = logging::init_logging(&config.log, interactive)?;

    match cli.command {
        None => tasktree::tui::run(&config),
        Some(command) => handlers::dispatch(command, cli.json),
    }
}
