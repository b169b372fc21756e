use std::path::PathBuf;

use crate::cli::commands::InitConfigArgs;
use crate::io::config_io::{self, CONFIG_FILE_NAME};

/// Write the commented default config, to `--path` or ./tasktree.toml
pub fn cmd_init_config(args: InitConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?.join(CONFIG_FILE_NAME),
    };
    write_config_at(path, args.force)
}

fn write_config_at(path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    config_io::write_default_config(&path, force)?;
    log::info!("event=config_written path={}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
