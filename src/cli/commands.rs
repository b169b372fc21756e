use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt", about = concat!("tasktree v", env!("CARGO_PKG_VERSION"), " - grouped tasks in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of ./tasktree.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List groups with their tasks
    List(ListArgs),
    /// List groups with progress counts
    Groups,
    /// Write a commented default config file
    InitConfig(InitConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show the group with this id
    #[arg(long)]
    pub group: Option<u64>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Where to write the file (default: ./tasktree.toml)
    #[arg(long)]
    pub path: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
