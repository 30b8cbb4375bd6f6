use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cryptobill")]
#[command(version, about = "Crypto Bill Pay terminal client", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep local storage in memory; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Mirror log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Interactive session on stdin/stdout (default)
    Run,
    /// Start, print the resolved screen, and exit
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the application directories
    Paths,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
