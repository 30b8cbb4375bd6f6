use std::process::ExitCode;

use clap::Parser;
use cryptobill_lib::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cryptobill_lib::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
