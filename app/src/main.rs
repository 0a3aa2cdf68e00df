use std::io;
use std::process::ExitCode;

use clap::Parser;
use rickdex::config::init_logging;
use rickdex::{AppError, Config, Shell, UreqTransport};
use rickdex_core::CharacterClient;

fn run(config: Config) -> Result<(), AppError> {
    init_logging(&config)?;
    tracing::info!(base_url = %config.base_url, start = %config.start, "starting");

    let mut shell = Shell::new(CharacterClient::new(&config.base_url), UreqTransport::new());
    let stdin = io::stdin();
    shell.run(&config.start, stdin.lock(), io::stdout())
}

fn main() -> ExitCode {
    match run(Config::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rickdex: {e}");
            ExitCode::FAILURE
        }
    }
}
