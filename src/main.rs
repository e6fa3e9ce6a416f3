//! Entry point for the `lscompile` CLI.
//!
//! Parses arguments, resolves settings, runs the listing and maps errors to
//! exit codes.

use lscompile::cli::Cli;
use lscompile::error::Result;
use lscompile::exit_codes;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() {
                exit_codes::USER_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            return ExitCode::from(code as u8);
        }
    };

    env_logger::builder()
        .filter_module(
            "lscompile",
            if cli.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    lscompile::run(&settings, io::stdout().lock())
}
