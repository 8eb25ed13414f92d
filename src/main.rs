use std::process::ExitCode;

use anyhow::Result;
use vigilctl::cli::CliApp;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    Ok(CliApp::run()?)
}
