//! Command-line interface
//!
//! Registry construction, option parsing, and the parse-then-execute
//! lifecycle. One process invocation drives exactly one command.

pub mod command;
pub mod context;
pub mod options;
pub mod parser;
pub mod registry;

pub use command::{run_command, Command, RunOutcome};
pub use context::CliContext;
pub use options::{OptionDescriptor, OptionKey, RegisteredOption};
pub use parser::ParsedArgs;
pub use registry::{CommandRegistry, DispatchOutcome};

use crate::errors::AppResult;
use std::process::ExitCode;

/// Main CLI application.
pub struct CliApp;

impl CliApp {
    /// Build the registry, dispatch the process arguments, and map the
    /// outcome to an exit code. Help and validation failures exit 0 (the
    /// contract inherited from the original tool); dispatch failures exit
    /// with failure status.
    pub fn run() -> AppResult<ExitCode> {
        let argv: Vec<String> = std::env::args().skip(1).collect();

        let registry = CommandRegistry::load()?;
        let mut ctx = CliContext::new()?;

        let outcome = registry.dispatch(&argv, &mut ctx)?;
        Ok(match outcome {
            DispatchOutcome::NoCommand | DispatchOutcome::UnknownCommand => ExitCode::FAILURE,
            DispatchOutcome::Ran(_) => ExitCode::SUCCESS,
        })
    }
}
