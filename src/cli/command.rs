//! Command contract and lifecycle
//!
//! Every command implements `Command`: a stable name, a description, the
//! catalog options it accepts, and a single side-effecting operation. The
//! shared lifecycle lives in `run_command`, a free function rather than a
//! base class: it injects the universal options (help, verbose, API key),
//! tokenizes, short-circuits on help, enforces mandatory and enumerated
//! options, and only then runs the operation with an immutable
//! `ParsedArgs`.

use super::context::CliContext;
use super::options::{OptionKey, RegisteredOption};
use super::parser::{parse_tokens, ParsedArgs};
use crate::errors::{AppError, AppResult};
use tracing::error;

pub trait Command {
    /// Stable identifier used as the dispatch key.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// The catalog options this command accepts, beyond the universal
    /// three which the lifecycle injects.
    fn options(&self) -> Vec<RegisteredOption>;

    /// The single operation. Anticipated not-found outcomes are logged and
    /// return `Ok`; anything else propagates.
    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()>;
}

/// How one parse-then-execute cycle ended. Help and parse failures both
/// exit 0: the original tool funneled validation failures through the help
/// path and signalled them only via log severity, and that contract is
/// kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    HelpShown,
    ParseFailed,
    Completed,
}

const UNIVERSAL: [OptionKey; 3] = [OptionKey::Help, OptionKey::Verbose, OptionKey::ApiKey];

/// Usage text derived from the command's registered options.
pub fn usage(cmd: &dyn Command) -> String {
    let options = effective_options(cmd);
    let mut text = format!(
        "Usage: vigilctl {} [options]\n\n{}\n\nOptions:\n",
        cmd.name(),
        cmd.description()
    );
    for opt in &options {
        let desc = opt.key.descriptor();
        let flags = if desc.takes_value {
            format!("-{}, --{} <value>", desc.short, desc.long)
        } else {
            format!("-{}, --{}", desc.short, desc.long)
        };
        let required = if opt.required { " (required)" } else { "" };
        text.push_str(&format!("  {flags:<28} {}{required}\n", opt.help_text()));
    }
    text
}

fn effective_options(cmd: &dyn Command) -> Vec<RegisteredOption> {
    let mut options: Vec<RegisteredOption> =
        UNIVERSAL.iter().map(|key| key.optional()).collect();
    options.extend(cmd.options());
    options
}

/// Drive one command through its lifecycle.
pub fn run_command(
    cmd: &dyn Command,
    tokens: &[String],
    ctx: &mut CliContext,
) -> AppResult<RunOutcome> {
    let options = effective_options(cmd);

    let parsed = match parse_tokens(cmd.name(), &options, tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            print!("{}", usage(cmd));
            return Ok(RunOutcome::ParseFailed);
        }
    };

    if parsed.is_set(OptionKey::Help) {
        print!("{}", usage(cmd));
        return Ok(RunOutcome::HelpShown);
    }

    let verbose = parsed.is_set(OptionKey::Verbose);
    ctx.set_verbose(verbose);
    crate::logging::init(verbose, ctx.log_level());

    if let Some(key) = parsed.value(OptionKey::ApiKey) {
        ctx.set_api_key(key.to_string());
    }

    if let Err(err) = validate(&options, &parsed) {
        error!("{err}");
        print!("{}", usage(cmd));
        return Ok(RunOutcome::ParseFailed);
    }

    cmd.execute(&parsed, ctx)?;
    Ok(RunOutcome::Completed)
}

/// Mandatory-presence and enumerated-value checks against the catalog.
fn validate(options: &[RegisteredOption], parsed: &ParsedArgs) -> AppResult<()> {
    for opt in options {
        let desc = opt.key.descriptor();
        if opt.required && !parsed.is_set(opt.key) {
            return Err(AppError::missing_option(desc.long));
        }
        if let (Some(allowed), Some(value)) = (desc.allowed, parsed.value(opt.key)) {
            if !allowed.contains(&value) {
                return Err(AppError::invalid_option(desc.long, value, allowed));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubCommand {
        options: Vec<RegisteredOption>,
        executed: Arc<AtomicUsize>,
    }

    impl Command for StubCommand {
        fn name(&self) -> &'static str {
            "stub_command"
        }

        fn description(&self) -> &'static str {
            "Records whether execute ran"
        }

        fn options(&self) -> Vec<RegisteredOption> {
            self.options.clone()
        }

        fn execute(&self, _args: &ParsedArgs, _ctx: &CliContext) -> AppResult<()> {
            self.executed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn stub(options: Vec<RegisteredOption>) -> (StubCommand, Arc<AtomicUsize>) {
        let executed = Arc::new(AtomicUsize::new(0));
        (
            StubCommand {
                options,
                executed: executed.clone(),
            },
            executed,
        )
    }

    fn ctx() -> CliContext {
        CliContext::from_config(Config::default())
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_short_circuits_before_execute() {
        let (cmd, executed) = stub(vec![OptionKey::Id.required()]);
        let outcome = run_command(&cmd, &tokens(&["--help"]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::HelpShown);
        assert_eq!(executed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_mandatory_short_circuits() {
        let (cmd, executed) = stub(vec![OptionKey::Id.required()]);
        let outcome = run_command(&cmd, &tokens(&[]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert_eq!(executed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mandatory_present_reaches_execute() {
        let (cmd, executed) = stub(vec![OptionKey::Id.required()]);
        let outcome = run_command(&cmd, &tokens(&["-i", "42"]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(executed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_enumerated_value_outside_set_short_circuits() {
        let (cmd, executed) = stub(vec![OptionKey::Priority.optional()]);
        let outcome = run_command(&cmd, &tokens(&["--priority", "urgent"]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert_eq!(executed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_enumerated_value_inside_set_passes_through() {
        let (cmd, executed) = stub(vec![OptionKey::Priority.optional()]);
        let outcome =
            run_command(&cmd, &tokens(&["--priority", "critical"]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(executed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_flag_short_circuits() {
        let (cmd, executed) = stub(vec![]);
        let outcome = run_command(&cmd, &tokens(&["--bogus"]), &mut ctx()).unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert_eq!(executed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_api_key_flag_lands_in_context() {
        let (cmd, _) = stub(vec![]);
        let mut context = ctx();
        run_command(&cmd, &tokens(&["-x", "secret"]), &mut context).unwrap();
        assert!(context.api().is_ok());
    }

    #[test]
    fn test_usage_lists_declared_and_universal_options() {
        let (cmd, _) = stub(vec![
            OptionKey::Id.required().describe("Id of the thing"),
            OptionKey::Priority.optional(),
        ]);
        let text = usage(&cmd);
        assert!(text.contains("--help"));
        assert!(text.contains("--verbose"));
        assert!(text.contains("--x_api_key"));
        assert!(text.contains("-i, --id <value>"));
        assert!(text.contains("Id of the thing (required)"));
        assert!(text.contains("--priority"));
    }
}
