//! Command registry and dispatcher
//!
//! Commands register through a static table rather than being discovered
//! at runtime, so duplicate names are a load-time error instead of a
//! silent last-write-wins. The registry preserves insertion order for the
//! help listing and routes `argv[0]` to exactly one command.

use super::command::{run_command, Command, RunOutcome};
use super::context::CliContext;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<&'static str, usize>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.len())
            .field("index", &self.index)
            .finish()
    }
}

/// How dispatch ended. `NoCommand` and `UnknownCommand` exit with failure
/// status; a ran command's exit behavior is decided by its `RunOutcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    NoCommand,
    UnknownCommand,
    Ran(RunOutcome),
}

impl CommandRegistry {
    /// Build the registry from the full command table.
    pub fn load() -> AppResult<Self> {
        Self::from_commands(crate::commands::all())
    }

    pub fn from_commands(list: Vec<Box<dyn Command>>) -> AppResult<Self> {
        let mut commands: Vec<Box<dyn Command>> = Vec::with_capacity(list.len());
        let mut index = HashMap::with_capacity(list.len());
        for cmd in list {
            let name = cmd.name();
            if index.insert(name, commands.len()).is_some() {
                return Err(AppError::DuplicateCommand {
                    name: name.to_string(),
                });
            }
            commands.push(cmd);
        }
        Ok(CommandRegistry { commands, index })
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index.get(name).map(|&i| self.commands[i].as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every registered command name, one per line, in registration order.
    pub fn help_listing(&self) -> String {
        let mut listing = String::new();
        for name in self.names() {
            listing.push_str("  ");
            listing.push_str(name);
            listing.push('\n');
        }
        listing
    }

    /// Route one invocation: `argv[0]` is the command name, the rest is
    /// handed to the matched command's lifecycle.
    pub fn dispatch(&self, argv: &[String], ctx: &mut CliContext) -> AppResult<DispatchOutcome> {
        let Some(name) = argv.first() else {
            eprintln!("No command provided. Available commands:");
            eprint!("{}", self.help_listing());
            return Ok(DispatchOutcome::NoCommand);
        };

        match self.lookup(name) {
            Some(cmd) => Ok(DispatchOutcome::Ran(run_command(cmd, &argv[1..], ctx)?)),
            None => {
                eprintln!("Unknown command: {name}. Available commands:");
                eprint!("{}", self.help_listing());
                Ok(DispatchOutcome::UnknownCommand)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::options::RegisteredOption;
    use crate::cli::parser::ParsedArgs;
    use crate::config::Config;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NamedStub {
        name: &'static str,
        executed: Arc<AtomicUsize>,
    }

    impl Command for NamedStub {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "stub"
        }

        fn options(&self) -> Vec<RegisteredOption> {
            Vec::new()
        }

        fn execute(&self, _args: &ParsedArgs, _ctx: &CliContext) -> AppResult<()> {
            self.executed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn stub(name: &'static str) -> (Box<dyn Command>, Arc<AtomicUsize>) {
        let executed = Arc::new(AtomicUsize::new(0));
        (
            Box::new(NamedStub {
                name,
                executed: executed.clone(),
            }),
            executed,
        )
    }

    fn ctx() -> CliContext {
        CliContext::from_config(Config::default())
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let (a, _) = stub("list_things");
        let (b, _) = stub("list_things");
        let err = CommandRegistry::from_commands(vec![a, b]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateCommand { name } if name == "list_things"));
    }

    #[test]
    fn test_dispatch_invokes_exactly_the_named_command() {
        let (a, a_runs) = stub("create_alert_policy");
        let (b, b_runs) = stub("list_users");
        let registry = CommandRegistry::from_commands(vec![a, b]).unwrap();

        let outcome = registry
            .dispatch(&argv(&["create_alert_policy"]), &mut ctx())
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Ran(RunOutcome::Completed));
        assert_eq!(a_runs.load(Ordering::SeqCst), 1);
        assert_eq!(b_runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_command_touches_nothing() {
        let (a, a_runs) = stub("create_alert_policy");
        let registry = CommandRegistry::from_commands(vec![a]).unwrap();

        let outcome = registry.dispatch(&argv(&["frobnicate"]), &mut ctx()).unwrap();

        assert_eq!(outcome, DispatchOutcome::UnknownCommand);
        assert_eq!(a_runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_argv_touches_nothing() {
        let (a, a_runs) = stub("create_alert_policy");
        let registry = CommandRegistry::from_commands(vec![a]).unwrap();

        let outcome = registry.dispatch(&argv(&[]), &mut ctx()).unwrap();

        assert_eq!(outcome, DispatchOutcome::NoCommand);
        assert_eq!(a_runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listing_preserves_registration_order() {
        let (a, _) = stub("zeta");
        let (b, _) = stub("alpha");
        let registry = CommandRegistry::from_commands(vec![a, b]).unwrap();
        assert_eq!(registry.help_listing(), "  zeta\n  alpha\n");
    }

    #[test]
    fn test_remaining_tokens_reach_the_command() {
        let (a, a_runs) = stub("delete_alert_policy");
        let registry = CommandRegistry::from_commands(vec![a]).unwrap();

        // -v is a universal option, so parsing succeeds and execute runs.
        let outcome = registry
            .dispatch(&argv(&["delete_alert_policy", "-v"]), &mut ctx())
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Ran(RunOutcome::Completed));
        assert_eq!(a_runs.load(Ordering::SeqCst), 1);
    }
}
