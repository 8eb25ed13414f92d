//! Plugin commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetPlugins;

impl Command for GetPlugins {
    fn name(&self) -> &'static str {
        "get_plugins"
    }

    fn description(&self) -> &'static str {
        "List installed plugins, optionally filtered by name"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Name.optional().describe("Only list plugins with this name")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let plugins = ctx.api()?.plugins().list(args.value(OptionKey::Name))?;
        info!(count = plugins.len(), "listed plugins");
        for plugin in &plugins {
            info!(id = plugin.id, guid = %plugin.guid, name = %plugin.name, "plugin");
        }
        Ok(())
    }
}

pub struct GetPlugin;

impl Command for GetPlugin {
    fn name(&self) -> &'static str {
        "get_plugin"
    }

    fn description(&self) -> &'static str {
        "Show a single plugin"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the plugin")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        match ctx.api()?.plugins().show(id)? {
            Some(plugin) => info!(
                id = plugin.id,
                guid = %plugin.guid,
                name = %plugin.name,
                publisher = plugin.publisher.as_deref().unwrap_or("-"),
                "plugin"
            ),
            None => error!(id, "plugin not found"),
        }
        Ok(())
    }
}
