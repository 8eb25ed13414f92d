//! Server commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetServers;

impl Command for GetServers {
    fn name(&self) -> &'static str {
        "get_servers"
    }

    fn description(&self) -> &'static str {
        "List monitored servers, optionally filtered by name"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Name.optional().describe("Only list servers with this name")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let servers = ctx.api()?.servers().list(args.value(OptionKey::Name))?;
        info!(count = servers.len(), "listed servers");
        for server in &servers {
            info!(
                id = server.id,
                name = %server.name,
                host = server.host.as_deref().unwrap_or("-"),
                reporting = server.reporting,
                "server"
            );
        }
        Ok(())
    }
}

pub struct GetServer;

impl Command for GetServer {
    fn name(&self) -> &'static str {
        "get_server"
    }

    fn description(&self) -> &'static str {
        "Show a single server"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ServerId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ServerId)?;
        match ctx.api()?.servers().show(id)? {
            Some(server) => info!(
                id = server.id,
                name = %server.name,
                host = server.host.as_deref().unwrap_or("-"),
                health = server.health_status.as_deref().unwrap_or("-"),
                "server"
            ),
            None => error!(id, "server not found"),
        }
        Ok(())
    }
}

pub struct DeleteServer;

impl Command for DeleteServer {
    fn name(&self) -> &'static str {
        "delete_server"
    }

    fn description(&self) -> &'static str {
        "Remove a server that is no longer reporting"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ServerId.required().describe("Id of the server to remove")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ServerId)?;
        let api = ctx.api()?;
        match api.servers().show(id)? {
            Some(server) => {
                api.servers().delete(id)?;
                info!(id, name = %server.name, "deleted server");
            }
            None => error!(id, "server not found"),
        }
        Ok(())
    }
}
