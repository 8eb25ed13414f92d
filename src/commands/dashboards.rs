//! Dashboard commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetDashboards;

impl Command for GetDashboards {
    fn name(&self) -> &'static str {
        "get_dashboards"
    }

    fn description(&self) -> &'static str {
        "List dashboards, optionally filtered by title"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Title.optional().describe("Only list dashboards with this title")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let dashboards = ctx.api()?.dashboards().list(args.value(OptionKey::Title))?;
        info!(count = dashboards.len(), "listed dashboards");
        for dashboard in &dashboards {
            info!(id = dashboard.id, title = %dashboard.title, "dashboard");
        }
        Ok(())
    }
}

pub struct GetDashboard;

impl Command for GetDashboard {
    fn name(&self) -> &'static str {
        "get_dashboard"
    }

    fn description(&self) -> &'static str {
        "Show a single dashboard"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the dashboard")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        match ctx.api()?.dashboards().show(id)? {
            Some(dashboard) => info!(id = dashboard.id, title = %dashboard.title, "dashboard"),
            None => error!(id, "dashboard not found"),
        }
        Ok(())
    }
}

pub struct DeleteDashboard;

impl Command for DeleteDashboard {
    fn name(&self) -> &'static str {
        "delete_dashboard"
    }

    fn description(&self) -> &'static str {
        "Delete a dashboard"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the dashboard to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        let api = ctx.api()?;
        match api.dashboards().show(id)? {
            Some(dashboard) => {
                api.dashboards().delete(id)?;
                info!(id, title = %dashboard.title, "deleted dashboard");
            }
            None => error!(id, "dashboard not found"),
        }
        Ok(())
    }
}
