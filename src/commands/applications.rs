//! Application commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetApplications;

impl Command for GetApplications {
    fn name(&self) -> &'static str {
        "get_applications"
    }

    fn description(&self) -> &'static str {
        "List monitored applications, optionally filtered by name"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Name.optional().describe("Only list applications with this name")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let applications = ctx.api()?.applications().list(args.value(OptionKey::Name))?;
        info!(count = applications.len(), "listed applications");
        for app in &applications {
            info!(
                id = app.id,
                name = %app.name,
                health = app.health_status.as_deref().unwrap_or("-"),
                reporting = app.reporting,
                "application"
            );
        }
        Ok(())
    }
}

pub struct GetApplication;

impl Command for GetApplication {
    fn name(&self) -> &'static str {
        "get_application"
    }

    fn description(&self) -> &'static str {
        "Show a single application"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ApplicationId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ApplicationId)?;
        match ctx.api()?.applications().show(id)? {
            Some(app) => info!(
                id = app.id,
                name = %app.name,
                language = app.language.as_deref().unwrap_or("-"),
                health = app.health_status.as_deref().unwrap_or("-"),
                "application"
            ),
            None => error!(id, "application not found"),
        }
        Ok(())
    }
}

pub struct DeleteApplication;

impl Command for DeleteApplication {
    fn name(&self) -> &'static str {
        "delete_application"
    }

    fn description(&self) -> &'static str {
        "Remove an application that is no longer reporting"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ApplicationId.required().describe("Id of the application to remove")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ApplicationId)?;
        let api = ctx.api()?;
        match api.applications().show(id)? {
            Some(app) => {
                api.applications().delete(id)?;
                info!(id, name = %app.name, "deleted application");
            }
            None => error!(id, "application not found"),
        }
        Ok(())
    }
}
