//! User commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetUsers;

impl Command for GetUsers {
    fn name(&self) -> &'static str {
        "get_users"
    }

    fn description(&self) -> &'static str {
        "List account users, optionally filtered by email"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Email.optional().describe("Only list users with this email")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let users = ctx.api()?.users().list(args.value(OptionKey::Email))?;
        info!(count = users.len(), "listed users");
        for user in &users {
            info!(
                id = user.id,
                email = %user.email,
                role = user.role.as_deref().unwrap_or("-"),
                "user"
            );
        }
        Ok(())
    }
}

pub struct GetUser;

impl Command for GetUser {
    fn name(&self) -> &'static str {
        "get_user"
    }

    fn description(&self) -> &'static str {
        "Show a single account user"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the user")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        match ctx.api()?.users().show(id)? {
            Some(user) => info!(
                id = user.id,
                email = %user.email,
                first_name = user.first_name.as_deref().unwrap_or("-"),
                last_name = user.last_name.as_deref().unwrap_or("-"),
                "user"
            ),
            None => error!(id, "user not found"),
        }
        Ok(())
    }
}
