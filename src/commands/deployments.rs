//! Deployment commands
//!
//! Deployments are recorded against an application.

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateDeployment;

impl Command for CreateDeployment {
    fn name(&self) -> &'static str {
        "create_deployment"
    }

    fn description(&self) -> &'static str {
        "Record a deployment for an application"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::ApplicationId.required(),
            OptionKey::Revision.required(),
            OptionKey::Description.optional(),
            OptionKey::Changelog.optional(),
            OptionKey::User.optional(),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let application_id = args.u64(OptionKey::ApplicationId)?;
        let deployment = ctx.api()?.deployments().create(
            application_id,
            args.require(OptionKey::Revision)?,
            args.value(OptionKey::Description),
            args.value(OptionKey::Changelog),
            args.value(OptionKey::User),
        )?;
        info!(
            id = deployment.id,
            application_id,
            revision = %deployment.revision,
            "recorded deployment"
        );
        Ok(())
    }
}

pub struct GetDeployments;

impl Command for GetDeployments {
    fn name(&self) -> &'static str {
        "get_deployments"
    }

    fn description(&self) -> &'static str {
        "List the deployments of an application"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ApplicationId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let application_id = args.u64(OptionKey::ApplicationId)?;
        let deployments = ctx.api()?.deployments().list(application_id)?;
        info!(count = deployments.len(), application_id, "listed deployments");
        for deployment in &deployments {
            info!(
                id = deployment.id,
                revision = %deployment.revision,
                user = deployment.user.as_deref().unwrap_or("-"),
                "deployment"
            );
        }
        Ok(())
    }
}

pub struct DeleteDeployment;

impl Command for DeleteDeployment {
    fn name(&self) -> &'static str {
        "delete_deployment"
    }

    fn description(&self) -> &'static str {
        "Delete a recorded deployment"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::ApplicationId.required(),
            OptionKey::Id.required().describe("Id of the deployment to delete"),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let application_id = args.u64(OptionKey::ApplicationId)?;
        let id = args.u64(OptionKey::Id)?;
        if ctx.api()?.deployments().delete(application_id, id)? {
            info!(id, application_id, "deleted deployment");
        } else {
            error!(id, application_id, "deployment not found");
        }
        Ok(())
    }
}
