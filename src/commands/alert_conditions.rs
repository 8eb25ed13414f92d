//! Alert condition commands
//!
//! Conditions hang off a policy: creation and listing address the policy,
//! update and delete address the condition itself.

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateAlertCondition;

impl Command for CreateAlertCondition {
    fn name(&self) -> &'static str {
        "create_alert_condition"
    }

    fn description(&self) -> &'static str {
        "Create an alert condition under a policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::PolicyId.required().describe("Policy the condition belongs to"),
            OptionKey::Name.required().describe("Name of the new condition"),
            OptionKey::ConditionType.required(),
            OptionKey::Metric.required(),
            OptionKey::Threshold.required(),
            OptionKey::Priority.optional(),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let policy_id = args.u64(OptionKey::PolicyId)?;
        let condition = ctx.api()?.alert_conditions().create(
            policy_id,
            args.require(OptionKey::Name)?,
            args.require(OptionKey::ConditionType)?,
            args.require(OptionKey::Metric)?,
            args.f64(OptionKey::Threshold)?,
            args.value(OptionKey::Priority),
        )?;
        info!(id = condition.id, name = %condition.name, policy_id, "created alert condition");
        Ok(())
    }
}

pub struct GetAlertConditions;

impl Command for GetAlertConditions {
    fn name(&self) -> &'static str {
        "get_alert_conditions"
    }

    fn description(&self) -> &'static str {
        "List the alert conditions of a policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::PolicyId.required().describe("Policy whose conditions to list")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let policy_id = args.u64(OptionKey::PolicyId)?;
        let conditions = ctx.api()?.alert_conditions().list(policy_id)?;
        info!(count = conditions.len(), policy_id, "listed alert conditions");
        for condition in &conditions {
            info!(
                id = condition.id,
                name = %condition.name,
                condition_type = %condition.condition_type,
                enabled = condition.enabled,
                "alert condition"
            );
        }
        Ok(())
    }
}

pub struct UpdateAlertCondition;

impl Command for UpdateAlertCondition {
    fn name(&self) -> &'static str {
        "update_alert_condition"
    }

    fn description(&self) -> &'static str {
        "Update an alert condition"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::ConditionId.required().describe("Id of the condition to update"),
            OptionKey::Name.optional().describe("New name for the condition"),
            OptionKey::Threshold.optional(),
            OptionKey::Priority.optional(),
            OptionKey::Status.optional().describe("enabled or disabled"),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ConditionId)?;
        let enabled = args.value(OptionKey::Status).map(|s| s == "enabled");
        let updated = ctx.api()?.alert_conditions().update(
            id,
            args.value(OptionKey::Name),
            args.opt_f64(OptionKey::Threshold)?,
            args.value(OptionKey::Priority),
            enabled,
        )?;
        match updated {
            Some(condition) => info!(id, name = %condition.name, "updated alert condition"),
            None => error!(id, "alert condition not found"),
        }
        Ok(())
    }
}

pub struct DeleteAlertCondition;

impl Command for DeleteAlertCondition {
    fn name(&self) -> &'static str {
        "delete_alert_condition"
    }

    fn description(&self) -> &'static str {
        "Delete an alert condition"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ConditionId.required().describe("Id of the condition to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ConditionId)?;
        if ctx.api()?.alert_conditions().delete(id)? {
            info!(id, "deleted alert condition");
        } else {
            error!(id, "alert condition not found");
        }
        Ok(())
    }
}
