//! Label commands
//!
//! Labels are addressed by their `Category:Name` key.

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateLabel;

impl Command for CreateLabel {
    fn name(&self) -> &'static str {
        "create_label"
    }

    fn description(&self) -> &'static str {
        "Create a label"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::Category.required(),
            OptionKey::Name.required().describe("Name of the new label"),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let label = ctx.api()?.labels().create(
            args.require(OptionKey::Category)?,
            args.require(OptionKey::Name)?,
        )?;
        info!(key = %label.key, "created label");
        Ok(())
    }
}

pub struct GetLabels;

impl Command for GetLabels {
    fn name(&self) -> &'static str {
        "get_labels"
    }

    fn description(&self) -> &'static str {
        "List labels"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        Vec::new()
    }

    fn execute(&self, _args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let labels = ctx.api()?.labels().list()?;
        info!(count = labels.len(), "listed labels");
        for label in &labels {
            info!(key = %label.key, category = %label.category, name = %label.name, "label");
        }
        Ok(())
    }
}

pub struct DeleteLabel;

impl Command for DeleteLabel {
    fn name(&self) -> &'static str {
        "delete_label"
    }

    fn description(&self) -> &'static str {
        "Delete a label"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Label.required().describe("Key of the label to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let key = args.require(OptionKey::Label)?;
        if ctx.api()?.labels().delete(key)? {
            info!(key, "deleted label");
        } else {
            error!(key, "label not found");
        }
        Ok(())
    }
}

pub struct AddMonitorLabel;

impl Command for AddMonitorLabel {
    fn name(&self) -> &'static str {
        "add_monitor_label"
    }

    fn description(&self) -> &'static str {
        "Attach a label to a synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::MonitorId.required(), OptionKey::Label.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let monitor_id = args.require(OptionKey::MonitorId)?;
        let label = args.require(OptionKey::Label)?;
        if ctx.api()?.monitors().add_label(monitor_id, label)? {
            info!(monitor_id, label, "attached label to monitor");
        } else {
            error!(monitor_id, label, "monitor not found");
        }
        Ok(())
    }
}

pub struct DeleteMonitorLabel;

impl Command for DeleteMonitorLabel {
    fn name(&self) -> &'static str {
        "delete_monitor_label"
    }

    fn description(&self) -> &'static str {
        "Detach a label from a synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::MonitorId.required(), OptionKey::Label.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let monitor_id = args.require(OptionKey::MonitorId)?;
        let label = args.require(OptionKey::Label)?;
        if ctx.api()?.monitors().remove_label(monitor_id, label)? {
            info!(monitor_id, label, "detached label from monitor");
        } else {
            error!(monitor_id, label, "monitor or label not found");
        }
        Ok(())
    }
}
