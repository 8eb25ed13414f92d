//! Synthetic monitor commands
//!
//! Monitors are addressed by an opaque string id rather than a numeric
//! one, so these commands pass the flag value through untouched.

use crate::api::resources::MonitorDraft;
use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateMonitor;

impl Command for CreateMonitor {
    fn name(&self) -> &'static str {
        "create_monitor"
    }

    fn description(&self) -> &'static str {
        "Create a synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::Name.required().describe("Name of the new monitor"),
            OptionKey::MonitorType.required(),
            OptionKey::Uri.required(),
            OptionKey::Frequency.required(),
            OptionKey::Locations.optional(),
            OptionKey::SlaThreshold.optional(),
            OptionKey::Status.optional().describe("Initial monitor status"),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let locations = args
            .value(OptionKey::Locations)
            .map(|list| {
                list.split(',')
                    .map(|loc| loc.trim().to_string())
                    .filter(|loc| !loc.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let draft = MonitorDraft {
            name: args.require(OptionKey::Name)?,
            monitor_type: args.require(OptionKey::MonitorType)?,
            uri: args.require(OptionKey::Uri)?,
            frequency: args.u32(OptionKey::Frequency)?,
            locations,
            sla_threshold: args.opt_f64(OptionKey::SlaThreshold)?,
            status: args.value(OptionKey::Status),
        };

        let monitor = ctx.api()?.monitors().create(&draft)?;
        info!(id = %monitor.id, name = %monitor.name, monitor_type = %monitor.monitor_type, "created monitor");
        Ok(())
    }
}

pub struct GetMonitors;

impl Command for GetMonitors {
    fn name(&self) -> &'static str {
        "get_monitors"
    }

    fn description(&self) -> &'static str {
        "List synthetic monitors"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        Vec::new()
    }

    fn execute(&self, _args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let monitors = ctx.api()?.monitors().list()?;
        info!(count = monitors.len(), "listed monitors");
        for monitor in &monitors {
            info!(
                id = %monitor.id,
                name = %monitor.name,
                status = %monitor.status,
                frequency = monitor.frequency,
                "monitor"
            );
        }
        Ok(())
    }
}

pub struct GetMonitor;

impl Command for GetMonitor {
    fn name(&self) -> &'static str {
        "get_monitor"
    }

    fn description(&self) -> &'static str {
        "Show a single synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::MonitorId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.require(OptionKey::MonitorId)?;
        match ctx.api()?.monitors().show(id)? {
            Some(monitor) => info!(
                id = %monitor.id,
                name = %monitor.name,
                monitor_type = %monitor.monitor_type,
                uri = monitor.uri.as_deref().unwrap_or("-"),
                status = %monitor.status,
                "monitor"
            ),
            None => error!(id, "monitor not found"),
        }
        Ok(())
    }
}

pub struct UpdateMonitor;

impl Command for UpdateMonitor {
    fn name(&self) -> &'static str {
        "update_monitor"
    }

    fn description(&self) -> &'static str {
        "Update a synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::MonitorId.required().describe("Id of the monitor to update"),
            OptionKey::Name.optional().describe("New name for the monitor"),
            OptionKey::Uri.optional(),
            OptionKey::Frequency.optional(),
            OptionKey::Status.optional(),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.require(OptionKey::MonitorId)?;
        let updated = ctx.api()?.monitors().update(
            id,
            args.value(OptionKey::Name),
            args.value(OptionKey::Uri),
            args.opt_u32(OptionKey::Frequency)?,
            args.value(OptionKey::Status),
        )?;
        match updated {
            Some(monitor) => info!(id = %monitor.id, name = %monitor.name, "updated monitor"),
            None => error!(id, "monitor not found"),
        }
        Ok(())
    }
}

pub struct DeleteMonitor;

impl Command for DeleteMonitor {
    fn name(&self) -> &'static str {
        "delete_monitor"
    }

    fn description(&self) -> &'static str {
        "Delete a synthetic monitor"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::MonitorId.required().describe("Id of the monitor to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.require(OptionKey::MonitorId)?;
        let api = ctx.api()?;
        match api.monitors().show(id)? {
            Some(monitor) => {
                api.monitors().delete(id)?;
                info!(id, name = %monitor.name, "deleted monitor");
            }
            None => error!(id, "monitor not found"),
        }
        Ok(())
    }
}
