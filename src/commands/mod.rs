//! Concrete commands
//!
//! One module per remote resource. Every command is a unit struct
//! implementing `Command`; `all()` is the static registration table the
//! registry loads from. Order here is the order of the help listing.

pub mod alert_conditions;
pub mod alert_policies;
pub mod applications;
pub mod channels;
pub mod dashboards;
pub mod deployments;
pub mod key_transactions;
pub mod labels;
pub mod monitors;
pub mod plugins;
pub mod servers;
pub mod users;

use crate::cli::command::Command;

/// The full command table. Adding a command means adding one line here;
/// a duplicate name fails registry construction.
pub fn all() -> Vec<Box<dyn Command>> {
    vec![
        // Alert policies
        Box::new(alert_policies::CreateAlertPolicy),
        Box::new(alert_policies::GetAlertPolicies),
        Box::new(alert_policies::UpdateAlertPolicy),
        Box::new(alert_policies::DeleteAlertPolicy),
        // Alert conditions
        Box::new(alert_conditions::CreateAlertCondition),
        Box::new(alert_conditions::GetAlertConditions),
        Box::new(alert_conditions::UpdateAlertCondition),
        Box::new(alert_conditions::DeleteAlertCondition),
        // Notification channels
        Box::new(channels::CreateAlertChannel),
        Box::new(channels::GetAlertChannels),
        Box::new(channels::DeleteAlertChannel),
        Box::new(channels::AddPolicyChannel),
        Box::new(channels::RemovePolicyChannel),
        // Applications
        Box::new(applications::GetApplications),
        Box::new(applications::GetApplication),
        Box::new(applications::DeleteApplication),
        // Servers
        Box::new(servers::GetServers),
        Box::new(servers::GetServer),
        Box::new(servers::DeleteServer),
        // Synthetic monitors
        Box::new(monitors::CreateMonitor),
        Box::new(monitors::GetMonitors),
        Box::new(monitors::GetMonitor),
        Box::new(monitors::UpdateMonitor),
        Box::new(monitors::DeleteMonitor),
        // Labels
        Box::new(labels::CreateLabel),
        Box::new(labels::GetLabels),
        Box::new(labels::DeleteLabel),
        Box::new(labels::AddMonitorLabel),
        Box::new(labels::DeleteMonitorLabel),
        // Dashboards
        Box::new(dashboards::GetDashboards),
        Box::new(dashboards::GetDashboard),
        Box::new(dashboards::DeleteDashboard),
        // Users
        Box::new(users::GetUsers),
        Box::new(users::GetUser),
        // Deployments
        Box::new(deployments::CreateDeployment),
        Box::new(deployments::GetDeployments),
        Box::new(deployments::DeleteDeployment),
        // Key transactions
        Box::new(key_transactions::GetKeyTransactions),
        Box::new(key_transactions::GetKeyTransaction),
        // Plugins
        Box::new(plugins::GetPlugins),
        Box::new(plugins::GetPlugin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registered_names_are_pairwise_unique() {
        let commands = all();
        let names: HashSet<&'static str> = commands.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn test_no_command_registers_colliding_short_flags() {
        // Short flags may collide across catalog entries, but never within
        // the options one command registers (universal h/v/x included).
        for cmd in all() {
            let mut shorts = vec!['h', 'v', 'x'];
            for opt in cmd.options() {
                shorts.push(opt.key.descriptor().short);
            }
            let unique: HashSet<char> = shorts.iter().copied().collect();
            assert_eq!(
                unique.len(),
                shorts.len(),
                "command {} registers colliding short flags",
                cmd.name()
            );
        }
    }

    #[test]
    fn test_every_registered_option_has_help_text() {
        for cmd in all() {
            for opt in cmd.options() {
                assert!(
                    !opt.help_text().is_empty(),
                    "command {} registers an option without help text",
                    cmd.name()
                );
            }
        }
    }
}
