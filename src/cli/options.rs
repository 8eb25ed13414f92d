//! Option catalog
//!
//! The closed set of flag definitions commands draw from. Each catalog
//! entry fixes the short flag, long flag, whether a value is expected, the
//! default help text, and (for enumerated options) the allowed values.
//! Short flags are deliberately reused across entries (`-c` is both
//! `condition_id` and `channel_id`, `-s` both `server_id` and `status`,
//! `-t` covers the three type options); uniqueness only matters among the
//! options a single command registers, and no command registers a
//! colliding pair.

/// A flag definition from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    pub short: char,
    pub long: &'static str,
    pub takes_value: bool,
    pub description: &'static str,
    pub allowed: Option<&'static [&'static str]>,
}

/// Every option any command may register. `descriptor()` is total over
/// this enum, so an unknown option name cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Help,
    Verbose,
    ApiKey,
    Id,
    Name,
    PolicyId,
    ConditionId,
    ChannelId,
    ChannelType,
    ConditionType,
    Priority,
    IncidentPreference,
    Status,
    ApplicationId,
    ServerId,
    MonitorId,
    MonitorType,
    Frequency,
    Uri,
    Email,
    Locations,
    SlaThreshold,
    Metric,
    Threshold,
    Label,
    Category,
    Revision,
    Description,
    Changelog,
    User,
    Title,
}

impl OptionKey {
    pub const fn descriptor(self) -> OptionDescriptor {
        use OptionKey::*;
        match self {
            Help => OptionDescriptor {
                short: 'h',
                long: "help",
                takes_value: false,
                description: "Show this help text",
                allowed: None,
            },
            Verbose => OptionDescriptor {
                short: 'v',
                long: "verbose",
                takes_value: false,
                description: "Enable verbose logging",
                allowed: None,
            },
            ApiKey => OptionDescriptor {
                short: 'x',
                long: "x_api_key",
                takes_value: true,
                description: "API key used to authenticate against the Vigil API",
                allowed: None,
            },
            Id => OptionDescriptor {
                short: 'i',
                long: "id",
                takes_value: true,
                description: "Id of the entity",
                allowed: None,
            },
            Name => OptionDescriptor {
                short: 'n',
                long: "name",
                takes_value: true,
                description: "Name of the entity",
                allowed: None,
            },
            PolicyId => OptionDescriptor {
                short: 'p',
                long: "policy_id",
                takes_value: true,
                description: "Id of the alert policy",
                allowed: None,
            },
            ConditionId => OptionDescriptor {
                short: 'c',
                long: "condition_id",
                takes_value: true,
                description: "Id of the alert condition",
                allowed: None,
            },
            ChannelId => OptionDescriptor {
                short: 'c',
                long: "channel_id",
                takes_value: true,
                description: "Id of the notification channel",
                allowed: None,
            },
            ChannelType => OptionDescriptor {
                short: 't',
                long: "channel_type",
                takes_value: true,
                description: "Type of the notification channel",
                allowed: Some(&["email", "slack", "webhook", "pagerduty"]),
            },
            ConditionType => OptionDescriptor {
                short: 't',
                long: "condition_type",
                takes_value: true,
                description: "Type of the alert condition",
                allowed: Some(&["apm_app_metric", "servers_metric", "browser_metric"]),
            },
            Priority => OptionDescriptor {
                short: 'r',
                long: "priority",
                takes_value: true,
                description: "Priority of the alert condition",
                allowed: Some(&["critical", "warning"]),
            },
            IncidentPreference => OptionDescriptor {
                short: 'f',
                long: "incident_preference",
                takes_value: true,
                description: "How incidents are rolled up for the policy",
                allowed: Some(&["per_policy", "per_condition", "per_condition_and_target"]),
            },
            Status => OptionDescriptor {
                short: 's',
                long: "status",
                takes_value: true,
                description: "Status of the entity",
                allowed: Some(&["enabled", "disabled", "muted"]),
            },
            ApplicationId => OptionDescriptor {
                short: 'a',
                long: "application_id",
                takes_value: true,
                description: "Id of the application",
                allowed: None,
            },
            ServerId => OptionDescriptor {
                short: 's',
                long: "server_id",
                takes_value: true,
                description: "Id of the server",
                allowed: None,
            },
            MonitorId => OptionDescriptor {
                short: 'm',
                long: "monitor_id",
                takes_value: true,
                description: "Id of the synthetic monitor",
                allowed: None,
            },
            MonitorType => OptionDescriptor {
                short: 't',
                long: "monitor_type",
                takes_value: true,
                description: "Type of the synthetic monitor",
                allowed: Some(&["simple", "browser", "script_api", "script_browser"]),
            },
            Frequency => OptionDescriptor {
                short: 'q',
                long: "frequency",
                takes_value: true,
                description: "Check frequency in minutes",
                allowed: Some(&["1", "5", "10", "15", "30", "60"]),
            },
            Uri => OptionDescriptor {
                short: 'u',
                long: "uri",
                takes_value: true,
                description: "URI the monitor checks",
                allowed: None,
            },
            Email => OptionDescriptor {
                short: 'e',
                long: "email",
                takes_value: true,
                description: "Email address",
                allowed: None,
            },
            Locations => OptionDescriptor {
                short: 'z',
                long: "locations",
                takes_value: true,
                description: "Comma-separated list of monitor locations",
                allowed: None,
            },
            SlaThreshold => OptionDescriptor {
                short: 'o',
                long: "sla_threshold",
                takes_value: true,
                description: "Apdex threshold for the monitor SLA report",
                allowed: None,
            },
            Metric => OptionDescriptor {
                short: 'M',
                long: "metric",
                takes_value: true,
                description: "Metric the condition watches",
                allowed: None,
            },
            Threshold => OptionDescriptor {
                short: 'T',
                long: "threshold",
                takes_value: true,
                description: "Threshold value that opens a violation",
                allowed: None,
            },
            Label => OptionDescriptor {
                short: 'b',
                long: "label",
                takes_value: true,
                description: "Label in Category:Name form",
                allowed: None,
            },
            Category => OptionDescriptor {
                short: 'C',
                long: "category",
                takes_value: true,
                description: "Label category",
                allowed: None,
            },
            Revision => OptionDescriptor {
                short: 'R',
                long: "revision",
                takes_value: true,
                description: "Deployment revision",
                allowed: None,
            },
            Description => OptionDescriptor {
                short: 'd',
                long: "description",
                takes_value: true,
                description: "Free-form description",
                allowed: None,
            },
            Changelog => OptionDescriptor {
                short: 'g',
                long: "changelog",
                takes_value: true,
                description: "Changelog entry for the deployment",
                allowed: None,
            },
            User => OptionDescriptor {
                short: 'U',
                long: "user",
                takes_value: true,
                description: "User recorded as responsible for the deployment",
                allowed: None,
            },
            Title => OptionDescriptor {
                short: 'L',
                long: "title",
                takes_value: true,
                description: "Title of the dashboard",
                allowed: None,
            },
        }
    }

    pub const fn long(self) -> &'static str {
        self.descriptor().long
    }

    pub const fn required(self) -> RegisteredOption {
        RegisteredOption {
            key: self,
            required: true,
            description: None,
        }
    }

    pub const fn optional(self) -> RegisteredOption {
        RegisteredOption {
            key: self,
            required: false,
            description: None,
        }
    }
}

/// One catalog option as registered by a command: whether it is mandatory
/// for that command, plus an optional help-text override.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredOption {
    pub key: OptionKey,
    pub required: bool,
    pub description: Option<&'static str>,
}

impl RegisteredOption {
    pub const fn describe(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    /// Override if registered with one, else the catalog default.
    pub fn help_text(&self) -> &'static str {
        self.description.unwrap_or(self.key.descriptor().description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[OptionKey] = &[
        OptionKey::Help,
        OptionKey::Verbose,
        OptionKey::ApiKey,
        OptionKey::Id,
        OptionKey::Name,
        OptionKey::PolicyId,
        OptionKey::ConditionId,
        OptionKey::ChannelId,
        OptionKey::ChannelType,
        OptionKey::ConditionType,
        OptionKey::Priority,
        OptionKey::IncidentPreference,
        OptionKey::Status,
        OptionKey::ApplicationId,
        OptionKey::ServerId,
        OptionKey::MonitorId,
        OptionKey::MonitorType,
        OptionKey::Frequency,
        OptionKey::Uri,
        OptionKey::Email,
        OptionKey::Locations,
        OptionKey::SlaThreshold,
        OptionKey::Metric,
        OptionKey::Threshold,
        OptionKey::Label,
        OptionKey::Category,
        OptionKey::Revision,
        OptionKey::Description,
        OptionKey::Changelog,
        OptionKey::User,
        OptionKey::Title,
    ];

    #[test]
    fn test_every_descriptor_has_help_text() {
        for key in ALL {
            assert!(
                !key.descriptor().description.is_empty(),
                "{key:?} has no description"
            );
        }
    }

    #[test]
    fn test_long_flags_are_unique() {
        let mut longs: Vec<&str> = ALL.iter().map(|k| k.long()).collect();
        longs.sort();
        longs.dedup();
        assert_eq!(longs.len(), ALL.len());
    }

    #[test]
    fn test_short_flags_may_collide_across_entries() {
        // Scoped uniqueness: collisions exist in the catalog by design.
        let count = ALL
            .iter()
            .filter(|k| k.descriptor().short == 'c')
            .count();
        assert!(count > 1);
    }

    #[test]
    fn test_describe_overrides_catalog_text() {
        let opt = OptionKey::Id.required().describe("Id of the policy to delete");
        assert_eq!(opt.help_text(), "Id of the policy to delete");
        assert_eq!(
            OptionKey::Id.optional().help_text(),
            "Id of the entity"
        );
    }
}
