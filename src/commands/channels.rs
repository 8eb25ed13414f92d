//! Notification channel commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateAlertChannel;

impl Command for CreateAlertChannel {
    fn name(&self) -> &'static str {
        "create_alert_channel"
    }

    fn description(&self) -> &'static str {
        "Create a notification channel"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::Name.required().describe("Name of the new channel"),
            OptionKey::ChannelType.required(),
            OptionKey::Email.optional().describe("Recipient address for email channels"),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let channel = ctx.api()?.alert_channels().create(
            args.require(OptionKey::Name)?,
            args.require(OptionKey::ChannelType)?,
            args.value(OptionKey::Email),
        )?;
        info!(id = channel.id, name = %channel.name, channel_type = %channel.channel_type, "created notification channel");
        Ok(())
    }
}

pub struct GetAlertChannels;

impl Command for GetAlertChannels {
    fn name(&self) -> &'static str {
        "get_alert_channels"
    }

    fn description(&self) -> &'static str {
        "List notification channels"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        Vec::new()
    }

    fn execute(&self, _args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let channels = ctx.api()?.alert_channels().list()?;
        info!(count = channels.len(), "listed notification channels");
        for channel in &channels {
            info!(
                id = channel.id,
                name = %channel.name,
                channel_type = %channel.channel_type,
                "notification channel"
            );
        }
        Ok(())
    }
}

pub struct DeleteAlertChannel;

impl Command for DeleteAlertChannel {
    fn name(&self) -> &'static str {
        "delete_alert_channel"
    }

    fn description(&self) -> &'static str {
        "Delete a notification channel"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::ChannelId.required().describe("Id of the channel to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::ChannelId)?;
        if ctx.api()?.alert_channels().delete(id)? {
            info!(id, "deleted notification channel");
        } else {
            error!(id, "notification channel not found");
        }
        Ok(())
    }
}

pub struct AddPolicyChannel;

impl Command for AddPolicyChannel {
    fn name(&self) -> &'static str {
        "add_policy_channel"
    }

    fn description(&self) -> &'static str {
        "Associate a notification channel with an alert policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::PolicyId.required(), OptionKey::ChannelId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let policy_id = args.u64(OptionKey::PolicyId)?;
        let channel_id = args.u64(OptionKey::ChannelId)?;
        if ctx.api()?.alert_channels().add_to_policy(policy_id, channel_id)? {
            info!(policy_id, channel_id, "associated channel with policy");
        } else {
            error!(policy_id, channel_id, "policy or channel not found");
        }
        Ok(())
    }
}

pub struct RemovePolicyChannel;

impl Command for RemovePolicyChannel {
    fn name(&self) -> &'static str {
        "remove_policy_channel"
    }

    fn description(&self) -> &'static str {
        "Remove a notification channel from an alert policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::PolicyId.required(), OptionKey::ChannelId.required()]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let policy_id = args.u64(OptionKey::PolicyId)?;
        let channel_id = args.u64(OptionKey::ChannelId)?;
        if ctx
            .api()?
            .alert_channels()
            .remove_from_policy(policy_id, channel_id)?
        {
            info!(policy_id, channel_id, "removed channel from policy");
        } else {
            error!(policy_id, channel_id, "policy or channel not found");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::testing::RecordingTransport;
    use crate::api::transport::Method;
    use crate::api::ApiClient;
    use crate::cli::command::{run_command, RunOutcome};
    use crate::cli::context::test_context;
    use std::sync::Arc;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_rejects_unknown_channel_type() {
        let transport = Arc::new(RecordingTransport::new(vec![]));
        let mut ctx = test_context(ApiClient::with_transport(Box::new(transport.clone())));

        let outcome = run_command(
            &CreateAlertChannel,
            &tokens(&["-n", "oncall", "-t", "carrier_pigeon"]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_add_policy_channel_puts_association() {
        let transport = Arc::new(RecordingTransport::new(vec![Some(serde_json::Value::Null)]));
        let mut ctx = test_context(ApiClient::with_transport(Box::new(transport.clone())));

        let outcome = run_command(
            &AddPolicyChannel,
            &tokens(&["-p", "3", "-c", "9"]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);

        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::Put);
        assert_eq!(calls[0].path, "/alert_policies/3/channels/9");
    }
}
