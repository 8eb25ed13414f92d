//! Alert policy commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct CreateAlertPolicy;

impl Command for CreateAlertPolicy {
    fn name(&self) -> &'static str {
        "create_alert_policy"
    }

    fn description(&self) -> &'static str {
        "Create a new alert policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::Name.required().describe("Name of the new alert policy"),
            OptionKey::IncidentPreference.optional(),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let name = args.require(OptionKey::Name)?;
        let policy = ctx
            .api()?
            .alert_policies()
            .create(name, args.value(OptionKey::IncidentPreference))?;
        info!(id = policy.id, name = %policy.name, "created alert policy");
        Ok(())
    }
}

pub struct GetAlertPolicies;

impl Command for GetAlertPolicies {
    fn name(&self) -> &'static str {
        "get_alert_policies"
    }

    fn description(&self) -> &'static str {
        "List alert policies, optionally filtered by name"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Name.optional().describe("Only list policies with this name")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let policies = ctx.api()?.alert_policies().list(args.value(OptionKey::Name))?;
        info!(count = policies.len(), "listed alert policies");
        for policy in &policies {
            info!(
                id = policy.id,
                name = %policy.name,
                incident_preference = policy.incident_preference.as_deref().unwrap_or("-"),
                "alert policy"
            );
        }
        Ok(())
    }
}

pub struct UpdateAlertPolicy;

impl Command for UpdateAlertPolicy {
    fn name(&self) -> &'static str {
        "update_alert_policy"
    }

    fn description(&self) -> &'static str {
        "Update the name or incident preference of an alert policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![
            OptionKey::Id.required().describe("Id of the alert policy to update"),
            OptionKey::Name.optional().describe("New name for the policy"),
            OptionKey::IncidentPreference.optional(),
        ]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        let updated = ctx.api()?.alert_policies().update(
            id,
            args.value(OptionKey::Name),
            args.value(OptionKey::IncidentPreference),
        )?;
        match updated {
            Some(policy) => info!(id, name = %policy.name, "updated alert policy"),
            None => error!(id, "alert policy not found"),
        }
        Ok(())
    }
}

pub struct DeleteAlertPolicy;

impl Command for DeleteAlertPolicy {
    fn name(&self) -> &'static str {
        "delete_alert_policy"
    }

    fn description(&self) -> &'static str {
        "Delete an alert policy"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the alert policy to delete")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        let api = ctx.api()?;
        match api.alert_policies().show(id)? {
            Some(policy) => {
                api.alert_policies().delete(id)?;
                info!(id, name = %policy.name, "deleted alert policy");
            }
            None => error!(id, "alert policy not found"),
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
    use serde_json::json;
    use std::sync::Arc;

    fn context_with(responses: Vec<Option<serde_json::Value>>) -> (CliContext, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new(responses));
        let api = ApiClient::with_transport(Box::new(transport.clone()));
        (test_context(api), transport)
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_delete_issues_exactly_one_delete_when_found() {
        let (mut ctx, transport) = context_with(vec![
            Some(json!({"id": 42, "name": "Prod"})),
            Some(serde_json::Value::Null),
        ]);

        let outcome = run_command(&DeleteAlertPolicy, &tokens(&["-i", "42"]), &mut ctx).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].path, "/alert_policies/42");
        assert_eq!(calls[1].method, Method::Delete);
        assert_eq!(calls[1].path, "/alert_policies/42");
    }

    #[test]
    fn test_delete_not_found_issues_no_delete() {
        let (mut ctx, transport) = context_with(vec![None]);

        let outcome = run_command(&DeleteAlertPolicy, &tokens(&["-i", "42"]), &mut ctx).unwrap();
        assert_eq!(outcome, RunOutcome::Completed);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Get);
    }

    #[test]
    fn test_delete_without_id_never_reaches_the_api() {
        let (mut ctx, transport) = context_with(vec![]);

        let outcome = run_command(&DeleteAlertPolicy, &tokens(&[]), &mut ctx).unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_create_posts_name_and_preference() {
        let (mut ctx, transport) = context_with(vec![Some(
            json!({"id": 7, "name": "Staging", "incident_preference": "per_policy"}),
        )]);

        let outcome = run_command(
            &CreateAlertPolicy,
            &tokens(&["-n", "Staging", "-f", "per_policy"]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(outcome, RunOutcome::Completed);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        let body = calls[0].body.as_ref().unwrap();
        assert_eq!(body["name"], "Staging");
        assert_eq!(body["incident_preference"], "per_policy");
    }

    #[test]
    fn test_create_rejects_invalid_preference() {
        let (mut ctx, transport) = context_with(vec![]);

        let outcome = run_command(
            &CreateAlertPolicy,
            &tokens(&["-n", "Staging", "-f", "sometimes"]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(outcome, RunOutcome::ParseFailed);
        assert!(transport.calls().is_empty());
    }
}
