//! Resource-scoped accessors
//!
//! One facade per remote entity type, each exposing the subset of
//! show/list/create/update/delete its endpoint supports. Request bodies are
//! built with `serde_json::json!`; responses are decoded into the model
//! structs. Not-found is always `Ok(None)` (or `false` for deletes), never
//! an error.

use super::model::*;
use super::transport::{Method, Transport};
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| AppError::Payload {
        path: path.to_string(),
        reason: e.to_string(),
        source: Some(Box::new(e)),
    })
}

fn decode_opt<T: DeserializeOwned>(path: &str, value: Option<Value>) -> AppResult<Option<T>> {
    match value {
        Some(v) => Ok(Some(decode(path, v)?)),
        None => Ok(None),
    }
}

fn decode_list<T: DeserializeOwned>(path: &str, value: Option<Value>) -> AppResult<Vec<T>> {
    match value {
        Some(v) => decode(path, v),
        None => Ok(Vec::new()),
    }
}

/// Builds a JSON object from only the `Some` entries.
fn sparse_body(fields: &[(&str, Option<Value>)]) -> Value {
    let mut body = serde_json::Map::new();
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert((*key).to_string(), value.clone());
        }
    }
    Value::Object(body)
}

pub struct AlertPolicies<'a> {
    pub(super) t: &'a dyn Transport,
}

impl AlertPolicies<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<AlertPolicy>> {
        let path = format!("/alert_policies/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, name: Option<&str>) -> AppResult<Vec<AlertPolicy>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("filter[name]", name.to_string()));
        }
        decode_list(
            "/alert_policies",
            self.t.request(Method::Get, "/alert_policies", &query, None)?,
        )
    }

    pub fn create(&self, name: &str, incident_preference: Option<&str>) -> AppResult<AlertPolicy> {
        let body = sparse_body(&[
            ("name", Some(json!(name))),
            ("incident_preference", incident_preference.map(|p| json!(p))),
        ]);
        let value = self
            .t
            .request(Method::Post, "/alert_policies", &[], Some(&body))?
            .ok_or_else(|| AppError::payload("/alert_policies", "create returned no body"))?;
        decode("/alert_policies", value)
    }

    pub fn update(
        &self,
        id: u64,
        name: Option<&str>,
        incident_preference: Option<&str>,
    ) -> AppResult<Option<AlertPolicy>> {
        let path = format!("/alert_policies/{id}");
        let body = sparse_body(&[
            ("name", name.map(|n| json!(n))),
            ("incident_preference", incident_preference.map(|p| json!(p))),
        ]);
        decode_opt(&path, self.t.request(Method::Put, &path, &[], Some(&body))?)
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/alert_policies/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct AlertConditions<'a> {
    pub(super) t: &'a dyn Transport,
}

impl AlertConditions<'_> {
    pub fn list(&self, policy_id: u64) -> AppResult<Vec<AlertCondition>> {
        let path = format!("/alert_policies/{policy_id}/conditions");
        decode_list(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn create(
        &self,
        policy_id: u64,
        name: &str,
        condition_type: &str,
        metric: &str,
        threshold: f64,
        priority: Option<&str>,
    ) -> AppResult<AlertCondition> {
        let path = format!("/alert_policies/{policy_id}/conditions");
        let body = sparse_body(&[
            ("name", Some(json!(name))),
            ("condition_type", Some(json!(condition_type))),
            ("metric", Some(json!(metric))),
            ("threshold", Some(json!(threshold))),
            ("priority", priority.map(|p| json!(p))),
        ]);
        let value = self
            .t
            .request(Method::Post, &path, &[], Some(&body))?
            .ok_or_else(|| AppError::payload(&path, "create returned no body"))?;
        decode(&path, value)
    }

    pub fn update(
        &self,
        id: u64,
        name: Option<&str>,
        threshold: Option<f64>,
        priority: Option<&str>,
        enabled: Option<bool>,
    ) -> AppResult<Option<AlertCondition>> {
        let path = format!("/alert_conditions/{id}");
        let body = sparse_body(&[
            ("name", name.map(|n| json!(n))),
            ("threshold", threshold.map(|t| json!(t))),
            ("priority", priority.map(|p| json!(p))),
            ("enabled", enabled.map(|e| json!(e))),
        ]);
        decode_opt(&path, self.t.request(Method::Put, &path, &[], Some(&body))?)
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/alert_conditions/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct AlertChannels<'a> {
    pub(super) t: &'a dyn Transport,
}

impl AlertChannels<'_> {
    pub fn list(&self) -> AppResult<Vec<AlertChannel>> {
        decode_list(
            "/alert_channels",
            self.t.request(Method::Get, "/alert_channels", &[], None)?,
        )
    }

    pub fn create(
        &self,
        name: &str,
        channel_type: &str,
        recipient: Option<&str>,
    ) -> AppResult<AlertChannel> {
        let body = sparse_body(&[
            ("name", Some(json!(name))),
            ("channel_type", Some(json!(channel_type))),
            ("recipient", recipient.map(|r| json!(r))),
        ]);
        let value = self
            .t
            .request(Method::Post, "/alert_channels", &[], Some(&body))?
            .ok_or_else(|| AppError::payload("/alert_channels", "create returned no body"))?;
        decode("/alert_channels", value)
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/alert_channels/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }

    /// Associate a channel with a policy. `false` when either side is missing.
    pub fn add_to_policy(&self, policy_id: u64, channel_id: u64) -> AppResult<bool> {
        let path = format!("/alert_policies/{policy_id}/channels/{channel_id}");
        Ok(self.t.request(Method::Put, &path, &[], None)?.is_some())
    }

    pub fn remove_from_policy(&self, policy_id: u64, channel_id: u64) -> AppResult<bool> {
        let path = format!("/alert_policies/{policy_id}/channels/{channel_id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct Applications<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Applications<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<Application>> {
        let path = format!("/applications/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, name: Option<&str>) -> AppResult<Vec<Application>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("filter[name]", name.to_string()));
        }
        decode_list(
            "/applications",
            self.t.request(Method::Get, "/applications", &query, None)?,
        )
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/applications/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct Servers<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Servers<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<Server>> {
        let path = format!("/servers/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, name: Option<&str>) -> AppResult<Vec<Server>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("filter[name]", name.to_string()));
        }
        decode_list(
            "/servers",
            self.t.request(Method::Get, "/servers", &query, None)?,
        )
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/servers/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

/// Fields for creating a synthetic monitor.
pub struct MonitorDraft<'a> {
    pub name: &'a str,
    pub monitor_type: &'a str,
    pub uri: &'a str,
    pub frequency: u32,
    pub locations: Vec<String>,
    pub sla_threshold: Option<f64>,
    pub status: Option<&'a str>,
}

pub struct Monitors<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Monitors<'_> {
    pub fn show(&self, id: &str) -> AppResult<Option<Monitor>> {
        let path = format!("/monitors/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self) -> AppResult<Vec<Monitor>> {
        decode_list(
            "/monitors",
            self.t.request(Method::Get, "/monitors", &[], None)?,
        )
    }

    pub fn create(&self, draft: &MonitorDraft<'_>) -> AppResult<Monitor> {
        let body = sparse_body(&[
            ("name", Some(json!(draft.name))),
            ("monitor_type", Some(json!(draft.monitor_type))),
            ("uri", Some(json!(draft.uri))),
            ("frequency", Some(json!(draft.frequency))),
            ("locations", Some(json!(&draft.locations))),
            ("sla_threshold", draft.sla_threshold.map(|s| json!(s))),
            ("status", draft.status.map(|s| json!(s))),
        ]);
        let value = self
            .t
            .request(Method::Post, "/monitors", &[], Some(&body))?
            .ok_or_else(|| AppError::payload("/monitors", "create returned no body"))?;
        decode("/monitors", value)
    }

    pub fn update(
        &self,
        id: &str,
        name: Option<&str>,
        uri: Option<&str>,
        frequency: Option<u32>,
        status: Option<&str>,
    ) -> AppResult<Option<Monitor>> {
        let path = format!("/monitors/{id}");
        let body = sparse_body(&[
            ("name", name.map(|n| json!(n))),
            ("uri", uri.map(|u| json!(u))),
            ("frequency", frequency.map(|f| json!(f))),
            ("status", status.map(|s| json!(s))),
        ]);
        decode_opt(&path, self.t.request(Method::Put, &path, &[], Some(&body))?)
    }

    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let path = format!("/monitors/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }

    pub fn add_label(&self, id: &str, label: &str) -> AppResult<bool> {
        let path = format!("/monitors/{id}/labels");
        let body = json!({ "label": label });
        Ok(self
            .t
            .request(Method::Post, &path, &[], Some(&body))?
            .is_some())
    }

    pub fn remove_label(&self, id: &str, label: &str) -> AppResult<bool> {
        let path = format!("/monitors/{id}/labels/{label}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct Labels<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Labels<'_> {
    pub fn list(&self) -> AppResult<Vec<Label>> {
        decode_list("/labels", self.t.request(Method::Get, "/labels", &[], None)?)
    }

    pub fn create(&self, category: &str, name: &str) -> AppResult<Label> {
        let body = json!({ "category": category, "name": name });
        let value = self
            .t
            .request(Method::Put, "/labels", &[], Some(&body))?
            .ok_or_else(|| AppError::payload("/labels", "create returned no body"))?;
        decode("/labels", value)
    }

    pub fn delete(&self, key: &str) -> AppResult<bool> {
        let path = format!("/labels/{key}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct Dashboards<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Dashboards<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<Dashboard>> {
        let path = format!("/dashboards/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, title: Option<&str>) -> AppResult<Vec<Dashboard>> {
        let mut query = Vec::new();
        if let Some(title) = title {
            query.push(("filter[title]", title.to_string()));
        }
        decode_list(
            "/dashboards",
            self.t.request(Method::Get, "/dashboards", &query, None)?,
        )
    }

    pub fn delete(&self, id: u64) -> AppResult<bool> {
        let path = format!("/dashboards/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct Users<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Users<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<User>> {
        let path = format!("/users/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, email: Option<&str>) -> AppResult<Vec<User>> {
        let mut query = Vec::new();
        if let Some(email) = email {
            query.push(("filter[email]", email.to_string()));
        }
        decode_list(
            "/users",
            self.t.request(Method::Get, "/users", &query, None)?,
        )
    }
}

pub struct Deployments<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Deployments<'_> {
    pub fn list(&self, application_id: u64) -> AppResult<Vec<Deployment>> {
        let path = format!("/applications/{application_id}/deployments");
        decode_list(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn create(
        &self,
        application_id: u64,
        revision: &str,
        description: Option<&str>,
        changelog: Option<&str>,
        user: Option<&str>,
    ) -> AppResult<Deployment> {
        let path = format!("/applications/{application_id}/deployments");
        let body = sparse_body(&[
            ("revision", Some(json!(revision))),
            ("description", description.map(|d| json!(d))),
            ("changelog", changelog.map(|c| json!(c))),
            ("user", user.map(|u| json!(u))),
        ]);
        let value = self
            .t
            .request(Method::Post, &path, &[], Some(&body))?
            .ok_or_else(|| AppError::payload(&path, "create returned no body"))?;
        decode(&path, value)
    }

    pub fn delete(&self, application_id: u64, id: u64) -> AppResult<bool> {
        let path = format!("/applications/{application_id}/deployments/{id}");
        Ok(self.t.request(Method::Delete, &path, &[], None)?.is_some())
    }
}

pub struct KeyTransactions<'a> {
    pub(super) t: &'a dyn Transport,
}

impl KeyTransactions<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<KeyTransaction>> {
        let path = format!("/key_transactions/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, name: Option<&str>) -> AppResult<Vec<KeyTransaction>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("filter[name]", name.to_string()));
        }
        decode_list(
            "/key_transactions",
            self.t
                .request(Method::Get, "/key_transactions", &query, None)?,
        )
    }
}

pub struct Plugins<'a> {
    pub(super) t: &'a dyn Transport,
}

impl Plugins<'_> {
    pub fn show(&self, id: u64) -> AppResult<Option<Plugin>> {
        let path = format!("/plugins/{id}");
        decode_opt(&path, self.t.request(Method::Get, &path, &[], None)?)
    }

    pub fn list(&self, name: Option<&str>) -> AppResult<Vec<Plugin>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("filter[name]", name.to_string()));
        }
        decode_list(
            "/plugins",
            self.t.request(Method::Get, "/plugins", &query, None)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::testing::RecordingTransport;
    use crate::api::transport::Method;

    #[test]
    fn test_show_decodes_entity() {
        let transport = RecordingTransport::new(vec![Some(
            serde_json::json!({"id": 42, "name": "Prod", "incident_preference": "per_policy"}),
        )]);
        let policies = AlertPolicies { t: &transport };

        let policy = policies.show(42).unwrap().unwrap();
        assert_eq!(policy.id, 42);
        assert_eq!(policy.name, "Prod");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].path, "/alert_policies/42");
    }

    #[test]
    fn test_show_not_found_is_none() {
        let transport = RecordingTransport::new(vec![None]);
        let policies = AlertPolicies { t: &transport };
        assert!(policies.show(7).unwrap().is_none());
    }

    #[test]
    fn test_create_builds_sparse_body() {
        let transport = RecordingTransport::new(vec![Some(
            serde_json::json!({"id": 1, "name": "New"}),
        )]);
        let policies = AlertPolicies { t: &transport };

        policies.create("New", None).unwrap();

        let calls = transport.calls();
        let body = calls[0].body.as_ref().unwrap();
        assert_eq!(body["name"], "New");
        assert!(body.get("incident_preference").is_none());
    }

    #[test]
    fn test_list_filter_becomes_query() {
        let transport = RecordingTransport::new(vec![Some(serde_json::json!([]))]);
        let apps = Applications { t: &transport };

        let result = apps.list(Some("web")).unwrap();
        assert!(result.is_empty());

        let calls = transport.calls();
        assert_eq!(
            calls[0].query,
            vec![("filter[name]".to_string(), "web".to_string())]
        );
    }

    #[test]
    fn test_delete_reports_not_found() {
        let transport = RecordingTransport::new(vec![None]);
        let servers = Servers { t: &transport };
        assert!(!servers.delete(9).unwrap());
    }
}
