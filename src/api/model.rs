//! Entity models for the Vigil REST API
//!
//! Deserialization targets for the JSON the API returns. Fields the API may
//! omit are `Option`s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub id: u64,
    pub name: String,
    pub incident_preference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCondition {
    pub id: u64,
    pub name: String,
    pub condition_type: String,
    pub priority: Option<String>,
    pub enabled: bool,
    pub metric: Option<String>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertChannel {
    pub id: u64,
    pub name: String,
    pub channel_type: String,
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub health_status: Option<String>,
    pub reporting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub host: Option<String>,
    pub health_status: Option<String>,
    pub reporting: bool,
}

/// Synthetic monitors are keyed by an opaque string id, not a numeric one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    pub monitor_type: String,
    pub frequency: u32,
    pub uri: Option<String>,
    pub locations: Vec<String>,
    pub status: String,
    pub sla_threshold: Option<f64>,
}

/// Labels are addressed by their `Category:Name` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub revision: String,
    pub description: Option<String>,
    pub changelog: Option<String>,
    pub user: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyTransaction {
    pub id: u64,
    pub name: String,
    pub transaction_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    pub id: u64,
    pub guid: String,
    pub name: String,
    pub publisher: Option<String>,
}
