//! Vigil REST API client
//!
//! `ApiClient` owns the transport and hands out resource-scoped accessors.
//! Commands never see HTTP details; they see `show`/`list`/`create`/
//! `update`/`delete` on the entity type they manipulate.

pub mod model;
pub mod resources;
pub mod transport;

use crate::errors::AppResult;
use transport::{HttpTransport, Transport};

pub struct ApiClient {
    transport: Box<dyn Transport>,
}

impl ApiClient {
    /// Connect to the API with a blocking HTTP transport.
    pub fn connect(endpoint: &str, api_key: &str, timeout_secs: u64) -> AppResult<Self> {
        Ok(ApiClient {
            transport: Box::new(HttpTransport::new(endpoint, api_key, timeout_secs)?),
        })
    }

    /// Wrap an arbitrary transport. Tests use this to substitute a
    /// recording double for the network.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        ApiClient { transport }
    }

    pub fn alert_policies(&self) -> resources::AlertPolicies<'_> {
        resources::AlertPolicies {
            t: self.transport.as_ref(),
        }
    }

    pub fn alert_conditions(&self) -> resources::AlertConditions<'_> {
        resources::AlertConditions {
            t: self.transport.as_ref(),
        }
    }

    pub fn alert_channels(&self) -> resources::AlertChannels<'_> {
        resources::AlertChannels {
            t: self.transport.as_ref(),
        }
    }

    pub fn applications(&self) -> resources::Applications<'_> {
        resources::Applications {
            t: self.transport.as_ref(),
        }
    }

    pub fn servers(&self) -> resources::Servers<'_> {
        resources::Servers {
            t: self.transport.as_ref(),
        }
    }

    pub fn monitors(&self) -> resources::Monitors<'_> {
        resources::Monitors {
            t: self.transport.as_ref(),
        }
    }

    pub fn labels(&self) -> resources::Labels<'_> {
        resources::Labels {
            t: self.transport.as_ref(),
        }
    }

    pub fn dashboards(&self) -> resources::Dashboards<'_> {
        resources::Dashboards {
            t: self.transport.as_ref(),
        }
    }

    pub fn users(&self) -> resources::Users<'_> {
        resources::Users {
            t: self.transport.as_ref(),
        }
    }

    pub fn deployments(&self) -> resources::Deployments<'_> {
        resources::Deployments {
            t: self.transport.as_ref(),
        }
    }

    pub fn key_transactions(&self) -> resources::KeyTransactions<'_> {
        resources::KeyTransactions {
            t: self.transport.as_ref(),
        }
    }

    pub fn plugins(&self) -> resources::Plugins<'_> {
        resources::Plugins {
            t: self.transport.as_ref(),
        }
    }
}
