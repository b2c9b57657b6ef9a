use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Location and transport limits of the Items service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsGatewayConfig {
    /// Items endpoint; the categories endpoint is derived from it.
    pub items_url: String,
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,
    /// Optional timeout for a whole HTTP exchange. The orchestrator applies
    /// its own per-call timeout on top of this.
    pub request_timeout: Option<Duration>,
}

impl Default for ItemsGatewayConfig {
    fn default() -> Self {
        Self {
            items_url: "http://localhost:8080/items".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

impl ItemsGatewayConfig {
    /// Point the gateway at another items endpoint.
    #[must_use]
    pub fn with_items_url(mut self, url: impl Into<String>) -> Self {
        self.items_url = url.into();
        self
    }

    /// Set the HTTP exchange timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
