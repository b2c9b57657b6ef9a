use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the discount workspace.
///
/// Wraps configuration problems, data-integrity faults found while deriving
/// intervals, and the transient failures of the catalog gateway (status, I/O,
/// timeouts, interruption). None of these are ever cached.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiscountError {
    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An item lacks one of the timestamps required to derive its interval.
    #[error("data integrity: item {item_id} has no {field}")]
    MissingTimestamp {
        /// Identifier of the offending item.
        item_id: String,
        /// Name of the missing field (`date_created` or `last_updated`).
        field: String,
    },

    /// The catalog gateway failed at the transport or decoding level.
    #[error("{gateway} failed: {msg}")]
    Gateway {
        /// Gateway name that failed.
        gateway: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The catalog gateway answered with a non-success HTTP status.
    #[error("{gateway} responded HTTP {status}")]
    GatewayStatus {
        /// Gateway name that responded.
        gateway: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// A single gateway call exceeded the configured gateway timeout.
    #[error("gateway timed out: {operation} via {gateway}")]
    GatewayTimeout {
        /// Gateway name that timed out.
        gateway: String,
        /// Operation label (e.g. "fetch-items").
        operation: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {operation}")]
    RequestTimeout {
        /// Operation label for which the request timed out.
        operation: String,
    },

    /// The call was cooperatively interrupted while waiting on the gateway.
    #[error("interrupted: {operation}")]
    Interrupted {
        /// Operation label that was interrupted.
        operation: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl DiscountError {
    /// Helper: build a `MissingTimestamp` error for an item and field name.
    pub fn missing_timestamp(item_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingTimestamp {
            item_id: item_id.into(),
            field: field.into(),
        }
    }

    /// Helper: build a `Gateway` error with the gateway name and message.
    pub fn gateway(gateway: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Gateway {
            gateway: gateway.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `GatewayStatus` error.
    pub fn gateway_status(gateway: impl Into<String>, status: u16) -> Self {
        Self::GatewayStatus {
            gateway: gateway.into(),
            status,
        }
    }

    /// Helper: build a `GatewayTimeout` error.
    pub fn gateway_timeout(gateway: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::GatewayTimeout {
            gateway: gateway.into(),
            operation: operation.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(operation: impl Into<String>) -> Self {
        Self::RequestTimeout {
            operation: operation.into(),
        }
    }

    /// Helper: build an `Interrupted` error.
    #[must_use]
    pub fn interrupted(operation: impl Into<String>) -> Self {
        Self::Interrupted {
            operation: operation.into(),
        }
    }

    /// Returns true if the failure is transient and the call is safe to retry.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Gateway { .. }
                | Self::GatewayStatus { .. }
                | Self::GatewayTimeout { .. }
                | Self::RequestTimeout { .. }
                | Self::Interrupted { .. }
        )
    }

    /// Returns true if the failure is a data-integrity fault in the catalog records.
    #[must_use]
    pub const fn is_data_integrity(&self) -> bool {
        matches!(self, Self::MissingTimestamp { .. })
    }

    /// Returns true if the gateway reported that none of the requested resources exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::GatewayStatus { status: 404, .. })
    }
}
