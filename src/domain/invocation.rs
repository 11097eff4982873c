//! Invocation inputs and output
//!
//! The job is handed an opaque trigger payload and invocation context by
//! whatever scheduled it, and answers with a fixed status response.

use serde::{Deserialize, Serialize};

/// Confirmation text carried in every successful response
pub const SUCCESS_MESSAGE: &str = "Logs exported successfully";

/// Opaque trigger payload
///
/// The scheduler's event body is kept as-is and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trigger(serde_json::Value);

impl Trigger {
    /// Wraps a raw event payload
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Trigger with an empty payload, used for manual runs
    pub fn manual() -> Self {
        Self(serde_json::Value::Null)
    }

    /// Returns the raw payload
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Metadata about the current invocation
///
/// Only used to label log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Request identifier assigned by the invoker
    pub request_id: String,

    /// Name of the invoking function, if any
    pub function_name: Option<String>,
}

impl InvocationContext {
    /// Creates a context with the given request id
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: None,
        }
    }

    /// Context for a CLI run with a freshly generated request id
    pub fn generated() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Sets the function name
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }
}

/// Response returned by a successful invocation
///
/// Serializes as `{"statusCode": 200, "body": "\"Logs exported successfully\""}`;
/// the body holds the JSON encoding of the message, as HTTP proxy
/// integrations expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    /// HTTP-style status code
    pub status_code: u16,

    /// JSON-encoded message
    pub body: String,
}

impl InvocationResponse {
    /// The fixed success response
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: encode_body(SUCCESS_MESSAGE),
        }
    }

    /// Decodes the message carried in the body
    pub fn message(&self) -> Option<String> {
        serde_json::from_str(&self.body).ok()
    }
}

fn encode_body(message: &str) -> String {
    serde_json::Value::String(message.to_string()).to_string()
}
