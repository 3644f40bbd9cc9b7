//! Wire types for the storefront REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by `GET /api/v1/auth/me`.
///
/// A read-only copy; absence of a user is modeled as `Option::None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl AuthSnapshot {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            role: None,
        }
    }

    /// Text shown in the account popup for this user.
    pub fn identifier(&self) -> &str {
        &self.email
    }
}

/// Envelope returned by `GET /api/v1/auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub user: AuthSnapshot,
}

/// Body of `POST /api/v1/subscriptions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub source: String,
}

/// Response of `POST /api/v1/subscriptions`, on success and on rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure modes of a newsletter subscription request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NewsletterError {
    /// The server answered with a non-success status.
    #[error("subscription rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    /// The request never produced a usable response.
    #[error("subscription request failed: {0}")]
    Transport(String),
}
