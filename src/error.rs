// Typed sampling errors: what went wrong, for which resource, and when

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::ResourceKind;

/// Failure category. Every kind is retried on the next round; the split only tells whether an
/// immediate retry of the same call is expected to help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Generic failure reading a resource.
    Access,
    /// Access denied or insufficient privilege.
    Permission,
    /// Transient; likely to resolve by itself.
    Temporary,
    /// Some sub-items failed and nothing usable was left.
    Collection,
    /// Producing the view failed; not a sampling failure.
    Presentation,
}

impl ErrorKind {
    pub fn is_recoverable(self) -> bool {
        matches!(self, ErrorKind::Temporary | ErrorKind::Collection)
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Access => "Access Error",
            ErrorKind::Permission => "Permission Error",
            ErrorKind::Temporary => "Temporary Error",
            ErrorKind::Collection => "Collection Error",
            ErrorKind::Presentation => "Presentation Error",
        }
    }

    /// Best-effort classification of an OS or library error message.
    pub fn classify_message(message: &str) -> Option<ErrorKind> {
        let lower = message.to_lowercase();
        if ["permission denied", "access denied", "operation not permitted"]
            .iter()
            .any(|p| lower.contains(p))
        {
            return Some(ErrorKind::Permission);
        }
        if [
            "timeout",
            "timed out",
            "temporary",
            "try again",
            "resource temporarily unavailable",
        ]
        .iter()
        .any(|p| lower.contains(p))
        {
            return Some(ErrorKind::Temporary);
        }
        None
    }

    pub fn from_io(err: &std::io::Error) -> ErrorKind {
        use std::io::ErrorKind as Io;
        match err.kind() {
            Io::PermissionDenied => ErrorKind::Permission,
            Io::TimedOut | Io::WouldBlock | Io::Interrupted => ErrorKind::Temporary,
            _ => ErrorKind::classify_message(&err.to_string()).unwrap_or(ErrorKind::Access),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed sample for one resource.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("[{resource}] {kind}: {message}")]
pub struct CollectError {
    pub kind: ErrorKind,
    pub resource: ResourceKind,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl CollectError {
    pub fn new(kind: ErrorKind, resource: ResourceKind, message: impl Into<String>) -> Self {
        Self::at(kind, resource, message, Utc::now())
    }

    pub fn at(
        kind: ErrorKind,
        resource: ResourceKind,
        message: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            resource,
            message: message.into(),
            occurred_at,
        }
    }

    /// Wraps an underlying error. Its text decides between permission, temporary and
    /// `fallback`.
    pub fn wrap(
        resource: ResourceKind,
        context: &str,
        err: &dyn std::fmt::Display,
        fallback: ErrorKind,
    ) -> Self {
        let detail = err.to_string();
        let kind = ErrorKind::classify_message(&detail).unwrap_or(fallback);
        Self::new(kind, resource, format!("{context}: {detail}"))
    }

    pub fn from_io(resource: ResourceKind, context: &str, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::from_io(err), resource, format!("{context}: {err}"))
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}
