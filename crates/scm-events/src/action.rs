//! Action vocabulary for lifecycle events.
//!
//! Each source event kind owns its own subset of this vocabulary; the
//! dispatch core consults it when deciding whether a pull-request
//! lifecycle action should surface as a comment event. Wire strings the
//! vocabulary does not know are preserved verbatim in
//! [`Action::Unknown`] so diagnostics can name exactly what the upstream
//! sent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The verb describing what happened to an issue, comment, pull request,
/// or branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    Open,
    Submitted,
    Edited,
    Delete,
    Dismissed,
    Assigned,
    Unassigned,
    ReviewRequested,
    ReviewRequestRemoved,
    Label,
    Unlabel,
    Close,
    Reopen,
    Sync,
    /// An action outside the known vocabulary, kept verbatim.
    Unknown(String),
}

impl Action {
    /// Get the wire string for this action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "created",
            Self::Open => "opened",
            Self::Submitted => "submitted",
            Self::Edited => "edited",
            Self::Delete => "deleted",
            Self::Dismissed => "dismissed",
            Self::Assigned => "assigned",
            Self::Unassigned => "unassigned",
            Self::ReviewRequested => "review_requested",
            Self::ReviewRequestRemoved => "review_request_removed",
            Self::Label => "labeled",
            Self::Unlabel => "unlabeled",
            Self::Close => "closed",
            Self::Reopen => "reopened",
            Self::Sync => "synchronize",
            Self::Unknown(other) => other,
        }
    }

    /// Parse a wire string into an action.
    ///
    /// Strings outside the known vocabulary are preserved in
    /// [`Action::Unknown`] rather than rejected; the upstream event source
    /// can grow its schema without breaking dispatch.
    pub fn parse(value: &str) -> Self {
        match value {
            "created" => Self::Create,
            "opened" => Self::Open,
            "submitted" => Self::Submitted,
            "edited" => Self::Edited,
            "deleted" => Self::Delete,
            "dismissed" => Self::Dismissed,
            "assigned" => Self::Assigned,
            "unassigned" => Self::Unassigned,
            "review_requested" => Self::ReviewRequested,
            "review_request_removed" => Self::ReviewRequestRemoved,
            "labeled" => Self::Label,
            "unlabeled" => Self::Unlabel,
            "closed" => Self::Close,
            "reopened" => Self::Reopen,
            "synchronize" => Self::Sync,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
