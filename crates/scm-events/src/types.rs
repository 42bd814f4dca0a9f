//! Identity and snapshot types shared by all event payloads.
//!
//! These structures mirror the shapes delivered by the upstream transport.
//! They capture the state of the repository, issue, or pull request at the
//! moment the event fired; nothing refreshes them afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository identifier.
///
/// The key used for handler resolution. Immutable, supplied by the
/// upstream transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    /// Organization or owner the repository belongs to
    pub namespace: String,

    /// Repository name (namespace-specific)
    pub name: String,
}

impl Repository {
    /// Create a repository identifier.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Get the `namespace/name` form used in diagnostics and registry keys.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// User identity in event payloads.
///
/// Represents an author, assignee, or reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User login name
    pub login: String,
}

impl User {
    /// Create a user identity.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.login)
    }
}

/// Snapshot of an issue at event time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number (repository-specific)
    pub number: u64,

    /// Issue state ("open" or "closed")
    pub state: String,

    /// Issue body content (empty when the payload carries none)
    #[serde(default)]
    pub body: String,

    /// Issue URL
    #[serde(default)]
    pub link: String,

    /// User who created the issue
    pub author: User,

    /// Assigned users, in payload order
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Whether this issue is itself a pull request
    #[serde(default)]
    pub pull_request: bool,
}

/// Snapshot of a pull request at event time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number (repository-specific)
    pub number: u64,

    /// Pull request state ("open" or "closed")
    pub state: String,

    /// Pull request body content (empty when the payload carries none)
    #[serde(default)]
    pub body: String,

    /// Pull request URL
    #[serde(default)]
    pub link: String,

    /// User who created the pull request
    pub author: User,

    /// Assigned users, in payload order
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Base branch information
    pub base: PullRequestBranch,
}

/// Branch information in a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestBranch {
    /// Branch name
    #[serde(rename = "ref", default)]
    pub branch_ref: String,

    /// Repository the branch lives in.
    ///
    /// For forked pull requests this differs from the event's top-level
    /// repository; an empty `name` marks the field as absent.
    #[serde(default = "PullRequestBranch::empty_repo")]
    pub repo: Repository,
}

impl PullRequestBranch {
    fn empty_repo() -> Repository {
        Repository::new("", "")
    }
}

/// Comment on an issue or pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: u64,

    /// Comment body content
    pub body: String,

    /// Comment URL
    #[serde(default)]
    pub link: String,

    /// User who created the comment
    pub author: User,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
