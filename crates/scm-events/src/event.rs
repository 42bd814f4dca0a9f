//! Typed source events, one structure per webhook kind.
//!
//! A source event lives only for the duration of a dispatch: the upstream
//! transport decodes one per inbound call, the dispatch server fans it out,
//! and nothing retains it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::Action;
use crate::error::EventDecodeError;
use crate::types::{Comment, Issue, PullRequest, Repository, User};

// ============================================================================
// Event Kind
// ============================================================================

/// The closed set of event kinds the dispatch engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Comment on an issue (or on a pull request through its issue side)
    IssueComment,
    /// Review comment on a pull request
    PullRequestComment,
    /// Push to a ref
    Push,
    /// Pull request lifecycle change
    PullRequest,
    /// Branch created or deleted (accepted but not dispatched)
    Branch,
}

impl EventKind {
    /// Get the kind string used by GitHub-compatible transports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
            Self::PullRequestComment => "pull_request_review_comment",
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Branch => "branch",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Source Events
// ============================================================================

/// Comment activity on an issue.
///
/// Fires for comment lifecycle actions only, so every instance is
/// comment-relevant by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    /// Action that triggered this event
    pub action: Action,

    /// Repository where the event occurred
    pub repo: Repository,

    /// Snapshot of the issue owning the comment
    pub issue: Issue,

    /// The comment itself
    pub comment: Comment,
}

/// Review-comment activity on a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestCommentEvent {
    /// Action that triggered this event
    pub action: Action,

    /// Repository where the event occurred
    pub repo: Repository,

    /// Snapshot of the pull request owning the comment
    pub pull_request: PullRequest,

    /// The comment itself
    pub comment: Comment,
}

/// Push to a ref.
///
/// Pushes never surface as canonical comment events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
    /// Git ref that was pushed (e.g., "refs/heads/main")
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// Commit SHA before the push
    #[serde(default)]
    pub before: String,

    /// Commit SHA after the push
    #[serde(default)]
    pub after: String,

    /// Repository where the event occurred
    pub repo: Repository,

    /// User who triggered the event
    pub sender: User,
}

/// Pull request lifecycle change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// Action that triggered this event
    pub action: Action,

    /// Correlation identifier assigned by the upstream transport.
    ///
    /// Stands in for a comment identifier when a lifecycle action is
    /// projected as a canonical comment event, since no comment exists.
    pub delivery_id: String,

    /// Repository field of the event payload.
    ///
    /// May refer to a fork; prefer [`PullRequestEvent::target_repository`]
    /// for handler resolution and normalization.
    pub repo: Repository,

    /// Snapshot of the pull request
    pub pull_request: PullRequest,
}

impl PullRequestEvent {
    /// Resolve the repository this event targets.
    ///
    /// Prefers the repository attached to the base of the pull request;
    /// falls back to the event's top-level repository when the base
    /// repository's name is empty. Forked pull requests deliver the fork
    /// in the top-level field, while the base always names the repository
    /// the change is destined for.
    pub fn target_repository(&self) -> &Repository {
        let base = &self.pull_request.base.repo;
        if base.name.is_empty() {
            &self.repo
        } else {
            base
        }
    }
}

/// Branch created or deleted.
///
/// Accepted by the dispatch server but not dispatched; see the server
/// documentation for the diagnostic it emits instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchEvent {
    /// Action that triggered this event
    pub action: Action,

    /// Branch ref the event concerns
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// Repository where the event occurred
    pub repo: Repository,

    /// User who triggered the event
    pub sender: User,
}

// ============================================================================
// Source Event Union
// ============================================================================

/// A decoded webhook event, tagged by kind.
///
/// The closed union the transport hands to the dispatch server; one
/// variant per supported kind, no open payload maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SourceEvent {
    IssueComment(IssueCommentEvent),
    PullRequestComment(PullRequestCommentEvent),
    Push(PushEvent),
    PullRequest(PullRequestEvent),
    Branch(BranchEvent),
}

impl SourceEvent {
    /// Get the kind tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::IssueComment(_) => EventKind::IssueComment,
            Self::PullRequestComment(_) => EventKind::PullRequestComment,
            Self::Push(_) => EventKind::Push,
            Self::PullRequest(_) => EventKind::PullRequest,
            Self::Branch(_) => EventKind::Branch,
        }
    }

    /// Decode a raw payload into a typed event by kind string.
    ///
    /// Accepts the kind strings GitHub-compatible transports deliver:
    /// `issue_comment`, `pull_request_review_comment`, `push`,
    /// `pull_request`, and `create`/`delete`/`branch` for branch events.
    ///
    /// # Errors
    ///
    /// Returns [`EventDecodeError::UnknownKind`] for kind strings outside
    /// the supported set and [`EventDecodeError::Malformed`] when the
    /// payload does not parse as the named kind.
    pub fn decode(kind: &str, payload: &[u8]) -> Result<Self, EventDecodeError> {
        let malformed = |source| EventDecodeError::Malformed {
            kind: kind.to_string(),
            source,
        };

        match kind {
            "issue_comment" => serde_json::from_slice(payload)
                .map(Self::IssueComment)
                .map_err(malformed),
            "pull_request_review_comment" => serde_json::from_slice(payload)
                .map(Self::PullRequestComment)
                .map_err(malformed),
            "push" => serde_json::from_slice(payload)
                .map(Self::Push)
                .map_err(malformed),
            "pull_request" => serde_json::from_slice(payload)
                .map(Self::PullRequest)
                .map_err(malformed),
            "branch" | "create" | "delete" => serde_json::from_slice(payload)
                .map(Self::Branch)
                .map_err(malformed),
            other => Err(EventDecodeError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
