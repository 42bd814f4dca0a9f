//! The canonical comment event and its projections.
//!
//! Handlers written against [`CommentEvent`] react to comment-like
//! activity uniformly, whether it originated as an issue comment, a pull
//! request review comment, or a qualifying pull-request lifecycle action.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::event::{IssueCommentEvent, PullRequestCommentEvent, PullRequestEvent};
use crate::types::{Repository, User};

/// The unified representation of comment-like activity.
///
/// Derived from exactly one source event and immutable after
/// construction: handlers only ever read it, and the `id` is never
/// regenerated per handler, so consumers can use it for idempotence
/// checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEvent {
    /// Origin-specific unique identifier of the triggering comment, or
    /// the event's correlation identifier for lifecycle actions
    pub id: String,

    /// Whether the origin is pull-request-scoped rather than issue-scoped
    pub is_pull_request: bool,

    /// Action that triggered the source event
    pub action: Action,

    /// Comment text, or the pull request description for lifecycle actions
    pub body: String,

    /// Comment URL, or the pull request URL for lifecycle actions
    pub link: String,

    /// Issue or pull request number, scoped to the repository
    pub number: u64,

    /// Repository the event targets
    pub repo: Repository,

    /// Author of the comment or pull request
    pub author: User,

    /// Author of the issue or pull request that owns the comment
    pub issue_author: User,

    /// Assignees of the owning issue or pull request, in source order
    pub assignees: Vec<User>,

    /// State of the owning issue or pull request at event time
    pub issue_state: String,

    /// Body of the owning issue or pull request at event time
    pub issue_body: String,

    /// URL of the owning issue or pull request
    pub issue_link: String,
}

impl CommentEvent {
    /// Project an issue-comment event into the canonical form.
    ///
    /// The comment supplies the identifier, body, link, and author; the
    /// owning issue supplies everything issue-side, including whether the
    /// issue is itself a pull request.
    pub fn from_issue_comment(event: &IssueCommentEvent) -> Self {
        Self {
            id: event.comment.id.to_string(),
            is_pull_request: event.issue.pull_request,
            action: event.action.clone(),
            body: event.comment.body.clone(),
            link: event.comment.link.clone(),
            number: event.issue.number,
            repo: event.repo.clone(),
            author: event.comment.author.clone(),
            issue_author: event.issue.author.clone(),
            assignees: event.issue.assignees.clone(),
            issue_state: event.issue.state.clone(),
            issue_body: event.issue.body.clone(),
            issue_link: event.issue.link.clone(),
        }
    }

    /// Project a pull-request review-comment event into the canonical form.
    ///
    /// Identical in shape to the issue-comment projection with the
    /// issue-side fields sourced from the pull request; the origin is
    /// pull-request-scoped by definition.
    pub fn from_pull_request_comment(event: &PullRequestCommentEvent) -> Self {
        Self {
            id: event.comment.id.to_string(),
            is_pull_request: true,
            action: event.action.clone(),
            body: event.comment.body.clone(),
            link: event.comment.link.clone(),
            number: event.pull_request.number,
            repo: event.repo.clone(),
            author: event.comment.author.clone(),
            issue_author: event.pull_request.author.clone(),
            assignees: event.pull_request.assignees.clone(),
            issue_state: event.pull_request.state.clone(),
            issue_body: event.pull_request.body.clone(),
            issue_link: event.pull_request.link.clone(),
        }
    }

    /// Project a pull-request lifecycle event into the canonical form.
    ///
    /// No comment exists, so the pull request description stands in for
    /// the comment text and the event's correlation identifier for the
    /// comment identifier. Only invoked for actions classified as
    /// commentable.
    pub fn from_pull_request(event: &PullRequestEvent) -> Self {
        let pr = &event.pull_request;
        Self {
            id: event.delivery_id.clone(),
            is_pull_request: true,
            action: event.action.clone(),
            body: pr.body.clone(),
            link: pr.link.clone(),
            number: pr.number,
            repo: event.target_repository().clone(),
            author: pr.author.clone(),
            issue_author: pr.author.clone(),
            assignees: pr.assignees.clone(),
            issue_state: pr.state.clone(),
            issue_body: pr.body.clone(),
            issue_link: pr.link.clone(),
        }
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
