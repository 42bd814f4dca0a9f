//! Typed handler registry.
//!
//! One handler trait per event kind, plus one for the canonical comment
//! event; resolution goes through [`HandlerRegistry`], keyed by
//! repository. The closed trait set keeps dispatch monomorphic per kind;
//! there is no open function-value map keyed by event-kind strings.
//!
//! Registries are read-only with respect to dispatch and may be consulted
//! concurrently by any number of in-flight dispatches without
//! coordination.

use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use scm_events::{
    CommentEvent, IssueCommentEvent, PullRequestCommentEvent, PullRequestEvent, PushEvent,
    Repository,
};

use crate::context::HandlerContext;

/// Result of one handler invocation.
///
/// Errors are reported through the handler's diagnostic context and never
/// propagate past the dispatching task.
pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Handler name → handler. Iteration order is deliberately unspecified;
/// handler execution must not depend on it.
pub type HandlerMap<H> = HashMap<String, Arc<H>>;

// ============================================================================
// Handler Traits
// ============================================================================

/// Handler for issue-comment events.
#[async_trait]
pub trait IssueCommentHandler: Send + Sync {
    /// Handle one issue-comment event.
    async fn handle(
        &self,
        ctx: Arc<dyn HandlerContext>,
        event: &IssueCommentEvent,
    ) -> HandlerResult;
}

/// Handler for pull-request review-comment events.
#[async_trait]
pub trait PullRequestCommentHandler: Send + Sync {
    /// Handle one review-comment event.
    async fn handle(
        &self,
        ctx: Arc<dyn HandlerContext>,
        event: &PullRequestCommentEvent,
    ) -> HandlerResult;
}

/// Handler for push events.
#[async_trait]
pub trait PushHandler: Send + Sync {
    /// Handle one push event.
    async fn handle(&self, ctx: Arc<dyn HandlerContext>, event: &PushEvent) -> HandlerResult;
}

/// Handler for pull-request lifecycle events.
#[async_trait]
pub trait PullRequestHandler: Send + Sync {
    /// Handle one pull-request lifecycle event.
    async fn handle(&self, ctx: Arc<dyn HandlerContext>, event: &PullRequestEvent)
        -> HandlerResult;
}

/// Handler for canonical comment events, regardless of origin.
#[async_trait]
pub trait CommentHandler: Send + Sync {
    /// Handle one canonical comment event.
    async fn handle(&self, ctx: Arc<dyn HandlerContext>, event: &CommentEvent) -> HandlerResult;
}

// ============================================================================
// Registry
// ============================================================================

/// Handler lookup, keyed by (kind, repository).
///
/// Any method may return an empty map; an event for a repository with no
/// registered interest simply dispatches to nothing.
pub trait HandlerRegistry: Send + Sync {
    /// Handlers interested in issue-comment events for a repository.
    fn issue_comment_handlers(&self, repo: &Repository) -> HandlerMap<dyn IssueCommentHandler>;

    /// Handlers interested in review-comment events for a repository.
    fn pull_request_comment_handlers(
        &self,
        repo: &Repository,
    ) -> HandlerMap<dyn PullRequestCommentHandler>;

    /// Handlers interested in push events for a repository.
    fn push_handlers(&self, repo: &Repository) -> HandlerMap<dyn PushHandler>;

    /// Handlers interested in pull-request lifecycle events for a
    /// repository.
    fn pull_request_handlers(&self, repo: &Repository) -> HandlerMap<dyn PullRequestHandler>;

    /// Handlers interested in canonical comment events for a repository.
    fn comment_handlers(&self, repo: &Repository) -> HandlerMap<dyn CommentHandler>;
}

/// In-memory registry wired at startup.
///
/// Registration happens before the server starts accepting events; after
/// that the registry is only read.
#[derive(Default)]
pub struct StaticRegistry {
    issue_comment: HashMap<String, HandlerMap<dyn IssueCommentHandler>>,
    pull_request_comment: HashMap<String, HandlerMap<dyn PullRequestCommentHandler>>,
    push: HashMap<String, HandlerMap<dyn PushHandler>>,
    pull_request: HashMap<String, HandlerMap<dyn PullRequestHandler>>,
    comment: HashMap<String, HandlerMap<dyn CommentHandler>>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an issue-comment handler for a repository.
    pub fn register_issue_comment(
        &mut self,
        repo: &Repository,
        name: impl Into<String>,
        handler: Arc<dyn IssueCommentHandler>,
    ) {
        self.issue_comment
            .entry(repo.full_name())
            .or_default()
            .insert(name.into(), handler);
    }

    /// Register a review-comment handler for a repository.
    pub fn register_pull_request_comment(
        &mut self,
        repo: &Repository,
        name: impl Into<String>,
        handler: Arc<dyn PullRequestCommentHandler>,
    ) {
        self.pull_request_comment
            .entry(repo.full_name())
            .or_default()
            .insert(name.into(), handler);
    }

    /// Register a push handler for a repository.
    pub fn register_push(
        &mut self,
        repo: &Repository,
        name: impl Into<String>,
        handler: Arc<dyn PushHandler>,
    ) {
        self.push
            .entry(repo.full_name())
            .or_default()
            .insert(name.into(), handler);
    }

    /// Register a pull-request lifecycle handler for a repository.
    pub fn register_pull_request(
        &mut self,
        repo: &Repository,
        name: impl Into<String>,
        handler: Arc<dyn PullRequestHandler>,
    ) {
        self.pull_request
            .entry(repo.full_name())
            .or_default()
            .insert(name.into(), handler);
    }

    /// Register a canonical comment handler for a repository.
    pub fn register_comment(
        &mut self,
        repo: &Repository,
        name: impl Into<String>,
        handler: Arc<dyn CommentHandler>,
    ) {
        self.comment
            .entry(repo.full_name())
            .or_default()
            .insert(name.into(), handler);
    }

    fn resolve<H: ?Sized>(
        table: &HashMap<String, HandlerMap<H>>,
        repo: &Repository,
    ) -> HandlerMap<H> {
        table.get(&repo.full_name()).cloned().unwrap_or_default()
    }
}

impl HandlerRegistry for StaticRegistry {
    fn issue_comment_handlers(&self, repo: &Repository) -> HandlerMap<dyn IssueCommentHandler> {
        Self::resolve(&self.issue_comment, repo)
    }

    fn pull_request_comment_handlers(
        &self,
        repo: &Repository,
    ) -> HandlerMap<dyn PullRequestCommentHandler> {
        Self::resolve(&self.pull_request_comment, repo)
    }

    fn push_handlers(&self, repo: &Repository) -> HandlerMap<dyn PushHandler> {
        Self::resolve(&self.push, repo)
    }

    fn pull_request_handlers(&self, repo: &Repository) -> HandlerMap<dyn PullRequestHandler> {
        Self::resolve(&self.pull_request, repo)
    }

    fn comment_handlers(&self, repo: &Repository) -> HandlerMap<dyn CommentHandler> {
        Self::resolve(&self.comment, repo)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
