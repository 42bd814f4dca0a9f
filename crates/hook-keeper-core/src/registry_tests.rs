//! Tests for the typed handler registry.

use super::*;
use scm_events::Repository;

// ============================================================================
// Helper Functions
// ============================================================================

/// Handler that does nothing, for wiring tests.
struct NoopHandler;

#[async_trait]
impl IssueCommentHandler for NoopHandler {
    async fn handle(
        &self,
        _ctx: Arc<dyn HandlerContext>,
        _event: &IssueCommentEvent,
    ) -> HandlerResult {
        Ok(())
    }
}

#[async_trait]
impl PullRequestCommentHandler for NoopHandler {
    async fn handle(
        &self,
        _ctx: Arc<dyn HandlerContext>,
        _event: &PullRequestCommentEvent,
    ) -> HandlerResult {
        Ok(())
    }
}

#[async_trait]
impl PushHandler for NoopHandler {
    async fn handle(&self, _ctx: Arc<dyn HandlerContext>, _event: &PushEvent) -> HandlerResult {
        Ok(())
    }
}

#[async_trait]
impl PullRequestHandler for NoopHandler {
    async fn handle(
        &self,
        _ctx: Arc<dyn HandlerContext>,
        _event: &PullRequestEvent,
    ) -> HandlerResult {
        Ok(())
    }
}

#[async_trait]
impl CommentHandler for NoopHandler {
    async fn handle(&self, _ctx: Arc<dyn HandlerContext>, _event: &CommentEvent) -> HandlerResult {
        Ok(())
    }
}

fn repo() -> Repository {
    Repository::new("acme", "widgets")
}

// ============================================================================
// Resolution Tests
// ============================================================================

/// Verify an empty registry resolves empty maps for every kind.
#[test]
fn test_empty_registry_resolves_nothing() {
    let registry = StaticRegistry::new();
    let repo = repo();

    assert!(registry.issue_comment_handlers(&repo).is_empty());
    assert!(registry.pull_request_comment_handlers(&repo).is_empty());
    assert!(registry.push_handlers(&repo).is_empty());
    assert!(registry.pull_request_handlers(&repo).is_empty());
    assert!(registry.comment_handlers(&repo).is_empty());
}

/// Verify registrations resolve for their repository only.
#[test]
fn test_resolution_is_repository_scoped() {
    let mut registry = StaticRegistry::new();
    registry.register_issue_comment(&repo(), "greeter", Arc::new(NoopHandler));

    let handlers = registry.issue_comment_handlers(&repo());
    assert_eq!(handlers.len(), 1);
    assert!(handlers.contains_key("greeter"));

    let other = Repository::new("acme", "gadgets");
    assert!(registry.issue_comment_handlers(&other).is_empty());
}

/// Verify several handlers can share a repository under distinct names.
#[test]
fn test_multiple_handlers_per_repository() {
    let mut registry = StaticRegistry::new();
    registry.register_comment(&repo(), "greeter", Arc::new(NoopHandler));
    registry.register_comment(&repo(), "labeler", Arc::new(NoopHandler));

    let handlers = registry.comment_handlers(&repo());
    assert_eq!(handlers.len(), 2);
    assert!(handlers.contains_key("greeter"));
    assert!(handlers.contains_key("labeler"));
}

/// Verify kinds are registered independently: a name used for one kind
/// does not leak into another.
#[test]
fn test_kinds_are_independent() {
    let mut registry = StaticRegistry::new();
    registry.register_push(&repo(), "ci-trigger", Arc::new(NoopHandler));

    assert_eq!(registry.push_handlers(&repo()).len(), 1);
    assert!(registry.pull_request_handlers(&repo()).is_empty());
    assert!(registry.comment_handlers(&repo()).is_empty());
}
