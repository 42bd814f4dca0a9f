//! Per-handler execution context boundary.
//!
//! The dispatch engine does not construct execution contexts itself; the
//! embedding service supplies a [`ContextFactory`] that packages whatever
//! a handler needs (clients, configuration, comment pruning) behind the
//! [`HandlerContext`] trait. The dispatcher only ever drives the
//! lifecycle: build one context per handler invocation, prepare comment
//! pruning for comment-bearing dispatches, hand the context to the
//! handler.

use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Scope key for comment pruning state.
///
/// Identifies the issue or pull request whose comments a handler may
/// prune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentScope {
    /// Organization or owner of the repository
    pub namespace: String,

    /// Repository name
    pub repo: String,

    /// Issue or pull request number
    pub number: u64,
}

impl CommentScope {
    /// Create a pruning scope.
    pub fn new(namespace: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            namespace: namespace.into(),
            repo: repo.into(),
            number,
        }
    }
}

/// Execution context for a single handler invocation.
///
/// Opaque to the dispatch engine beyond this surface. Implementations
/// carry the handler-scoped diagnostic context, the handler's declared
/// name, and access to shared configuration and clients.
#[async_trait]
pub trait HandlerContext: Send + Sync {
    /// The declared name of the handler this context was built for.
    fn handler_name(&self) -> &str;

    /// Prepare comment-pruning state scoped to one issue or pull request.
    ///
    /// Invoked by the dispatcher before the handler body, and only for
    /// comment-bearing dispatches.
    async fn prepare_comment_pruning(&self, scope: &CommentScope);
}

/// Factory for per-handler execution contexts.
///
/// Called once per (event, handler) pair; contexts are never shared
/// between handler invocations.
#[cfg_attr(test, automock)]
pub trait ContextFactory: Send + Sync {
    /// Build the execution context for one handler invocation.
    fn context(&self, handler_name: &str) -> Arc<dyn HandlerContext>;
}
