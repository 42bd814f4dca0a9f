//! The dispatch server.
//!
//! One entry point per source event kind. Each entry point resolves the
//! handlers registered for the event's target repository, launches one
//! task per handler, and, for comment-capable kinds, projects the event
//! into the canonical comment form and launches a second wave of
//! canonical-comment handlers.
//!
//! Entry points are fire-and-forget: they return once every handler task
//! has been launched, never once the handlers have finished. Callers that
//! need completion use the shared [`DispatchTracker`]. The only ordering
//! guarantee is causal: the canonical wave for an event is launched after
//! the kind-specific wave for that event has been launched.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, info_span, warn, Instrument};

use scm_events::{
    BranchEvent, CommentEvent, EventKind, IssueCommentEvent, PullRequestCommentEvent,
    PullRequestEvent, PushEvent, SourceEvent,
};

use crate::classify::{comment_relevance, CommentRelevance};
use crate::config::DispatchConfig;
use crate::context::{CommentScope, ContextFactory};
use crate::registry::{
    CommentHandler, HandlerRegistry, HandlerResult, IssueCommentHandler, PullRequestCommentHandler,
    PullRequestHandler, PushHandler,
};
use crate::tracker::DispatchTracker;

/// Concurrent fan-out dispatcher for decoded repository events.
pub struct Server {
    registry: Arc<dyn HandlerRegistry>,
    contexts: Arc<dyn ContextFactory>,
    tracker: DispatchTracker,
    limiter: Option<Arc<Semaphore>>,
}

impl Server {
    /// Create a dispatch server.
    ///
    /// # Arguments
    ///
    /// * `config` - dispatch tuning; `max_in_flight` becomes the task
    ///   ceiling when set
    /// * `registry` - handler lookup, consulted once per entry-point call
    /// * `contexts` - execution-context factory, invoked once per
    ///   (event, handler) pair
    pub fn new(
        config: &DispatchConfig,
        registry: Arc<dyn HandlerRegistry>,
        contexts: Arc<dyn ContextFactory>,
    ) -> Self {
        Self {
            registry,
            contexts,
            tracker: DispatchTracker::new(),
            limiter: config.max_in_flight.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    /// Get the shared outstanding-work tracker.
    ///
    /// Shutdown sequences stop feeding events to the server, then wait on
    /// this tracker for the in-flight handlers to finish.
    pub fn tracker(&self) -> DispatchTracker {
        self.tracker.clone()
    }

    /// Dispatch a decoded event of any kind.
    pub fn handle_event(&self, event: SourceEvent) {
        match event {
            SourceEvent::IssueComment(event) => self.handle_issue_comment(event),
            SourceEvent::PullRequestComment(event) => self.handle_pull_request_comment(event),
            SourceEvent::Push(event) => self.handle_push(event),
            SourceEvent::PullRequest(event) => self.handle_pull_request(event),
            SourceEvent::Branch(event) => self.handle_branch(event),
        }
    }

    /// Dispatch an issue-comment event.
    ///
    /// Fans out to issue-comment handlers, then unconditionally projects
    /// the event into the canonical comment form and fans out to
    /// canonical-comment handlers.
    pub fn handle_issue_comment(&self, event: IssueCommentEvent) {
        let span = info_span!(
            "issue_comment",
            namespace = %event.repo.namespace,
            repo = %event.repo.name,
            number = event.issue.number,
            author = %event.comment.author.login,
            link = %event.comment.link,
        );
        let _entered = span.enter();
        info!(action = %event.action, "Issue comment received");

        let handlers = self.registry.issue_comment_handlers(&event.repo);
        let scope = CommentScope::new(&event.repo.namespace, &event.repo.name, event.issue.number);
        let event = Arc::new(event);

        for (name, handler) in handlers {
            let ctx = self.contexts.context(&name);
            let event = Arc::clone(&event);
            let scope = scope.clone();
            self.spawn_handler(&name, async move {
                ctx.prepare_comment_pruning(&scope).await;
                handler.handle(Arc::clone(&ctx), &event).await
            });
        }

        self.dispatch_comment(CommentEvent::from_issue_comment(&event));
    }

    /// Dispatch a pull-request review-comment event.
    ///
    /// Same shape as the issue-comment entry point; the canonical
    /// projection is unconditional here too.
    pub fn handle_pull_request_comment(&self, event: PullRequestCommentEvent) {
        let span = info_span!(
            "pull_request_comment",
            namespace = %event.repo.namespace,
            repo = %event.repo.name,
            number = event.pull_request.number,
            author = %event.comment.author.login,
            link = %event.comment.link,
        );
        let _entered = span.enter();
        info!(action = %event.action, "Pull request comment received");

        let handlers = self.registry.pull_request_comment_handlers(&event.repo);
        let scope = CommentScope::new(
            &event.repo.namespace,
            &event.repo.name,
            event.pull_request.number,
        );
        let event = Arc::new(event);

        for (name, handler) in handlers {
            let ctx = self.contexts.context(&name);
            let event = Arc::clone(&event);
            let scope = scope.clone();
            self.spawn_handler(&name, async move {
                ctx.prepare_comment_pruning(&scope).await;
                handler.handle(Arc::clone(&ctx), &event).await
            });
        }

        self.dispatch_comment(CommentEvent::from_pull_request_comment(&event));
    }

    /// Dispatch a push event.
    ///
    /// Kind-specific fan-out only; pushes have no canonical comment
    /// projection and no pruning scope.
    pub fn handle_push(&self, event: PushEvent) {
        let span = info_span!(
            "push",
            namespace = %event.repo.namespace,
            repo = %event.repo.name,
            git_ref = %event.ref_name,
            head = %event.after,
        );
        let _entered = span.enter();

        let handlers = self.registry.push_handlers(&event.repo);
        info!(count = handlers.len(), "Push received");

        let event = Arc::new(event);
        for (name, handler) in handlers {
            let ctx = self.contexts.context(&name);
            let event = Arc::clone(&event);
            self.spawn_handler(&name, async move { handler.handle(ctx, &event).await });
        }
    }

    /// Dispatch a pull-request lifecycle event.
    ///
    /// Handler resolution and the canonical projection both use the
    /// target repository: the base repository of the pull request when it
    /// names one, the event's top-level repository otherwise. The
    /// canonical wave only runs for actions classified as commentable;
    /// unrecognized actions are reported and treated as not commentable.
    pub fn handle_pull_request(&self, event: PullRequestEvent) {
        let target = event.target_repository().clone();
        let span = info_span!(
            "pull_request",
            namespace = %target.namespace,
            repo = %target.name,
            number = event.pull_request.number,
            author = %event.pull_request.author.login,
            link = %event.pull_request.link,
        );
        let _entered = span.enter();

        let handlers = self.registry.pull_request_handlers(&target);
        info!(action = %event.action, count = handlers.len(), "Pull request received");

        let scope = CommentScope::new(&target.namespace, &target.name, event.pull_request.number);
        let event = Arc::new(event);

        for (name, handler) in handlers {
            let ctx = self.contexts.context(&name);
            let event = Arc::clone(&event);
            let scope = scope.clone();
            self.spawn_handler(&name, async move {
                ctx.prepare_comment_pruning(&scope).await;
                handler.handle(Arc::clone(&ctx), &event).await
            });
        }

        match comment_relevance(&event.action) {
            CommentRelevance::Commentable => {
                self.dispatch_comment(CommentEvent::from_pull_request(&event));
            }
            CommentRelevance::NotCommentable => {}
            CommentRelevance::Unrecognized => {
                error!(
                    event_kind = %EventKind::PullRequest,
                    action = %event.action,
                    "Unrecognized action; event not surfaced as a comment event"
                );
            }
        }
    }

    /// Accept a branch event.
    ///
    /// Branch events are not dispatched; the kind is surfaced to the
    /// diagnostic sink so the gap stays operator-visible.
    pub fn handle_branch(&self, event: BranchEvent) {
        warn!(
            event_kind = %EventKind::Branch,
            namespace = %event.repo.namespace,
            repo = %event.repo.name,
            git_ref = %event.ref_name,
            "Event kind is not supported; dropping without dispatch"
        );
    }

    /// Fan a canonical comment event out to the comment handlers
    /// registered for its repository.
    fn dispatch_comment(&self, comment: CommentEvent) {
        let span = info_span!(
            "comment_event",
            namespace = %comment.repo.namespace,
            repo = %comment.repo.name,
            number = comment.number,
            author = %comment.author.login,
            link = %comment.link,
        );
        let _entered = span.enter();

        let handlers = self.registry.comment_handlers(&comment.repo);
        let scope = CommentScope::new(&comment.repo.namespace, &comment.repo.name, comment.number);
        let comment = Arc::new(comment);

        for (name, handler) in handlers {
            let ctx = self.contexts.context(&name);
            let comment = Arc::clone(&comment);
            let scope = scope.clone();
            self.spawn_handler(&name, async move {
                ctx.prepare_comment_pruning(&scope).await;
                handler.handle(Arc::clone(&ctx), &comment).await
            });
        }
    }

    /// Launch one handler task.
    ///
    /// The outstanding-work count is taken before the spawn so it
    /// reflects the launch even if the task runs immediately. Inside the
    /// task: hold the guard for the task's whole lifetime, take a limiter
    /// permit when a ceiling is configured, run the handler, and report
    /// any failure inside the handler's span. Failures never leave the
    /// task; a panicking handler is contained by the task boundary and
    /// still releases its count through the guard.
    fn spawn_handler<F>(&self, name: &str, work: F)
    where
        F: Future<Output = HandlerResult> + Send + 'static,
    {
        let span = info_span!("handler", handler = %name);
        let guard = self.tracker.begin();
        let limiter = self.limiter.clone();

        tokio::spawn(
            async move {
                let _guard = guard;
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };

                if let Err(error) = work.await {
                    error!(error = %error, "Handler failed");
                }
            }
            .instrument(span),
        );
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
