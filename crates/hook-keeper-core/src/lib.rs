//! # Hook-Keeper Core
//!
//! Event normalization and concurrent dispatch engine for the Hook-Keeper
//! webhook automation service.
//!
//! This crate receives decoded repository events (issue comments, pull
//! request comments, pushes, pull request lifecycle changes, branch
//! changes) and fans them out to the handlers registered for the target
//! repository. Comment-like activity is additionally projected into the
//! canonical [`scm_events::CommentEvent`] so handlers written against one
//! unified model can react to it regardless of origin.
//!
//! ## Architecture
//!
//! - Business logic depends only on trait abstractions: handler lookup
//!   goes through [`HandlerRegistry`], per-handler execution contexts
//!   come from a [`ContextFactory`]
//! - Handlers run concurrently, one task per (event, handler) pair, with
//!   failures isolated to the task that produced them
//! - A shared [`DispatchTracker`] counts launched-but-unfinished handlers
//!   and is the sole mechanism for drain-based graceful shutdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hook_keeper_core::{DispatchConfig, Server, StaticRegistry};
//! # use hook_keeper_core::ContextFactory;
//!
//! # async fn example(contexts: Arc<dyn ContextFactory>) {
//! let config = DispatchConfig::default();
//! let registry = Arc::new(StaticRegistry::new());
//! let server = Server::new(&config, registry, contexts);
//!
//! // feed decoded events to the per-kind entry points, then drain on
//! // shutdown
//! let tracker = server.tracker();
//! tracker
//!     .wait_for_drain_timeout(config.drain_timeout())
//!     .await
//!     .ok();
//! # }
//! ```
//!
//! Entry points spawn onto the current Tokio runtime and never await
//! handler completion; they must be called from within a runtime.

// Public modules
pub mod classify;
pub mod config;
pub mod context;
pub mod registry;
pub mod server;
pub mod tracker;

// Re-export commonly used types at crate root for convenience
pub use classify::{comment_relevance, CommentRelevance};
pub use config::{ConfigError, DispatchConfig};
pub use context::{CommentScope, ContextFactory, HandlerContext};
pub use registry::{
    CommentHandler, HandlerMap, HandlerRegistry, HandlerResult, IssueCommentHandler,
    PullRequestCommentHandler, PullRequestHandler, PushHandler, StaticRegistry,
};
pub use server::Server;
pub use tracker::{DispatchTracker, DrainTimeout, WorkGuard};
