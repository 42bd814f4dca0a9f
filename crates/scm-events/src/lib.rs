//! # SCM Events
//!
//! Decoded SCM webhook event types for the Hook-Keeper dispatch engine.
//!
//! This crate defines:
//! - Identity and snapshot types shared by all event payloads (repository,
//!   user, issue, pull request, comment)
//! - The action vocabulary carried by lifecycle events
//! - One typed event structure per webhook kind, plus the closed
//!   [`SourceEvent`] union and its payload decoder
//! - The canonical [`CommentEvent`] that comment-like activity from any
//!   origin is projected into
//!
//! The types in this crate are plain data: decoding happens at the
//! transport boundary, projection happens once per qualifying event, and
//! nothing here performs I/O.
//!
//! # Examples
//!
//! ## Decoding a payload by kind
//!
//! ```rust
//! use scm_events::SourceEvent;
//!
//! let payload = br#"{
//!     "action": "created",
//!     "repo": {"namespace": "acme", "name": "widgets"},
//!     "issue": {
//!         "number": 7, "state": "open", "body": "", "link": "",
//!         "author": {"login": "bob"}, "assignees": [], "pull_request": false
//!     },
//!     "comment": {"id": 42, "body": "hello", "link": "", "author": {"login": "alice"}}
//! }"#;
//!
//! let event = SourceEvent::decode("issue_comment", payload).unwrap();
//! assert_eq!(event.kind().as_str(), "issue_comment");
//! ```
//!
//! ## Projecting into the canonical comment event
//!
//! ```rust
//! # use scm_events::{CommentEvent, IssueCommentEvent};
//! # fn example(event: &IssueCommentEvent) {
//! let comment = CommentEvent::from_issue_comment(event);
//! assert_eq!(comment.number, event.issue.number);
//! # }
//! ```

// Public modules
pub mod action;
pub mod comment;
pub mod error;
pub mod event;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use action::Action;
pub use comment::CommentEvent;
pub use error::EventDecodeError;
pub use event::{
    BranchEvent, EventKind, IssueCommentEvent, PullRequestCommentEvent, PullRequestEvent,
    PushEvent, SourceEvent,
};
pub use types::{Comment, Issue, PullRequest, PullRequestBranch, Repository, User};
