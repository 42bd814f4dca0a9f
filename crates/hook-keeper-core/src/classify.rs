//! Action classification for pull-request lifecycle events.
//!
//! Issue comments and pull request review comments are comment-relevant
//! by construction (their hooks fire only for comment lifecycle actions)
//! and never consult this module. Pushes never surface as comment events.
//! Pull-request lifecycle actions are the one kind where the decision is
//! real, and it lives here as a pure function so the dispatch server owns
//! every diagnostic side effect.

use scm_events::Action;

/// Whether a pull-request lifecycle action constitutes a commentable
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRelevance {
    /// The action should additionally surface as a canonical comment
    /// event.
    Commentable,

    /// The action is pure lifecycle noise from a comment perspective.
    NotCommentable,

    /// The action is outside the known vocabulary. Callers must treat
    /// this as not-commentable and report it; an unrecognized action is
    /// never silently promoted to a comment trigger.
    Unrecognized,
}

/// Classify a pull-request lifecycle action.
///
/// Pure and total over the action vocabulary. The unrecognized arm is the
/// safety net for schema drift in the upstream event source.
pub fn comment_relevance(action: &Action) -> CommentRelevance {
    match action {
        Action::Create
        | Action::Open
        | Action::Submitted
        | Action::Edited
        | Action::Delete
        | Action::Dismissed => CommentRelevance::Commentable,

        Action::Assigned
        | Action::Unassigned
        | Action::ReviewRequested
        | Action::ReviewRequestRemoved
        | Action::Label
        | Action::Unlabel
        | Action::Close
        | Action::Reopen
        | Action::Sync => CommentRelevance::NotCommentable,

        Action::Unknown(_) => CommentRelevance::Unrecognized,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
