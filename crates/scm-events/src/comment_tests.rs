//! Tests for canonical comment event projections.

use super::*;
use crate::event::{IssueCommentEvent, PullRequestCommentEvent, PullRequestEvent};
use crate::types::{Comment, Issue, PullRequest, PullRequestBranch};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_comment() -> Comment {
    Comment {
        id: 42,
        body: "hello".to_string(),
        link: "https://example.com/issues/7#comment-42".to_string(),
        author: User::new("alice"),
        created_at: None,
        updated_at: None,
    }
}

fn sample_issue(pull_request: bool) -> Issue {
    Issue {
        number: 7,
        state: "open".to_string(),
        body: "the issue".to_string(),
        link: "https://example.com/issues/7".to_string(),
        author: User::new("bob"),
        assignees: vec![User::new("carol"), User::new("dave"), User::new("carol")],
        pull_request,
    }
}

fn sample_pull_request() -> PullRequest {
    PullRequest {
        number: 12,
        state: "open".to_string(),
        body: "the change".to_string(),
        link: "https://example.com/pr/12".to_string(),
        author: User::new("carol"),
        assignees: vec![User::new("erin")],
        base: PullRequestBranch {
            branch_ref: "main".to_string(),
            repo: Repository::new("acme", "widgets"),
        },
    }
}

// ============================================================================
// Issue Comment Projection Tests
// ============================================================================

/// Verify the issue-comment projection maps every field from its source.
#[test]
fn test_from_issue_comment_field_mapping() {
    let event = IssueCommentEvent {
        action: Action::Create,
        repo: Repository::new("acme", "widgets"),
        issue: sample_issue(false),
        comment: sample_comment(),
    };

    let comment = CommentEvent::from_issue_comment(&event);

    assert_eq!(comment.id, "42");
    assert!(!comment.is_pull_request);
    assert_eq!(comment.action, Action::Create);
    assert_eq!(comment.body, "hello");
    assert_eq!(comment.link, "https://example.com/issues/7#comment-42");
    assert_eq!(comment.number, 7);
    assert_eq!(comment.repo.full_name(), "acme/widgets");
    assert_eq!(comment.author.login, "alice");
    assert_eq!(comment.issue_author.login, "bob");
    assert_eq!(comment.issue_state, "open");
    assert_eq!(comment.issue_body, "the issue");
    assert_eq!(comment.issue_link, "https://example.com/issues/7");
}

/// Verify pull-request-ness of the owning issue carries through.
#[test]
fn test_from_issue_comment_on_pull_request() {
    let event = IssueCommentEvent {
        action: Action::Edited,
        repo: Repository::new("acme", "widgets"),
        issue: sample_issue(true),
        comment: sample_comment(),
    };

    let comment = CommentEvent::from_issue_comment(&event);
    assert!(comment.is_pull_request);
}

/// Verify assignee order and duplicates are preserved exactly.
#[test]
fn test_from_issue_comment_preserves_assignees() {
    let event = IssueCommentEvent {
        action: Action::Create,
        repo: Repository::new("acme", "widgets"),
        issue: sample_issue(false),
        comment: sample_comment(),
    };

    let comment = CommentEvent::from_issue_comment(&event);
    let logins: Vec<&str> = comment.assignees.iter().map(|u| u.login.as_str()).collect();

    assert_eq!(logins, vec!["carol", "dave", "carol"]);
}

// ============================================================================
// Pull Request Comment Projection Tests
// ============================================================================

/// Verify the review-comment projection forces the pull-request flag and
/// sources issue-side fields from the pull request.
#[test]
fn test_from_pull_request_comment_field_mapping() {
    let event = PullRequestCommentEvent {
        action: Action::Create,
        repo: Repository::new("acme", "widgets"),
        pull_request: sample_pull_request(),
        comment: sample_comment(),
    };

    let comment = CommentEvent::from_pull_request_comment(&event);

    assert_eq!(comment.id, "42");
    assert!(comment.is_pull_request);
    assert_eq!(comment.number, 12);
    assert_eq!(comment.author.login, "alice");
    assert_eq!(comment.issue_author.login, "carol");
    assert_eq!(comment.issue_state, "open");
    assert_eq!(comment.issue_body, "the change");
    assert_eq!(comment.issue_link, "https://example.com/pr/12");
    assert_eq!(comment.assignees, vec![User::new("erin")]);
}

// ============================================================================
// Pull Request Lifecycle Projection Tests
// ============================================================================

/// Verify the lifecycle projection uses the delivery id and lets the pull
/// request description stand in for the comment.
#[test]
fn test_from_pull_request_field_mapping() {
    let event = PullRequestEvent {
        action: Action::Open,
        delivery_id: "guid-123".to_string(),
        repo: Repository::new("fork-owner", "widgets-fork"),
        pull_request: sample_pull_request(),
    };

    let comment = CommentEvent::from_pull_request(&event);

    assert_eq!(comment.id, "guid-123");
    assert!(comment.is_pull_request);
    assert_eq!(comment.body, "the change");
    assert_eq!(comment.issue_body, "the change");
    assert_eq!(comment.link, "https://example.com/pr/12");
    assert_eq!(comment.issue_link, "https://example.com/pr/12");
    assert_eq!(comment.author.login, "carol");
    assert_eq!(comment.issue_author.login, "carol");
    assert_eq!(comment.issue_state, "open");
}

/// Verify the lifecycle projection resolves the target repository.
#[test]
fn test_from_pull_request_uses_target_repository() {
    let mut event = PullRequestEvent {
        action: Action::Open,
        delivery_id: "guid-123".to_string(),
        repo: Repository::new("fork-owner", "widgets-fork"),
        pull_request: sample_pull_request(),
    };

    let comment = CommentEvent::from_pull_request(&event);
    assert_eq!(comment.repo.full_name(), "acme/widgets");

    event.pull_request.base.repo = Repository::new("", "");
    let comment = CommentEvent::from_pull_request(&event);
    assert_eq!(comment.repo.full_name(), "fork-owner/widgets-fork");
}
