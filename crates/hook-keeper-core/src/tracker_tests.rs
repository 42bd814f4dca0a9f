//! Tests for outstanding-work tracking.

use super::*;
use tokio_test::{assert_err, assert_ok};

/// Verify a fresh tracker has nothing outstanding and drains immediately.
#[tokio::test]
async fn test_drain_resolves_immediately_when_idle() {
    let tracker = DispatchTracker::new();

    assert_eq!(tracker.outstanding(), 0);
    assert_ok!(
        tracker
            .wait_for_drain_timeout(Duration::from_millis(50))
            .await
    );
}

/// Verify guards move the count up on begin and down on drop.
#[test]
fn test_guards_count_work() {
    let tracker = DispatchTracker::new();

    let first = tracker.begin();
    let second = tracker.begin();
    assert_eq!(tracker.outstanding(), 2);

    drop(first);
    assert_eq!(tracker.outstanding(), 1);

    drop(second);
    assert_eq!(tracker.outstanding(), 0);
}

/// Verify clones observe the same shared count.
#[test]
fn test_clones_share_state() {
    let tracker = DispatchTracker::new();
    let handle = tracker.clone();

    let _guard = tracker.begin();
    assert_eq!(handle.outstanding(), 1);
}

/// Verify a waiter wakes when the last guard is released.
#[tokio::test]
async fn test_drain_wakes_on_release() {
    let tracker = DispatchTracker::new();
    let guard = tracker.begin();

    let waiter = {
        let tracker = tracker.clone();
        tokio::spawn(async move { tracker.wait_for_drain().await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!waiter.is_finished());

    drop(guard);
    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("drain did not wake")
        .expect("waiter panicked");
}

/// Verify the timeout variant reports how many handlers were stranded.
#[tokio::test]
async fn test_drain_timeout_reports_outstanding() {
    let tracker = DispatchTracker::new();
    let _first = tracker.begin();
    let _second = tracker.begin();

    let err = assert_err!(
        tracker
            .wait_for_drain_timeout(Duration::from_millis(20))
            .await
    );
    assert_eq!(err.outstanding, 2);
}

/// Verify a panicking task still releases its count through the guard.
#[tokio::test]
async fn test_guard_releases_on_panic() {
    let tracker = DispatchTracker::new();
    let guard = tracker.begin();

    let task = tokio::spawn(async move {
        let _guard = guard;
        panic!("handler exploded");
    });

    assert!(task.await.is_err());
    assert_eq!(tracker.outstanding(), 0);
    assert_ok!(
        tracker
            .wait_for_drain_timeout(Duration::from_millis(50))
            .await
    );
}

/// Verify every concurrent waiter wakes on drain.
#[tokio::test]
async fn test_multiple_waiters_all_wake() {
    let tracker = DispatchTracker::new();
    let guard = tracker.begin();

    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let tracker = tracker.clone();
            tokio::spawn(async move { tracker.wait_for_drain().await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(20)).await;
    drop(guard);

    for waiter in waiters {
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("drain did not wake")
            .expect("waiter panicked");
    }
}

/// Verify new work can start while a drain is already in progress; the
/// waiter only wakes once everything is released.
#[tokio::test]
async fn test_drain_sees_work_started_after_wait_began() {
    let tracker = DispatchTracker::new();
    let first = tracker.begin();

    let waiter = {
        let tracker = tracker.clone();
        tokio::spawn(async move { tracker.wait_for_drain().await })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = tracker.begin();
    drop(first);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!waiter.is_finished());

    drop(second);
    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("drain did not wake")
        .expect("waiter panicked");
}
