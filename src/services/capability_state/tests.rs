use super::CapabilityState;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

#[tokio::test]
async fn test_unknown_capability_is_not_fired() {
    let state = CapabilityState::new();

    assert!(!state.get_state("Widget").await);
}

#[tokio::test]
async fn test_set_state_is_monotonic() {
    // Arrange
    let state = CapabilityState::new();
    state.set_state("Widget", false).await;
    assert!(!state.get_state("Widget").await);

    // Act
    state.set_state("Widget", true).await;
    state.set_state("Widget", false).await;

    // Assert
    assert!(state.get_state("Widget").await);
}

#[tokio::test]
async fn test_try_mark_fired_transitions_once() {
    let state = CapabilityState::new();

    assert!(state.try_mark_fired("Widget").await);
    assert!(!state.try_mark_fired("Widget").await);
    assert!(state.get_state("Widget").await);
}

#[tokio::test]
async fn test_try_mark_fired_after_explicit_false() {
    let state = CapabilityState::new();
    state.set_state("Widget", false).await;

    assert!(state.try_mark_fired("Widget").await);
}

#[tokio::test]
async fn test_fired_capabilities_are_sorted() {
    let state = CapabilityState::new();
    state.set_state("Zebra", true).await;
    state.set_state("Apple", true).await;
    state.set_state("Mango", false).await;

    assert_eq!(state.fired_capabilities().await, vec!["Apple", "Zebra"]);
}

#[tokio::test]
async fn test_shared_returns_the_same_instance() {
    let first = CapabilityState::shared();
    let second = CapabilityState::shared();

    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
/// Validates that concurrent callers observe exactly one successful transition
async fn test_concurrent_transitions_succeed_once() {
    let state = Arc::new(CapabilityState::new());
    let transitions = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let state = state.clone();
            let transitions = transitions.clone();
            tokio::spawn(async move {
                if state.try_mark_fired("Contended").await {
                    transitions.fetch_add(1, SeqCst);
                }
            })
        })
        .collect();

    for task in futures::future::join_all(tasks).await {
        task.unwrap();
    }

    assert_eq!(transitions.load(SeqCst), 1);
}
