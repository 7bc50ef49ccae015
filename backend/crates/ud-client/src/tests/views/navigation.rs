use crate::views::{Navigator, Route};

use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn given_scheduled_navigation_then_delivered_after_delay() {
    // Given
    let mut navigator = Navigator::new();

    // When
    navigator.navigate_after(Route::List, Duration::from_millis(1500));

    // Then
    assert!(navigator.is_scheduled());
    assert_eq!(navigator.requested(), None);

    tokio::time::sleep(Duration::from_millis(1510)).await;
    assert_eq!(navigator.requested(), Some(Route::List));
    assert!(!navigator.is_scheduled());
}

#[tokio::test(start_paused = true)]
async fn given_dropped_navigator_then_pending_navigation_cancelled() {
    let mut navigator = Navigator::new();
    let rx = navigator.subscribe();
    navigator.navigate_after(Route::Edit(3), Duration::from_millis(100));

    drop(navigator);
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(*rx.borrow(), None);
}
