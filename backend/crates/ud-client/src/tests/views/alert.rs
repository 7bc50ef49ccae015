use crate::views::{AlertKind, AlertSlot};

use std::time::Duration;

const DISMISS: Duration = Duration::from_millis(5000);

#[tokio::test(start_paused = true)]
async fn given_shown_alert_when_dismiss_delay_passes_then_closed() {
    // Given
    let mut slot = AlertSlot::new(DISMISS);
    slot.error("Could not reach the server. Check your connection.");
    assert_eq!(slot.current().map(|a| a.kind), Some(AlertKind::Error));

    // When
    tokio::time::sleep(DISMISS - Duration::from_millis(10)).await;
    assert!(slot.is_visible());
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Then
    assert!(!slot.is_visible());
}

#[tokio::test(start_paused = true)]
async fn given_newer_alert_then_older_timer_does_not_close_it() {
    let mut slot = AlertSlot::new(DISMISS);
    slot.success("first");

    tokio::time::sleep(Duration::from_millis(3000)).await;
    slot.success("second");
    tokio::time::sleep(Duration::from_millis(3000)).await;

    assert_eq!(
        slot.current().map(|a| a.message).as_deref(),
        Some("second")
    );

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert!(slot.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn given_visible_alert_when_dismissed_then_closed_immediately() {
    let mut slot = AlertSlot::new(DISMISS);
    slot.show(AlertKind::Warning, "careful");

    slot.dismiss();

    assert!(slot.current().is_none());
}

#[test]
fn test_alert_titles() {
    assert_eq!(AlertKind::Success.title(), "Success");
    assert_eq!(AlertKind::Error.title(), "Error");
    assert_eq!(AlertKind::Warning.title(), "Warning");
    assert_eq!(AlertKind::Info.title(), "Information");
}
