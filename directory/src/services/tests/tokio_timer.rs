//! Tests for TokioTimerSource

use std::time::Duration;
use tokio::sync::mpsc;

use crate::services::tokio_timer::TokioTimerSource;
use crate::traits::TimerSource;
use crate::types::SessionEvent;

#[tokio::test]
async fn test_armed_timer_sends_tagged_ticks() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = TokioTimerSource::new(tx);

    let _handle = source.arm(Duration::from_millis(20), 7);

    for _ in 0..2 {
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick within timeout");
        assert_eq!(event, Some(SessionEvent::Tick { generation: 7 }));
    }
}

#[tokio::test]
async fn test_cancelled_timer_stops_ticking() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = TokioTimerSource::new(tx);

    let mut handle = source.arm(Duration::from_millis(20), 1);
    handle.cancel();
    handle.cancel();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_dropped_handle_stops_ticking() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = TokioTimerSource::new(tx);

    drop(source.arm(Duration::from_millis(20), 1));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}
