//! Rotation timers backed by tokio tasks
//!
//! A timer task never touches session state. It only posts
//! [`SessionEvent::Tick`] onto the session channel.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::traits::{RotationHandle, TimerSource};
use crate::types::SessionEvent;

/// Spawns one interval task per armed timer
#[derive(Clone)]
pub struct TokioTimerSource {
    events: UnboundedSender<SessionEvent>,
}

impl TokioTimerSource {
    pub fn new(events: UnboundedSender<SessionEvent>) -> Self {
        Self { events }
    }
}

impl TimerSource for TokioTimerSource {
    fn arm(&self, period: Duration, generation: u64) -> Box<dyn RotationHandle> {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            // First tick one full period after arming
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(SessionEvent::Tick { generation }).is_err() {
                    // Session is gone
                    break;
                }
            }
        });

        Box::new(TokioRotationHandle { task: Some(task) })
    }
}

/// Aborts its interval task on cancel or drop
pub struct TokioRotationHandle {
    task: Option<JoinHandle<()>>,
}

impl RotationHandle for TokioRotationHandle {
    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioRotationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
