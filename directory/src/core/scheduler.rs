//! Rotation scheduler: owns at most one armed timer

use std::time::Duration;

use crate::traits::{RotationHandle, TimerSource};

/// Drives automatic advancement through the directory.
///
/// `restart` and `stop` are the only mutators. Every arm bumps the
/// generation, so ticks queued by a cancelled timer can be recognised and
/// dropped.
pub struct RotationScheduler<T: TimerSource> {
    timer_source: T,
    period: Duration,
    handle: Option<Box<dyn RotationHandle>>,
    generation: u64,
}

impl<T: TimerSource> RotationScheduler<T> {
    pub fn new(timer_source: T, period: Duration) -> Self {
        Self {
            timer_source,
            period,
            handle: None,
            generation: 0,
        }
    }

    /// Cancel any live timer, then arm a fresh one unless the directory is empty
    pub fn restart(&mut self, directory_len: usize) {
        self.stop();
        if directory_len == 0 {
            return;
        }
        self.generation += 1;
        self.handle = Some(self.timer_source.arm(self.period, self.generation));
    }

    /// Cancel the live timer, if any
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a tick tagged with `generation` comes from the live timer
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_armed() && generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn timer_source(&self) -> &T {
        &self.timer_source
    }
}

impl<T: TimerSource> Drop for RotationScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockTimerSource;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts live handles across the test
    struct CountingHandle {
        live: Arc<AtomicUsize>,
        cancelled: bool,
    }

    impl RotationHandle for CountingHandle {
        fn cancel(&mut self) {
            if !self.cancelled {
                self.cancelled = true;
                self.live.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }

    fn counting_source(live: Arc<AtomicUsize>) -> MockTimerSource {
        let mut source = MockTimerSource::new();
        source.expect_arm().returning(move |_, _| {
            live.fetch_add(1, Ordering::SeqCst);
            Box::new(CountingHandle { live: live.clone(), cancelled: false })
        });
        source
    }

    #[test]
    fn test_restart_twice_leaves_one_timer() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RotationScheduler::new(counting_source(live.clone()), Duration::from_millis(12_000));

        scheduler.restart(3);
        scheduler.restart(3);

        assert!(scheduler.is_armed());
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.generation(), 2);
    }

    #[test]
    fn test_restart_on_empty_directory_only_cancels() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RotationScheduler::new(counting_source(live.clone()), Duration::from_millis(50));

        scheduler.restart(2);
        scheduler.restart(0);

        assert!(!scheduler.is_armed());
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RotationScheduler::new(counting_source(live.clone()), Duration::from_millis(50));

        scheduler.restart(1);
        scheduler.stop();
        scheduler.stop();

        assert!(!scheduler.is_armed());
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stale_generations_are_rejected() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RotationScheduler::new(counting_source(live), Duration::from_millis(50));

        scheduler.restart(2);
        let first = scheduler.generation();
        scheduler.restart(2);

        assert!(!scheduler.accepts(first));
        assert!(scheduler.accepts(scheduler.generation()));

        scheduler.stop();
        assert!(!scheduler.accepts(scheduler.generation()));
    }

    #[test]
    fn test_arms_with_configured_period() {
        let mut source = MockTimerSource::new();
        source
            .expect_arm()
            .withf(|period, generation| *period == Duration::from_millis(12_000) && *generation == 1)
            .times(1)
            .returning(|_, _| {
                Box::new(CountingHandle { live: Arc::new(AtomicUsize::new(1)), cancelled: false })
            });

        let mut scheduler = RotationScheduler::new(source, Duration::from_millis(12_000));
        scheduler.restart(1);
        assert!(scheduler.is_armed());
    }
}
