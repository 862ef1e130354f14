// web_app/state/timer.rs - Cancellable timers and the not-found countdown
//
// A view that schedules a browser timer keeps the handle inside a
// ScheduledTask and drops it from `on_cleanup`, so leaving the view clears
// the timer on every exit path.

/// A timer handle that can be cleared
pub trait Cancel {
    fn cancel(&self);
}

/// Owns a timer handle and clears it when dropped
#[derive(Debug)]
pub struct ScheduledTask<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> ScheduledTask<H> {
    pub fn new(handle: H) -> Self {
        Self { handle: Some(handle) }
    }

    /// Clear the timer now; later calls and the drop are no-ops
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: Cancel> Drop for ScheduledTask<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use browser::scoped_task;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod browser {
    use super::{Cancel, ScheduledTask};
    use leptos::prelude::*;

    /// Timer slot tied to the current reactive owner
    ///
    /// Whatever task the slot holds when the owner is cleaned up is dropped,
    /// which clears its timer.
    pub fn scoped_task<H>() -> StoredValue<Option<ScheduledTask<H>>>
    where
        H: Cancel + Send + Sync + 'static,
    {
        let slot = StoredValue::new(None);
        on_cleanup(move || {
            let _ = slot.try_update_value(|task| task.take());
        });
        slot
    }

    impl Cancel for TimeoutHandle {
        fn cancel(&self) {
            self.clear();
        }
    }

    impl Cancel for IntervalHandle {
        fn cancel(&self) {
            self.clear();
        }
    }
}

/// Result of one countdown tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// Seconds left to display
    Tick(u32),
    /// Reached zero: redirect now
    Expired,
}

/// Seconds-remaining counter driven by a single one-second interval
///
/// The displayed value and the redirect come from the same tick, so the
/// redirect fires exactly when the display reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance by one second
    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Expired
        } else {
            CountdownStep::Tick(self.remaining)
        }
    }

    pub fn message(&self) -> String {
        let unit = if self.remaining == 1 { "second" } else { "seconds" };
        format!("{} {}", self.remaining, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHandle {
        cleared: Rc<Cell<u32>>,
    }

    impl Cancel for FakeHandle {
        fn cancel(&self) {
            self.cleared.set(self.cleared.get() + 1);
        }
    }

    #[test]
    fn test_drop_clears_timer() {
        let handle = FakeHandle::default();
        {
            let _task = ScheduledTask::new(handle.clone());
            assert_eq!(handle.cleared.get(), 0);
        }
        assert_eq!(handle.cleared.get(), 1);
    }

    #[test]
    fn test_cancel_then_drop_clears_once() {
        let handle = FakeHandle::default();
        let mut task = ScheduledTask::new(handle.clone());

        task.cancel();
        assert_eq!(handle.cleared.get(), 1);
        task.cancel();
        drop(task);

        assert_eq!(handle.cleared.get(), 1);
    }

    #[test]
    fn test_replacing_task_clears_previous() {
        let first = FakeHandle::default();
        let second = FakeHandle::default();

        let mut slot = Some(ScheduledTask::new(first.clone()));
        let _ = slot.replace(ScheduledTask::new(second.clone()));
        assert_eq!(first.cleared.get(), 1);
        assert_eq!(second.cleared.get(), 0);

        slot.take();
        assert_eq!(second.cleared.get(), 1);
    }

    #[test]
    fn test_countdown_reaches_zero_on_last_tick() {
        let mut countdown = Countdown::new(5);
        let steps: Vec<CountdownStep> = (0..5).map(|_| countdown.tick()).collect();

        assert_eq!(
            steps,
            vec![
                CountdownStep::Tick(4),
                CountdownStep::Tick(3),
                CountdownStep::Tick(2),
                CountdownStep::Tick(1),
                CountdownStep::Expired,
            ]
        );
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_countdown_stays_expired() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), CountdownStep::Expired);
        assert_eq!(countdown.tick(), CountdownStep::Expired);
    }

    #[test]
    fn test_countdown_message() {
        assert_eq!(Countdown::new(5).message(), "5 seconds");
        assert_eq!(Countdown::new(1).message(), "1 second");
    }
}
