use gloo_timers::callback::Timeout;

type Schedule<H> = fn(u32, Box<dyn FnOnce()>) -> H;

/// Collapses bursts of calls into one, fired after `quiet_ms` without a new
/// call. Dropping the pending [`Timeout`] cancels it.
pub struct Debouncer<H = Timeout> {
    quiet_ms: u32,
    pending: Option<H>,
    schedule: Schedule<H>,
}

impl Debouncer<Timeout> {
    pub fn new(quiet_ms: u32) -> Self {
        Self::with_scheduler(quiet_ms, |ms, f| Timeout::new(ms, f))
    }
}

impl<H> Debouncer<H> {
    pub fn with_scheduler(quiet_ms: u32, schedule: Schedule<H>) -> Self {
        Self {
            quiet_ms,
            pending: None,
            schedule,
        }
    }

    /// Schedules `f`, replacing (and so cancelling) whatever was pending.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some((self.schedule)(self.quiet_ms, Box::new(f)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    thread_local! {
        static LIVE_TIMERS: Cell<usize> = Cell::new(0);
        static LAST_DELAY: Cell<u32> = Cell::new(0);
    }

    /// Stands in for a browser timeout: counts live handles and lets the test
    /// fire the callback by hand.
    struct ManualTimer {
        callback: Option<Box<dyn FnOnce()>>,
    }

    impl ManualTimer {
        fn schedule(ms: u32, callback: Box<dyn FnOnce()>) -> Self {
            LIVE_TIMERS.with(|live| live.set(live.get() + 1));
            LAST_DELAY.with(|delay| delay.set(ms));
            Self { callback: Some(callback) }
        }

        fn fire(mut self) {
            if let Some(callback) = self.callback.take() {
                callback();
            }
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            LIVE_TIMERS.with(|live| live.set(live.get() - 1));
        }
    }

    fn live_timers() -> usize {
        LIVE_TIMERS.with(Cell::get)
    }

    #[test]
    fn burst_collapses_into_the_last_call() {
        let fired = Rc::new(Cell::new(0u32));
        let runs = Rc::new(Cell::new(0u32));
        let mut debouncer = Debouncer::with_scheduler(50, ManualTimer::schedule);

        for value in 1..=3 {
            let fired = fired.clone();
            let runs = runs.clone();
            debouncer.call(move || {
                fired.set(value);
                runs.set(runs.get() + 1);
            });
            assert_eq!(live_timers(), 1, "only one timer may be pending");
        }
        assert_eq!(LAST_DELAY.with(Cell::get), 50);

        let timer = debouncer.pending.take().expect("pending timer");
        timer.fire();
        assert_eq!(fired.get(), 3);
        assert_eq!(runs.get(), 1);
        assert_eq!(live_timers(), 0);
    }

    #[test]
    fn cancel_drops_the_pending_call() {
        let mut debouncer = Debouncer::with_scheduler(50, ManualTimer::schedule);
        debouncer.call(|| panic!("cancelled call must not run"));
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(live_timers(), 0);
    }
}
