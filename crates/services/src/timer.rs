use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use quiz_core::TimerStep;

/// Countdown interval.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Recurring countdown tick as a scoped resource.
///
/// The driver owns a spawned task that calls `on_elapsed` once per period and
/// waits for it to finish before scheduling the next tick, so at most one tick
/// is ever pending. It stops on its own when `on_elapsed` returns anything
/// other than `TimerStep::Continue`, and dropping the driver aborts the task.
#[derive(Debug)]
pub struct TimerDriver {
    task: JoinHandle<()>,
}

impl TimerDriver {
    /// Start ticking. The first tick fires one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F, Fut>(period: Duration, mut on_elapsed: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TimerStep> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let step = on_elapsed().await;
                if !step.is_running() {
                    debug!(?step, "countdown stopped");
                    break;
                }
            }
        });
        Self { task }
    }

    /// True once the driver has stopped scheduling ticks.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop ticking now. Same as dropping the driver.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
