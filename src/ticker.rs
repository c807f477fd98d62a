use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// A host service that calls back periodically until the returned handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Ticks from a task on the current [`tokio::task::LocalSet`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

pub struct TickTask(JoinHandle<()>);

impl Drop for TickTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TickTask;

    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> TickTask {
        TickTask(tokio::task::spawn_local(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            // Late ticks are not caught up.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                tick();
            }
        }))
    }
}

/// Ticks from a repeated timer on the slint event loop.
#[cfg(feature = "ui")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SlintScheduler;

#[cfg(feature = "ui")]
impl Scheduler for SlintScheduler {
    type Handle = slint::Timer;

    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> slint::Timer {
        let timer = slint::Timer::default();
        timer.start(slint::TimerMode::Repeated, period, move || tick());
        timer
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_ticks_until_dropped() {
        LocalSet::new()
            .run_until(async {
                let count = Rc::new(Cell::new(0));
                let handle = TokioScheduler.every(Duration::from_millis(10), {
                    let count = Rc::clone(&count);
                    Box::new(move || count.set(count.get() + 1))
                });

                tokio::time::sleep(Duration::from_millis(5)).await;
                assert_eq!(count.get(), 0);

                tokio::time::sleep(Duration::from_millis(100)).await;
                assert_eq!(count.get(), 10);

                drop(handle);
                tokio::time::sleep(Duration::from_millis(100)).await;
                assert_eq!(count.get(), 10);
            })
            .await;
    }

    #[test]
    fn test_manual_handle_cancels() {
        let scheduler = manual::ManualScheduler::default();
        let count = Rc::new(Cell::new(0));
        let handle = scheduler.every(Duration::from_millis(10), {
            let count = Rc::clone(&count);
            Box::new(move || count.set(count.get() + 1))
        });

        scheduler.advance(3);
        assert_eq!(scheduler.active(), 1);
        drop(handle);
        scheduler.advance(3);

        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.active(), 0);
    }
}
