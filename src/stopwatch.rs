use crate::report::Report;
use crate::stopwatch::laps::{Lap, Laps};
use crate::stopwatch::time::{Centiseconds, TICK};
use crate::ticker::Scheduler;
use crate::view::{Action, Observer, View};
use std::cell::RefCell;
use std::rc::Rc;

pub mod laps;
pub mod time;

#[derive(Debug, Default)]
struct State {
    elapsed: Centiseconds,
    laps: Laps,
}

/// Counts centiseconds while running and records laps.
///
/// The stopwatch is running exactly while it holds a tick handle from its scheduler.
/// Every change is pushed to the observer as a fresh [`View`].
pub struct Stopwatch<S: Scheduler> {
    state: Rc<RefCell<State>>,
    observer: Rc<dyn Observer>,
    scheduler: S,
    ticker: Option<S::Handle>,
}

impl<S: Scheduler> Stopwatch<S> {
    pub fn new(scheduler: S, observer: impl Observer + 'static) -> Self {
        let stopwatch = Self {
            state: Rc::new(RefCell::new(State::default())),
            observer: Rc::new(observer),
            scheduler,
            ticker: None,
        };

        stopwatch.render();
        stopwatch
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn elapsed(&self) -> Centiseconds {
        self.state.borrow().elapsed
    }

    pub fn laps(&self) -> Vec<Lap> {
        self.state.borrow().laps.iter().collect()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let state = Rc::clone(&self.state);
        let observer = Rc::clone(&self.observer);
        let ticker = self.scheduler.every(
            TICK,
            Box::new(move || {
                let view = {
                    let mut state = state.borrow_mut();
                    state.elapsed.tick();
                    View::new(state.elapsed, true, &state.laps)
                };
                observer.render(&view);
            }),
        );
        self.ticker = Some(ticker);

        tracing::debug!(elapsed = %self.elapsed(), "Started the stopwatch");
        self.render();
    }

    pub fn stop(&mut self) {
        if self.ticker.take().is_none() {
            return;
        }

        tracing::debug!(elapsed = %self.elapsed(), "Stopped the stopwatch");
        self.render();
    }

    pub fn record_lap(&mut self) {
        if !self.is_running() {
            return;
        }

        let lap = {
            let mut state = self.state.borrow_mut();
            let elapsed = state.elapsed;
            state.laps.record(elapsed)
        };

        tracing::info!(%lap, "Recorded a lap");
        self.render();
    }

    pub fn reset(&mut self) {
        self.ticker = None;
        *self.state.borrow_mut() = State::default();

        tracing::debug!("Reset the stopwatch");
        self.render();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Start => self.start(),
            Action::Stop => self.stop(),
            Action::Lap => self.record_lap(),
            Action::Reset => self.reset(),
        }
    }

    pub fn view(&self) -> View {
        let state = self.state.borrow();
        View::new(state.elapsed, self.is_running(), &state.laps)
    }

    pub fn report(&self) -> Report {
        let state = self.state.borrow();
        Report::new(state.elapsed, &state.laps)
    }

    fn render(&self) {
        self.observer.render(&self.view());
    }
}

impl<S: Scheduler> Drop for Stopwatch<S> {
    fn drop(&mut self) {
        if self.ticker.take().is_some() {
            tracing::debug!(elapsed = %self.elapsed(), "Cancelled the tick on teardown");
        }
    }
}
