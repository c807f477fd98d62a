use crate::report::Report;
use crate::stopwatch::Stopwatch;
use crate::ticker::SlintScheduler;
use crate::view::{Action, Observer, View};
use slint::{Model, ModelRc, SharedString, VecModel, Weak};
use std::cell::RefCell;
use std::rc::Rc;

slint::slint! {
import { Button, HorizontalBox, ListView, VerticalBox } from "std-widgets.slint";

export component MainWindow inherits Window {
        in property <string> time: "00:00:00";
        in property <bool> start-enabled: true;
        in property <bool> stop-enabled: false;
        in property <bool> lap-enabled: false;
        in property <bool> reset-enabled: true;
        in property <[string]> laps;

        callback start-clicked();
        callback stop-clicked();
        callback lap-clicked();
        callback reset-clicked();

        preferred-width: 420px;
        preferred-height: 520px;

        title: @tr("Lap Timer");

        VerticalBox {
            Text {
                text: @tr("Lap Timer");
                font-size: 28px;
                horizontal-alignment: center;
            }

            Text {
                text: time;
                font-size: 48px;
                horizontal-alignment: center;
            }

            HorizontalBox {
                alignment: center;

                Button {
                    text: @tr("Start");
                    enabled: start-enabled;
                    clicked => { root.start-clicked(); }
                }
                Button {
                    text: @tr("Stop");
                    enabled: stop-enabled;
                    clicked => { root.stop-clicked(); }
                }
                Button {
                    text: @tr("Lap");
                    enabled: lap-enabled;
                    clicked => { root.lap-clicked(); }
                }
                Button {
                    text: @tr("Reset");
                    enabled: reset-enabled;
                    clicked => { root.reset-clicked(); }
                }
            }

            Text {
                text: @tr("Laps:");
                font-size: 20px;
                horizontal-alignment: center;
            }

            ListView {
                for lap in laps: Text {
                    text: lap;
                    font-size: 20px;
                    horizontal-alignment: center;
                }
            }
        }
}
}

pub struct Window {
    main_window: MainWindow,
    stopwatch: Rc<RefCell<Stopwatch<SlintScheduler>>>,
}

impl Window {
    pub fn new() -> anyhow::Result<Self> {
        let main_window = MainWindow::new()?;
        let stopwatch = Rc::new(RefCell::new(Stopwatch::new(
            SlintScheduler,
            main_window.as_weak(),
        )));

        let bind = |action: Action| {
            let stopwatch = Rc::clone(&stopwatch);
            move || stopwatch.borrow_mut().apply(action)
        };
        main_window.on_start_clicked(bind(Action::Start));
        main_window.on_stop_clicked(bind(Action::Stop));
        main_window.on_lap_clicked(bind(Action::Lap));
        main_window.on_reset_clicked(bind(Action::Reset));

        Ok(Self {
            main_window,
            stopwatch,
        })
    }

    /// Shows the window until it is closed.
    pub fn run(self) -> anyhow::Result<Report> {
        self.main_window.run()?;

        let mut stopwatch = self.stopwatch.borrow_mut();
        stopwatch.stop();
        Ok(stopwatch.report())
    }
}

impl Observer for Weak<MainWindow> {
    fn render(&self, view: &View) {
        let Some(app) = self.upgrade() else {
            tracing::warn!("Dropped a redraw for a closed window");
            return;
        };

        app.set_time(SharedString::from(view.time.as_str()));
        app.set_start_enabled(view.is_enabled(Action::Start));
        app.set_stop_enabled(view.is_enabled(Action::Stop));
        app.set_lap_enabled(view.is_enabled(Action::Lap));
        app.set_reset_enabled(view.is_enabled(Action::Reset));

        if let Some(rows) = lap_rows(view, app.get_laps().row_count()) {
            app.set_laps(ModelRc::new(VecModel::from(rows)));
        }
    }
}

/// Rows for the lap list, or `None` when the `shown` rows are still current.
fn lap_rows(view: &View, shown: usize) -> Option<Vec<SharedString>> {
    // Laps only grow or clear between redraws, so a matching count means no change.
    if shown == view.laps.len() {
        return None;
    }

    Some(
        view.laps
            .iter()
            .map(|lap| SharedString::from(lap.as_str()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::laps::Laps;
    use crate::stopwatch::time::Centiseconds;

    #[test]
    fn test_lap_rows_unchanged_on_tick() {
        let mut laps = Laps::default();
        laps.record(Centiseconds::new(100));

        let view = View::new(Centiseconds::new(150), true, &laps);

        assert_eq!(lap_rows(&view, 1), None);
    }

    #[test]
    fn test_lap_rows_after_lap() {
        let mut laps = Laps::default();
        laps.record(Centiseconds::new(100));
        laps.record(Centiseconds::new(6125));

        let view = View::new(Centiseconds::new(6125), true, &laps);
        let rows = lap_rows(&view, 1).unwrap();

        assert_eq!(
            rows,
            vec![
                SharedString::from("Lap 1: 00:01:00"),
                SharedString::from("Lap 2: 01:01:25"),
            ]
        );
    }

    #[test]
    fn test_lap_rows_after_reset() {
        let view = View::new(Centiseconds::ZERO, false, &Laps::default());

        assert_eq!(lap_rows(&view, 2), Some(Vec::new()));
        assert_eq!(lap_rows(&view, 0), None);
    }
}
