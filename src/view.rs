use crate::stopwatch::laps::Laps;
use crate::stopwatch::time::Centiseconds;
use std::fmt::{Display, Formatter};

/// The controls a front end offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    Lap,
    Reset,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Start, Action::Stop, Action::Lap, Action::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::Stop => "Stop",
            Action::Lap => "Lap",
            Action::Reset => "Reset",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a front end draws, derived from the stopwatch state alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub elapsed: Centiseconds,
    pub time: String,
    pub running: bool,
    pub laps: Vec<String>,
}

impl View {
    pub fn new(elapsed: Centiseconds, running: bool, laps: &Laps) -> Self {
        Self {
            elapsed,
            time: elapsed.to_string(),
            running,
            laps: laps.iter().map(|lap| lap.to_string()).collect(),
        }
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Start => !self.running,
            Action::Stop | Action::Lap => self.running,
            Action::Reset => true,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_enabled(*action))
    }
}

/// Redraws a front end whenever the stopwatch changes.
pub trait Observer {
    fn render(&self, view: &View);
}

impl Observer for () {
    fn render(&self, _: &View) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_controls() {
        let view = View::new(Centiseconds::new(420), false, &Laps::default());

        assert_eq!(view.time, "00:04:20");
        assert!(view.is_enabled(Action::Start));
        assert!(!view.is_enabled(Action::Stop));
        assert!(!view.is_enabled(Action::Lap));
        assert!(view.is_enabled(Action::Reset));
    }

    #[test]
    fn test_running_controls() {
        let view = View::new(Centiseconds::new(420), true, &Laps::default());

        assert_eq!(
            view.enabled().collect::<Vec<_>>(),
            vec![Action::Stop, Action::Lap, Action::Reset]
        );
    }

    #[test]
    fn test_lap_rows() {
        let mut laps = Laps::default();
        laps.record(Centiseconds::new(100));
        laps.record(Centiseconds::new(6125));

        let view = View::new(Centiseconds::new(7000), true, &laps);

        assert_eq!(view.laps, vec!["Lap 1: 00:01:00", "Lap 2: 01:01:25"]);
    }
}
