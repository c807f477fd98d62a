use crate::stopwatch::time::Centiseconds;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lap {
    pub number: usize,
    pub time: Centiseconds,
}

impl Display for Lap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lap {}: {}", self.number, self.time)
    }
}

/// Lap snapshots, oldest first.
#[derive(Debug, Default)]
pub struct Laps {
    laps: Vec<Centiseconds>,
}

impl Laps {
    pub fn record(&mut self, time: Centiseconds) -> Lap {
        self.laps.push(time);

        Lap {
            number: self.laps.len(),
            time,
        }
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Lap> + '_ {
        self.laps.iter().enumerate().map(|(index, time)| Lap {
            number: index + 1,
            time: *time,
        })
    }
}
