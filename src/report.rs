use crate::stopwatch::laps::Laps;
use crate::stopwatch::time::Centiseconds;
use serde::Serialize;

/// Summary of a timing session, printed when a front end exits.
#[derive(Debug, Serialize)]
pub struct Report {
    pub elapsed: Centiseconds,
    pub display: String,
    pub laps: Vec<LapRecord>,
}

#[derive(Debug, Serialize)]
pub struct LapRecord {
    pub number: usize,
    pub centiseconds: Centiseconds,
    pub display: String,
}

impl Report {
    pub fn new(elapsed: Centiseconds, laps: &Laps) -> Self {
        Self {
            elapsed,
            display: elapsed.to_string(),
            laps: laps
                .iter()
                .map(|lap| LapRecord {
                    number: lap.number,
                    centiseconds: lap.time,
                    display: lap.time.to_string(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
