use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Nominal period of the tick that advances a running stopwatch.
pub const TICK: Duration = Duration::from_millis(10);

const PER_SECOND: u64 = 100;
const PER_MINUTE: u64 = 60 * PER_SECOND;

/// Elapsed time counted in hundredths of a second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Centiseconds(u64);

impl Centiseconds {
    pub const ZERO: Self = Self(0);

    pub fn new(count: u64) -> Self {
        Self(count)
    }

    pub fn count(self) -> u64 {
        self.0
    }

    pub fn minutes(self) -> u64 {
        self.0 / PER_MINUTE
    }

    pub fn seconds(self) -> u64 {
        (self.0 % PER_MINUTE) / PER_SECOND
    }

    pub fn centis(self) -> u64 {
        self.0 % PER_SECOND
    }

    pub fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Display for Centiseconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Minutes widen past two digits instead of wrapping.
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes(),
            self.seconds(),
            self.centis()
        )
    }
}

/// Format a centisecond count as `MM:SS:CC`.
pub fn format(centiseconds: u64) -> String {
    Centiseconds::new(centiseconds).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format(0), "00:00:00");
        assert_eq!(format(61), "00:00:61");
        assert_eq!(format(100), "00:01:00");
        assert_eq!(format(6000), "01:00:00");
        assert_eq!(format(6125), "01:01:25");
        assert_eq!(format(359_999), "59:59:99");
    }

    #[test]
    fn test_format_widens_minutes() {
        assert_eq!(format(600_000), "100:00:00");
        assert_eq!(format(6_000_042), "1000:00:42");
    }

    #[test]
    fn test_format_shape() {
        for count in (0..20_000).chain([u64::MAX / 2, u64::MAX]) {
            let text = format(count);
            let parts: Vec<&str> = text.split(':').collect();
            assert_eq!(parts.len(), 3, "{text}");
            assert!(parts[0].len() >= 2, "{text}");
            assert!(parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())), "{text}");

            let seconds: u64 = parts[1].parse().unwrap();
            let centis: u64 = parts[2].parse().unwrap();
            assert_eq!(parts[1].len(), 2);
            assert_eq!(parts[2].len(), 2);
            assert!(seconds < 60);
            assert!(centis < 100);
        }
    }

    #[test]
    fn test_tick_saturates() {
        let mut time = Centiseconds::new(u64::MAX - 1);
        time.tick();
        time.tick();
        assert_eq!(time.count(), u64::MAX);
    }
}
