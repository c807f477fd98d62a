pub mod console;
pub mod report;
pub mod stopwatch;
pub mod ticker;
pub mod view;
#[cfg(feature = "ui")]
pub mod window;

pub use report::Report;
pub use stopwatch::time::{format, Centiseconds};
pub use stopwatch::Stopwatch;
