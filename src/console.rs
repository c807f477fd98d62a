use crate::report::Report;
use crate::stopwatch::Stopwatch;
use crate::ticker::{Scheduler, TokioScheduler};
use crate::view::{Action, Observer, View};
use anyhow::anyhow;
use std::cell::Cell;
use std::io::{self, Write};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::fmt::MakeWriter;

const HELP: &str = "commands: s=start t=stop l=lap r=reset h=help q=quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "start" => Ok(Command::Act(Action::Start)),
            "t" | "stop" => Ok(Command::Act(Action::Stop)),
            "l" | "lap" => Ok(Command::Act(Action::Lap)),
            "r" | "reset" => Ok(Command::Act(Action::Reset)),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(anyhow!("Unknown command {other:?}")),
        }
    }
}

/// Draws the stopwatch as a status line that is rewritten in place.
///
/// Lap lines are printed once, above the status line. While only the time
/// moves, the status line is redrawn every tenth of a second.
pub struct Console<M> {
    writer: M,
    laps_shown: Cell<usize>,
    running: Cell<bool>,
}

impl<M> Console<M>
where
    M: for<'a> MakeWriter<'a>,
{
    pub fn new(writer: M) -> Self {
        Self {
            writer,
            laps_shown: Cell::new(0),
            running: Cell::new(false),
        }
    }

    fn draw(&self, view: &View) -> io::Result<()> {
        let shown = self.laps_shown.replace(view.laps.len());
        let was_running = self.running.replace(view.running);
        let tick = view.running && was_running && shown == view.laps.len();

        if tick && view.elapsed.centis() % 10 != 0 {
            return Ok(());
        }

        let mut out = self.writer.make_writer();

        if view.laps.len() < shown {
            writeln!(out)?;
        }

        for lap in view.laps.iter().skip(shown) {
            writeln!(out, "\r{lap:<40}")?;
        }

        let controls: Vec<&str> = view.enabled().map(|action| action.label()).collect();
        write!(out, "\r{}  [{}]   ", view.time, controls.join(" "))?;
        out.flush()
    }
}

impl<M> Observer for Console<M>
where
    M: for<'a> MakeWriter<'a>,
{
    fn render(&self, view: &View) {
        if let Err(e) = self.draw(view) {
            tracing::warn!(%e, "Failed to draw the stopwatch");
        }
    }
}

/// Runs a terminal session on stdin until `quit` or the end of input.
///
/// Everything the session draws goes to stderr, leaving stdout for the report.
pub fn run() -> anyhow::Result<Report> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    // The tick task is `!Send`, so it lives on a local set.
    let local = tokio::task::LocalSet::new();
    local.block_on(
        &runtime,
        session(TokioScheduler, BufReader::new(tokio::io::stdin()), io::stderr),
    )
}

pub async fn session<S, R, M>(scheduler: S, input: R, writer: M) -> anyhow::Result<Report>
where
    S: Scheduler,
    R: AsyncBufRead + Unpin,
    M: for<'a> MakeWriter<'a> + Clone + 'static,
{
    writeln!(writer.make_writer(), "{HELP}")?;

    let mut stopwatch = Stopwatch::new(scheduler, Console::new(writer.clone()));
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Act(action)) => {
                tracing::debug!(%action, "Applying a control");
                stopwatch.apply(action);
            }
            Ok(Command::Help) => writeln!(writer.make_writer(), "\n{HELP}")?,
            Ok(Command::Quit) => break,
            Err(e) => tracing::warn!(%e, "Ignoring input"),
        }
    }

    writeln!(writer.make_writer())?;
    Ok(stopwatch.report())
}
