mod cli;

use crate::cli::Arguments;
use clap::Parser;
use lap_timer::Report;
use std::io;
use std::process::ExitCode;
use tracing_log::LogTracer;

fn main() -> ExitCode {
    let arguments = cli::Arguments::parse();
    set_log_level(&arguments).expect("Failed to configure logging");

    tracing::debug!(?arguments, "starting lap timer");

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "Unable to run the lap timer");
            ExitCode::FAILURE
        }
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    LogTracer::init()?;

    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run(arguments: &Arguments) -> anyhow::Result<()> {
    let report = session(arguments)?;

    tracing::info!(elapsed = %report.display, laps = report.laps.len(), "Session ended");

    if arguments.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

#[cfg(feature = "ui")]
fn session(arguments: &Arguments) -> anyhow::Result<Report> {
    if arguments.console {
        lap_timer::console::run()
    } else {
        lap_timer::window::Window::new()?.run()
    }
}

#[cfg(not(feature = "ui"))]
fn session(arguments: &Arguments) -> anyhow::Result<Report> {
    if !arguments.console {
        tracing::debug!("Built without a window, using the terminal");
    }

    lap_timer::console::run()
}
