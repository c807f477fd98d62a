use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "LAP_TIMER_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Print the session's laps as JSON on exit.
    #[arg(short, long, env = "LAP_TIMER_JSON")]
    pub json: bool,

    /// Use the terminal even when the window is available.
    #[arg(short, long, env = "LAP_TIMER_CONSOLE")]
    pub console: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let arguments = Arguments::try_parse_from(["lap-timer"]).unwrap();

        assert_eq!(arguments.verbosity, 0);
        assert!(!arguments.json);
        assert!(!arguments.console);
    }

    #[test]
    fn test_flags() {
        let arguments = Arguments::try_parse_from(["lap-timer", "-vvv", "--json", "-c"]).unwrap();

        assert_eq!(arguments.verbosity, 3);
        assert!(arguments.json);
        assert!(arguments.console);
    }
}
