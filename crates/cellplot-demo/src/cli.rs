#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean.
//! Supports environment variable overrides via the `CELLPLOT_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
cellplot demo: a live sliding-window scatter plot

USAGE:
    cellplot-demo [OPTIONS]

OPTIONS:
    --data=PATH          Read y values from PATH, one number per line
                         (default: synthetic load wave)
    --window=N           Samples kept in the sliding window (default: 190)
    --interval-ms=N      Milliseconds between samples (default: 500)
    --marker=KIND        'glyph', 'braille' or 'both' (default: both)
    --log-file=PATH      Log destination (default: cellplot-demo.log)
    --no-mouse           Disable mouse event capture
    --exit-after-ms=N    Quit after N milliseconds (0 = never)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Tab             Move focus to the next plot
    Click title     Focus that plot
    q / Esc         Quit
    Ctrl+C          Quit

ENVIRONMENT VARIABLES:
    CELLPLOT_DEMO_DATA           Override --data
    CELLPLOT_DEMO_WINDOW         Override --window
    CELLPLOT_DEMO_INTERVAL_MS    Override --interval-ms
    CELLPLOT_DEMO_MARKER         Override --marker
    CELLPLOT_DEMO_LOG_FILE       Override --log-file
    CELLPLOT_DEMO_EXIT_AFTER_MS  Override --exit-after-ms

Log verbosity follows RUST_LOG (default: info).";

/// Which plots the demo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerMode {
    Glyph,
    Braille,
    #[default]
    Both,
}

impl FromStr for MarkerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glyph" => Ok(Self::Glyph),
            "braille" => Ok(Self::Braille),
            "both" => Ok(Self::Both),
            other => Err(format!("Invalid --marker value: {other}")),
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// File of y values; `None` runs the synthetic wave.
    pub data: Option<PathBuf>,
    /// Sliding window length in samples.
    pub window: usize,
    /// Sample interval in milliseconds.
    pub interval_ms: u64,
    /// Which plots to show.
    pub marker: MarkerMode,
    /// Where tracing output goes.
    pub log_file: PathBuf,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            data: None,
            window: 190,
            interval_ms: 500,
            marker: MarkerMode::Both,
            log_file: PathBuf::from("cellplot-demo.log"),
            mouse: true,
            exit_after_ms: 0,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Prints help/version or a usage error and exits the process when the
    /// command line asks for it.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("cellplot-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `env` as the variable lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Malformed environment values are
    /// ignored; malformed flags are errors.
    pub fn parse_from<I, F>(args: I, env: F) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("CELLPLOT_DEMO_DATA") {
            opts.data = Some(PathBuf::from(val));
        }
        if let Some(val) = env("CELLPLOT_DEMO_WINDOW")
            && let Ok(n) = val.parse()
        {
            opts.window = n;
        }
        if let Some(val) = env("CELLPLOT_DEMO_INTERVAL_MS")
            && let Ok(n) = val.parse()
        {
            opts.interval_ms = n;
        }
        if let Some(val) = env("CELLPLOT_DEMO_MARKER")
            && let Ok(mode) = val.parse()
        {
            opts.marker = mode;
        }
        if let Some(val) = env("CELLPLOT_DEMO_LOG_FILE") {
            opts.log_file = PathBuf::from(val);
        }
        if let Some(val) = env("CELLPLOT_DEMO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        // Command-line args override env vars
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--data=") {
                        opts.data = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--window=") {
                        opts.window = parse_number("--window", val)?;
                    } else if let Some(val) = other.strip_prefix("--interval-ms=") {
                        opts.interval_ms = parse_number("--interval-ms", val)?;
                    } else if let Some(val) = other.strip_prefix("--marker=") {
                        opts.marker = val.parse()?;
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = PathBuf::from(val);
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = parse_number("--exit-after-ms", val)?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        if opts.window < 2 {
            return Err(format!("--window must be at least 2, got {}", opts.window));
        }
        if opts.interval_ms == 0 {
            return Err("--interval-ms must be greater than 0".to_string());
        }

        Ok(Command::Run(opts))
    }
}

fn parse_number<T: FromStr>(flag: &str, val: &str) -> Result<T, String> {
    val.parse()
        .map_err(|_| format!("Invalid {flag} value: {val}"))
}
