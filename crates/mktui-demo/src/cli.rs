#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo binary.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Defaults are overridden by `MKTUI_DEMO_*` environment
//! variables, which in turn lose to explicit flags.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
marketui demo — product catalog and cart in a tabbed terminal UI

USAGE:
    mktui-demo [OPTIONS]

OPTIONS:
    --tab=N              Start on tab N, 1-indexed (default: 1)
    --tick-ms=N          Event poll / tick interval in ms (default: 250)
    --exit-after-ms=N    Auto-quit after N milliseconds, for automation
                         (default: 0 = disabled)
    --log-file=PATH      Append tracing output to PATH
    --help, -h           Show this help message
    --version, -V        Show version

TABS:
    1  Inventory   Catalog list; Enter opens an item, Enter again adds it
    2  Cart        Contents in add order with the running total

KEYBINDINGS:
    1-2             Switch tabs by number
    Left / Right    Switch tabs
    Tab / Shift-Tab Cycle tabs
    Up / Down       Move selection / scroll
    Enter           Open item / add to cart
    Esc             Back from the item view
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    MKTUI_DEMO_TAB             Override --tab
    MKTUI_DEMO_TICK_MS         Override --tick-ms
    MKTUI_DEMO_EXIT_AFTER_MS   Override --exit-after-ms
    MKTUI_DEMO_LOG_FILE        Override --log-file
    MKTUI_LOG                  Tracing filter for --log-file (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Starting tab (1-indexed).
    pub start_tab: usize,
    /// Poll/tick interval in milliseconds.
    pub tick_ms: u64,
    /// Auto-quit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Tracing output target, if any.
    pub log_file: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_tab: 1,
            tick_ms: 250,
            exit_after_ms: 0,
            log_file: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables. Prints
    /// help/version and exits for `--help`/`--version`; exits with
    /// status 2 on a malformed flag.
    #[must_use]
    pub fn parse() -> Self {
        let mut opts = Self::default();
        opts.apply_env();
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("mktui-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Err(message) = opts.apply_arg(other) {
                        eprintln!("{message}");
                        eprintln!("run with --help for usage");
                        process::exit(2);
                    }
                }
            }
        }
        opts
    }

    fn apply_env(&mut self) {
        if let Ok(val) = env::var("MKTUI_DEMO_TAB")
            && let Ok(n) = val.parse()
        {
            self.start_tab = n;
        }
        if let Ok(val) = env::var("MKTUI_DEMO_TICK_MS")
            && let Ok(n) = val.parse()
        {
            self.tick_ms = n;
        }
        if let Ok(val) = env::var("MKTUI_DEMO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            self.exit_after_ms = n;
        }
        if let Ok(val) = env::var("MKTUI_DEMO_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }
    }

    fn apply_arg(&mut self, arg: &str) -> Result<(), String> {
        if let Some(value) = arg.strip_prefix("--tab=") {
            self.start_tab = parse_number(arg, value)?;
            if self.start_tab == 0 {
                return Err(format!("invalid flag value: {arg} (tabs are 1-indexed)"));
            }
        } else if let Some(value) = arg.strip_prefix("--tick-ms=") {
            self.tick_ms = parse_number(arg, value)?;
            if self.tick_ms == 0 {
                return Err(format!("invalid flag value: {arg} (must be positive)"));
            }
        } else if let Some(value) = arg.strip_prefix("--exit-after-ms=") {
            self.exit_after_ms = parse_number(arg, value)?;
        } else if let Some(value) = arg.strip_prefix("--log-file=") {
            self.log_file = Some(PathBuf::from(value));
        } else {
            return Err(format!("unknown flag: {arg}"));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(arg: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid flag value: {arg}"))
}
