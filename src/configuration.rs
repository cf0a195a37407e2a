//! Config for the referee behaviors
//!
//! This module provides the board geometry ([`Rules`]) and the options controlling how matches
//! are refereed ([`Configuration`]).
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration values. All
//! values are optional. Flags are case-insensitive, set the value to `"true"` to enable one.
//!
//! - `REFEREE_VERBOSE`: Print boards, moves and results (default: `true`)
//! - `REFEREE_LOG`: Enable logging to a file (default: `false`)
//! - `REFEREE_DEBUG_AGENT_OUTPUT`: Echo agent diagnostic lines in verbose mode (default: `true`)
//! - `REFEREE_ACTION_TIMEOUT_MS`: Time limit for a single agent move, in milliseconds (default: `1000`)

use std::time::Duration;

use anyhow::ensure;

/// Time an agent process gets to answer, from launch to end of output.
pub const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_secs(1);

/// Board geometry: number of rows, columns, and how many aligned pieces win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) win_length: usize,
}

impl Rules {
    /// The classic 6x7 board with four in a row.
    pub const fn standard() -> Self {
        Rules {
            rows: 6,
            cols: 7,
            win_length: 4,
        }
    }

    /// Custom geometry.
    ///
    /// # Errors
    /// Returned when a dimension is zero or when no line of `win_length` cells fits on the board.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> anyhow::Result<Self> {
        ensure!(rows > 0 && cols > 0, "board must have at least one row and one column");
        ensure!(win_length > 0, "win length must be positive");
        ensure!(
            win_length <= rows.max(cols),
            "win length {win_length} does not fit on a {rows}x{cols} board"
        );
        Ok(Rules {
            rows,
            cols,
            win_length,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of aligned pieces needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Maximum number of moves a match can last.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration for referee behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) rules: Rules,
    pub(crate) action_timeout: Duration,
    pub(crate) verbose: bool,
    pub(crate) log: bool,
    pub(crate) debug_agent_output: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Matches are played on the standard 6x7 board.
    /// - Agents get one second per move.
    /// - Boards, moves and results are printed to stdout.
    /// - Logging to file is disabled.
    /// - Agent diagnostic output is echoed.
    pub fn new() -> Self {
        Self {
            rules: Rules::standard(),
            action_timeout: DEFAULT_ACTION_TIMEOUT,
            verbose: true,
            log: false,
            debug_agent_output: true,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Any unset or unparsable variable keeps its default value.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_millis(var: &str) -> Option<Duration> {
            std::env::var(var)
                .ok()?
                .parse::<u64>()
                .ok()
                .map(Duration::from_millis)
        }

        Self {
            rules: Rules::standard(),
            action_timeout: get_env_millis("REFEREE_ACTION_TIMEOUT_MS")
                .unwrap_or(DEFAULT_ACTION_TIMEOUT),
            verbose: get_env_flag("REFEREE_VERBOSE", true),
            log: get_env_flag("REFEREE_LOG", false),
            debug_agent_output: get_env_flag("REFEREE_DEBUG_AGENT_OUTPUT", true),
        }
    }

    /// Use another board geometry.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the time limit of a single agent move.
    pub fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout;
        self
    }

    /// Enable or disable printing of boards, moves and results.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Enable or disable echoing of agent diagnostic lines (verbose mode only).
    pub fn with_debug_agent_output(mut self, value: bool) -> Self {
        self.debug_agent_output = value;
        self
    }

    /// Board geometry used for every match.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Time limit of a single agent move.
    pub fn action_timeout(&self) -> Duration {
        self.action_timeout
    }

    /// True if boards, moves and results are printed.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
