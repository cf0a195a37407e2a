//! Multi-match loop of the referee.
//!
//! A [`Series`] plays a fixed number of matches between the same two players, strictly one after
//! the other. The starting side alternates: game `i` (0-indexed) is opened by slot `i mod 2`.
//! Points of each match are summed per player slot.
//!
//! # Example
//!
//! ```no_run
//! use connect_four_referee::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let players = [
//!         PlayerDescriptor::agent("./random-agent"),
//!         PlayerDescriptor::human("Alice"),
//!     ];
//!     let series = Series::new(players, 2, Configuration::new())?;
//!     let score = series.run()?;
//!     println!("{} {}", score.totals[0], score.totals[1]);
//!     Ok(())
//! }
//! ```

use anyhow::Context;
use tracing::{info, instrument, trace};

use crate::configuration::Configuration;
use crate::logger::init_logger;
use crate::match_runner::{run_match, MatchResult};
use crate::move_source::{from_player, MoveSource};
use crate::player::{PlayerDescriptor, Side};
use crate::report;

/// Aggregated outcome of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesScore {
    /// Points of each player slot over all games.
    pub totals: [u32; 2],
    /// Every match, in playing order.
    pub results: Vec<MatchResult>,
}

impl SeriesScore {
    fn record(&mut self, result: MatchResult) {
        for (total, points) in self.totals.iter_mut().zip(result.points) {
            *total += points;
        }
        self.results.push(result);
    }
}

/// Two players and the number of games they play.
#[derive(Debug)]
pub struct Series {
    players: [PlayerDescriptor; 2],
    games: usize,
    config: Configuration,
}

impl Series {
    /// Check the players and prepare a series of `games` matches.
    ///
    /// Verbose output is forced on when a human plays: there is no point hiding what a human
    /// must read.
    ///
    /// # Errors
    /// Returned when an agent is not executable or when the log file cannot be created.
    #[instrument(skip(config))]
    pub fn new(
        players: [PlayerDescriptor; 2],
        games: usize,
        config: Configuration,
    ) -> anyhow::Result<Series> {
        // fail before the first match rather than in the middle of the series
        for player in &players {
            from_player(player, &config)?;
        }

        let mut config = config;
        if !players.iter().all(PlayerDescriptor::is_agent) {
            config.verbose = true;
        }
        if config.log {
            init_logger().context("could not start logging")?;
        }
        trace!(?config);

        Ok(Series {
            players,
            games,
            config,
        })
    }

    /// Side opening game `game` (0-indexed).
    pub fn starting_side(game: usize) -> Side {
        Side::from_index(game)
    }

    /// Configuration used for every match.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Names of both players, in slot order.
    pub fn player_names(&self) -> [&str; 2] {
        [&self.players[0].name, &self.players[1].name]
    }

    /// Play every game with the move sources of the players.
    pub fn run(&self) -> anyhow::Result<SeriesScore> {
        let mut sources = [
            from_player(&self.players[0], &self.config)?,
            from_player(&self.players[1], &self.config)?,
        ];
        self.run_with(&mut sources)
    }

    /// Play every game with the given move sources, indexed by player slot.
    pub fn run_with(&self, sources: &mut [Box<dyn MoveSource>; 2]) -> anyhow::Result<SeriesScore> {
        let mut score = SeriesScore::default();
        for game in 0..self.games {
            let starting = Self::starting_side(game);
            info!(game, ?starting, "starting match");
            let result = run_match(self.config.rules, sources, starting, self.config.verbose)
                .with_context(|| format!("match {} could not be played", game + 1))?;
            if self.config.verbose {
                report::print_match_result(self.player_names(), &result);
            }
            score.record(result);
        }
        info!(totals = ?score.totals, "series over");
        Ok(score)
    }
}
