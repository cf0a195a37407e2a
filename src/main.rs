use std::env;

use connect_four_referee::cli::{parse_args, usage};
use connect_four_referee::prelude::*;
use connect_four_referee::report;

fn main() -> anyhow::Result<()> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "connect-four-referee".to_string());

    let Some(invocation) = parse_args(args)? else {
        println!("{}", usage(&program));
        return Ok(());
    };

    let players = invocation
        .players
        .map(|player| PlayerDescriptor::from_arg(&player));
    let mut config = Configuration::from_env();
    if invocation.quiet {
        config = config.with_verbose(false);
    }

    let series = Series::new(players, invocation.games, config)?;
    let score = series.run()?;
    report::print_final(series.player_names(), score.totals, series.config().is_verbose());
    Ok(())
}
