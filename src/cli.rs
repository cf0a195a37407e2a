//! Command line of the referee: `[-quiet] <player1> <player2> [<ngames>=1]`.

use crate::error::SetupError;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Print only the final scores (ignored when a human plays).
    pub quiet: bool,
    /// Agent paths or human names, in slot order.
    pub players: [String; 2],
    /// Number of games of the series.
    pub games: usize,
}

/// Parse the arguments following the program name.
///
/// Returns `Ok(None)` when fewer than two players are given: the caller should print
/// [`usage`]. Any first argument starting with `-q` enables quiet mode.
pub fn parse_args<I>(args: I) -> Result<Option<Invocation>, SetupError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let quiet = args.next_if(|arg| arg.starts_with("-q")).is_some();

    let (Some(first), Some(second)) = (args.next(), args.next()) else {
        return Ok(None);
    };
    let games = match args.next() {
        None => 1,
        Some(arg) => arg
            .trim()
            .parse()
            .map_err(|_| SetupError::InvalidGameCount(arg.clone()))?,
    };

    Ok(Some(Invocation {
        quiet,
        players: [first, second],
        games,
    }))
}

/// Help text printed when players are missing.
pub fn usage(program: &str) -> String {
    format!(
        "\n  usage: {program} [-quiet] <player1> <player2> [<ngames>=1]\n\n  each player can be a program or a name of a human\n"
    )
}
