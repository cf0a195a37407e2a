//! Reference agent: plays a random column that is not full.

use std::io::{self, Read};

use anyhow::Context;
use connect_four_referee::configuration::Rules;
use connect_four_referee::protocol::decode_board;
use rand::seq::IndexedRandom;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("could not read board")?;
    let (board, side) = decode_board(&input, Rules::standard())?;

    let open = (0..board.cols())
        .filter(|&col| !board.top_is_full(col))
        .collect::<Vec<_>>();
    let col = open
        .choose(&mut rand::rng())
        .context("should find at least one non-full column")?;

    println!(
        "playing {} with {} pieces on the board",
        side.symbol(),
        board.piece_count()
    );
    println!("{}", col + 1);
    Ok(())
}
