//! Published round output.
//!
//! Order matters for checking fairness by hand: the HMAC comes before the
//! prompt, then the outcome and opponent move, and the key comes last.

use fair_rps_core::{MoveDigest, MoveSet, Outcome, RevealedCommitment, RoundResult};
use std::io::{self, Write};

pub fn publish_digest<W: Write>(out: &mut W, digest: &MoveDigest) -> io::Result<()> {
    writeln!(out, "HMAC: {}", digest)
}

pub fn publish_result<W: Write>(
    out: &mut W,
    moves: &MoveSet,
    result: &RoundResult,
) -> io::Result<()> {
    writeln!(out, "Your move: {}", moves.name_at(result.human))?;
    writeln!(out, "Computer move: {}", result.opponent_move())?;
    let verdict = match result.outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "It's a draw!",
    };
    writeln!(out, "{}", verdict)?;
    publish_key(out, &result.reveal)
}

pub fn publish_forfeit<W: Write>(
    out: &mut W,
    input: &str,
    reveal: &RevealedCommitment,
) -> io::Result<()> {
    writeln!(out, "Invalid move: {:?}. The round is forfeited.", input)?;
    writeln!(out, "Computer move: {}", reveal.move_name)?;
    publish_key(out, reveal)
}

pub fn publish_exit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting the game...")
}

fn publish_key<W: Write>(out: &mut W, reveal: &RevealedCommitment) -> io::Result<()> {
    writeln!(out, "HMAC key: {}", reveal.key)
}
