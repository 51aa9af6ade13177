//! Command-line arguments.

use clap::{Parser, Subcommand};
use fair_rps_core::{HmacKey, MoveDigest};

/// Provably fair rock-paper-scissors with any odd number of moves.
///
/// The opponent commits to its move by publishing an HMAC before you choose,
/// and reveals the key afterwards so you can check it did not cheat.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    after_long_help = "Put -- before the move list when a move starts with '-' or is named \
                       'verify':\n  fair-rps -- verify -x y"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub play: PlayArgs,

    /// Tracing filter directive for stderr logs (e.g. "debug", "fair_rps_core=trace").
    #[arg(long, env = "FAIR_RPS_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Move names in circular order; each one loses to the next n/2 moves.
    #[arg(value_name = "MOVES")]
    pub moves: Vec<String>,

    /// Select the opponent's move with the OS CSPRNG instead of the thread RNG.
    #[arg(long, env = "FAIR_RPS_SECURE_OPPONENT")]
    pub secure_opponent: bool,

    /// Print a JSON record after the key is revealed: the transcript of a
    /// resolved round, or the forfeit record when the input was not a move.
    #[arg(long, env = "FAIR_RPS_JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a revealed key and move against a published HMAC.
    Verify(VerifyArgs),
}

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Revealed HMAC key, hex.
    #[arg(long)]
    pub key: HmacKey,

    /// Opponent move name as revealed.
    #[arg(long = "move", value_name = "NAME")]
    pub move_name: String,

    /// HMAC published before the move was chosen, hex.
    #[arg(long)]
    pub digest: MoveDigest,
}
