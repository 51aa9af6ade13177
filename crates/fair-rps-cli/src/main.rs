//! Fair RPS command-line game
//!
//! Plays one round against a committed computer opponent and reveals the
//! HMAC key afterwards for verification.

mod cli;
mod output;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command, PlayArgs, VerifyArgs};
use fair_rps_core::{
    crypto,
    games::{OsRngSelector, ThreadRngSelector},
    Forfeit, MoveSelector, MoveSet, Round, RoundError, Transcript,
};
use prompt::TerminalPlayer;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "fair-rps rock paper scissors";
const USAGE_ESCAPED: &str = "fair-rps -- verify -x y";

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level {:?}", directive))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn verify(args: &VerifyArgs) -> Result<ExitCode> {
    let valid = crypto::verify(&args.key, &args.move_name, &args.digest);
    info!(digest = %args.digest, valid, "verified commitment");

    let mut stdout = io::stdout().lock();
    if valid {
        writeln!(stdout, "valid")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(stdout, "INVALID")?;
        Ok(ExitCode::FAILURE)
    }
}

fn play(args: PlayArgs) -> Result<ExitCode> {
    let moves = match MoveSet::validate(args.moves) {
        Ok(moves) => moves,
        Err(e) => {
            warn!(error = %e, "rejected move list");
            eprintln!("Invalid arguments: {e}.");
            eprintln!("Provide an odd number (at least 3) of distinct moves.");
            eprintln!("Example: {USAGE_EXAMPLE}");
            eprintln!(
                "Put -- before the moves if one starts with '-' or is named 'verify': \
                 {USAGE_ESCAPED}"
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut selector: Box<dyn MoveSelector> = if args.secure_opponent {
        Box::new(OsRngSelector)
    } else {
        Box::new(ThreadRngSelector)
    };

    let round = Round::start(&moves, &mut selector);
    info!(round = %round.id(), moves = moves.len(), "round started");
    let round_id = round.id();

    output::publish_digest(&mut io::stdout().lock(), round.digest())?;

    let mut player = TerminalPlayer::new(io::stdin().lock(), io::stdout());
    let outcome = round.play(&mut player);

    let mut stdout = io::stdout().lock();
    match outcome {
        Ok(Some(result)) => {
            output::publish_result(&mut stdout, &moves, &result)?;
            if args.json {
                let transcript = Transcript::new(&moves, &result);
                writeln!(stdout, "{}", transcript.to_json()?)?;
            }
            info!(round = %round_id, outcome = %result.outcome, "round finished");
        }
        Ok(None) => {
            output::publish_exit(&mut stdout)?;
            info!(round = %round_id, "player exited");
        }
        Err(RoundError::UnknownMove { input, reveal }) => {
            output::publish_forfeit(&mut stdout, &input, &reveal)?;
            if args.json {
                let record = Forfeit::new(round_id, &moves, &input, &reveal);
                writeln!(stdout, "{}", record.to_json()?)?;
            }
            info!(round = %round_id, "round forfeited on unknown move");
        }
        Err(e @ RoundError::Io(_)) => return Err(e).context("reading your move"),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Some(Command::Verify(verify_args)) => verify(&verify_args),
        None => play(args.play),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
