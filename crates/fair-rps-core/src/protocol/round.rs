//! A single committed round against the automated opponent.
//!
//! The opponent's move is chosen and sealed in [`Round::start`]. The digest
//! is the only thing about it that can be read until the round is consumed by
//! [`Round::resolve`], which reveals the key, or [`Round::abandon`], which
//! drops it unrevealed.

use super::{Outcome, RoundId};
use crate::crypto::{MoveDigest, RevealedCommitment, SealedCommitment};
use crate::games::{HelpTable, MoveIndex, MoveSelector, MoveSet};
use std::io;
use thiserror::Error;
use tracing::{debug, trace};

/// What the human asked for at the prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    /// A move, by name
    Move(String),
    /// Show the outcome table and ask again
    Help,
    /// Leave without playing
    Exit,
}

/// Source of the human's choice
pub trait Player {
    /// Block until the human makes a choice
    fn choose(&mut self, moves: &MoveSet) -> io::Result<PlayerInput>;

    /// Present the outcome table
    fn show_help(&mut self, table: &HelpTable<'_>) -> io::Result<()>;
}

/// Errors that end a round without an outcome
#[derive(Debug, Error)]
pub enum RoundError {
    /// The input matched no move. The round is forfeited and its key is
    /// revealed so the commitment can still be checked.
    #[error("unknown move: {input}")]
    UnknownMove {
        input: String,
        reveal: Box<RevealedCommitment>,
    },

    #[error("failed to read player input: {0}")]
    Io(#[from] io::Error),
}

/// A round that has published its digest and is waiting for the human
#[derive(Debug)]
pub struct Round<'m> {
    id: RoundId,
    moves: &'m MoveSet,
    opponent: MoveIndex,
    commitment: SealedCommitment,
}

/// Everything a resolved round publishes
#[derive(Clone, Debug)]
pub struct RoundResult {
    pub id: RoundId,
    pub human: MoveIndex,
    pub opponent: MoveIndex,
    pub outcome: Outcome,
    pub reveal: RevealedCommitment,
}

impl RoundResult {
    /// The opponent's committed move name
    pub fn opponent_move(&self) -> &str {
        &self.reveal.move_name
    }
}

impl<'m> Round<'m> {
    /// Pick the opponent's move and seal it under a fresh key
    pub fn start<S: MoveSelector + ?Sized>(moves: &'m MoveSet, selector: &mut S) -> Self {
        let id = RoundId::new();
        let opponent = selector.pick(moves);
        trace!(round = %id, opponent = %opponent, "opponent move selected");

        let commitment = SealedCommitment::new(moves.name_at(opponent));
        debug!(round = %id, digest = %commitment.digest(), moves = moves.len(), "round committed");

        Self {
            id,
            moves,
            opponent,
            commitment,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Digest of the opponent's move, safe to publish
    pub fn digest(&self) -> &MoveDigest {
        self.commitment.digest()
    }

    pub fn moves(&self) -> &'m MoveSet {
        self.moves
    }

    /// Lock in the human's move and reveal the opponent's
    pub fn resolve(self, human_move: &str) -> Result<RoundResult, RoundError> {
        let Some(human) = self.moves.index_of(human_move) else {
            debug!(round = %self.id, input = human_move, "unknown move, revealing key");
            return Err(RoundError::UnknownMove {
                input: human_move.to_owned(),
                reveal: Box::new(self.commitment.reveal()),
            });
        };

        let outcome = self.moves.judge(human, self.opponent);
        debug!(round = %self.id, human = %human, outcome = %outcome, "round resolved");

        Ok(RoundResult {
            id: self.id,
            human,
            opponent: self.opponent,
            outcome,
            reveal: self.commitment.reveal(),
        })
    }

    /// End the round without a choice; the key is never revealed
    pub fn abandon(self) {
        debug!(round = %self.id, "round abandoned");
    }

    /// Prompt until the human picks a move or exits.
    ///
    /// Returns `Ok(None)` on exit.
    pub fn play<P: Player + ?Sized>(self, player: &mut P) -> Result<Option<RoundResult>, RoundError> {
        loop {
            match player.choose(self.moves)? {
                PlayerInput::Help => player.show_help(&HelpTable::new(self.moves))?,
                PlayerInput::Exit => {
                    self.abandon();
                    return Ok(None);
                }
                PlayerInput::Move(name) => return self.resolve(&name).map(Some),
            }
        }
    }
}
