//! Published record of a round.

use super::round::RoundResult;
use super::{Outcome, RoundId};
use crate::crypto::{HmacKey, MoveDigest, RevealedCommitment};
use crate::games::MoveSet;
use serde::{Deserialize, Serialize};

/// Every value a resolved round makes public, in publication order.
///
/// Anyone holding a transcript can recompute the digest from `key` and
/// `opponent_move` without trusting the program that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    pub digest: MoveDigest,
    pub human_move: String,
    pub opponent_move: String,
    pub outcome: Outcome,
    pub key: HmacKey,
}

impl Transcript {
    pub fn new(moves: &MoveSet, result: &RoundResult) -> Self {
        Self {
            round_id: result.id,
            moves: moves.iter().map(|(_, name)| name.to_owned()).collect(),
            digest: result.reveal.digest,
            human_move: moves.name_at(result.human).to_owned(),
            opponent_move: result.reveal.move_name.clone(),
            outcome: result.outcome,
            key: result.reveal.key.clone(),
        }
    }

    /// Check the commitment and that the recorded outcome follows from the moves
    pub fn verify(&self) -> bool {
        if !self.digest.verify(&self.key, &self.opponent_move) {
            return false;
        }
        let Ok(moves) = MoveSet::validate(self.moves.iter().cloned()) else {
            return false;
        };
        match (
            moves.index_of(&self.human_move),
            moves.index_of(&self.opponent_move),
        ) {
            (Some(human), Some(opponent)) => moves.judge(human, opponent) == self.outcome,
            _ => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// What a forfeited round makes public.
///
/// `input` is the unmatched text the human entered, kept verbatim. There is no
/// outcome, but the key is still disclosed so the commitment can be checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forfeit {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    pub digest: MoveDigest,
    pub input: String,
    pub opponent_move: String,
    pub key: HmacKey,
}

impl Forfeit {
    pub fn new(
        round_id: RoundId,
        moves: &MoveSet,
        input: &str,
        reveal: &RevealedCommitment,
    ) -> Self {
        Self {
            round_id,
            moves: moves.iter().map(|(_, name)| name.to_owned()).collect(),
            digest: reveal.digest,
            input: input.to_owned(),
            opponent_move: reveal.move_name.clone(),
            key: reveal.key.clone(),
        }
    }

    /// Check the commitment and that the input really was not a move
    pub fn verify(&self) -> bool {
        if !self.digest.verify(&self.key, &self.opponent_move) {
            return false;
        }
        match MoveSet::validate(self.moves.iter().cloned()) {
            Ok(moves) => {
                moves.index_of(&self.opponent_move).is_some()
                    && moves.index_of(&self.input).is_none()
            }
            Err(_) => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
