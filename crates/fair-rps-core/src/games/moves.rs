//! Validated, ordered move sets.

use super::rps;
use crate::protocol::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Errors from validating a move list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("expected an odd number of at least 3 moves, got {0}")]
    InvalidArity(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

/// Position of a move within its [`MoveSet`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveIndex(pub(crate) usize);

impl MoveIndex {
    /// Zero-based position
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of distinct move names with an odd count of at least three.
///
/// Order is significant: each move loses to the `n / 2` moves that follow it,
/// wrapping around the end of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate a list of move names, preserving their order
    pub fn validate<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES || names.len() % 2 == 0 {
            return Err(MoveSetError::InvalidArity(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; a validated set has at least three moves
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Width of the forward arc of moves that beat a given move
    pub fn half_length(&self) -> usize {
        self.names.len() / 2
    }

    /// Find a move by exact, case-sensitive name
    pub fn index_of(&self, name: &str) -> Option<MoveIndex> {
        self.names.iter().position(|n| n == name).map(MoveIndex)
    }

    /// Name of the move at `index`.
    ///
    /// Panics if `index` did not come from this set.
    pub fn name_at(&self, index: MoveIndex) -> &str {
        &self.names[index.0]
    }

    /// Index for a zero-based position, if in range
    pub fn index(&self, position: usize) -> Option<MoveIndex> {
        (position < self.names.len()).then_some(MoveIndex(position))
    }

    /// Iterate over `(index, name)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (MoveIndex(i), n.as_str()))
    }

    /// Outcome for `human` playing against `opponent`
    pub fn judge(&self, human: MoveIndex, opponent: MoveIndex) -> Outcome {
        rps::determine(self.len(), human.0, opponent.0)
    }
}
