//! Sealed and revealed commitments to a single move.
//!
//! A [`SealedCommitment`] holds the key privately and only hands out the
//! digest. [`SealedCommitment::reveal`] consumes it, so the key goes public
//! exactly once and a commitment cannot be reused.

use super::{HmacKey, MoveDigest};
use serde::{Deserialize, Serialize};

/// Commitment whose key is still secret
#[derive(Debug)]
pub struct SealedCommitment {
    key: HmacKey,
    move_name: String,
    digest: MoveDigest,
}

impl SealedCommitment {
    /// Commit to a move under a freshly generated key
    pub fn new(move_name: &str) -> Self {
        Self::with_key(HmacKey::generate(), move_name)
    }

    /// Commit to a move under a caller-supplied key
    pub fn with_key(key: HmacKey, move_name: &str) -> Self {
        let digest = MoveDigest::compute(&key, move_name);
        Self {
            key,
            move_name: move_name.to_owned(),
            digest,
        }
    }

    /// The digest to publish before the opponent's move is known
    pub fn digest(&self) -> &MoveDigest {
        &self.digest
    }

    /// Disclose the key and committed move
    pub fn reveal(self) -> RevealedCommitment {
        RevealedCommitment {
            key: self.key,
            move_name: self.move_name,
            digest: self.digest,
        }
    }
}

/// Commitment after the key has been disclosed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCommitment {
    pub key: HmacKey,
    #[serde(rename = "move")]
    pub move_name: String,
    pub digest: MoveDigest,
}

impl RevealedCommitment {
    /// Check that the disclosed key and move reproduce the published digest
    pub fn verify(&self) -> bool {
        self.digest.verify(&self.key, &self.move_name)
    }
}
