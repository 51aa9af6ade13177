//! Cryptographic primitives for the fair RPS protocol.
//!
//! This module provides:
//! - HmacKey and MoveDigest for the keyed commit-reveal scheme
//! - SealedCommitment and RevealedCommitment for the key's secret-to-public lifecycle

mod commitment;
mod seal;

pub use commitment::{verify, HmacKey, MoveDigest, ParseHexError, KEY_LEN};
pub use seal::{RevealedCommitment, SealedCommitment};
