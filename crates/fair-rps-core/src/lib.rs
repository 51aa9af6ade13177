//! Fair RPS Core Library
//!
//! This crate provides the commitment scheme, the circular judging rule, and
//! round orchestration for provably fair rock-paper-scissors with any odd
//! number of moves.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{HmacKey, MoveDigest, RevealedCommitment, SealedCommitment};
pub use games::{HelpTable, MoveIndex, MoveSelector, MoveSet, MoveSetError};
pub use protocol::{
    Forfeit, Outcome, Player, PlayerInput, Round, RoundError, RoundResult, Transcript,
};
