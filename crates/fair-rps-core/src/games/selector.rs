//! Random opponent move selection.

use super::traits::MoveSelector;
use super::{MoveIndex, MoveSet};
use rand::rngs::OsRng;
use rand::Rng;

fn pick_with<R: Rng + ?Sized>(rng: &mut R, moves: &MoveSet) -> MoveIndex {
    MoveIndex(rng.gen_range(0..moves.len()))
}

/// Picks with the thread-local general-purpose generator
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSelector;

impl MoveSelector for ThreadRngSelector {
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex {
        pick_with(&mut rand::thread_rng(), moves)
    }
}

/// Picks with the operating system's CSPRNG, the same source as the HMAC key
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRngSelector;

impl MoveSelector for OsRngSelector {
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex {
        pick_with(&mut OsRng, moves)
    }
}
