//! Game traits.

use super::{MoveIndex, MoveSet};

/// Chooses the opponent's move for a round.
///
/// The pick happens before the commitment is published, so implementations
/// only affect how predictable the opponent is, not whether it can cheat.
pub trait MoveSelector {
    /// Pick an index from `moves`, uniformly over `[0, moves.len())`
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex;
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex {
        (**self).pick(moves)
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn pick(&mut self, moves: &MoveSet) -> MoveIndex {
        (**self).pick(moves)
    }
}
