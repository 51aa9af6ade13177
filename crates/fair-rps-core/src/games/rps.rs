//! Circular rock-paper-scissors judging for any odd number of moves.
//!
//! Moves sit on a circle in input order. A move loses to each of the `n / 2`
//! moves that follow it and beats each of the `n / 2` moves that precede it.
//! With `[rock, paper, scissors]` this is the classic game.

use crate::protocol::Outcome;

/// Outcome for the move at `human` against the move at `opponent`, from the
/// human's perspective, in a circle of `n` moves.
///
/// `n` must be odd and at least 3; both indices must be below `n`.
pub fn determine(n: usize, human: usize, opponent: usize) -> Outcome {
    debug_assert!(n >= 3 && n % 2 == 1, "move count must be odd and >= 3");
    debug_assert!(human < n && opponent < n, "move index out of range");

    if human == opponent {
        return Outcome::Draw;
    }

    let half = n / 2;
    let opponent_ahead = if human < opponent {
        opponent <= human + half
    } else {
        // Wrapped arc: opponent <= human + half - n, kept non-negative.
        opponent + n <= human + half
    };

    if opponent_ahead {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}
