//! Round orchestration and published records.

mod round;
mod transcript;
mod types;

pub use round::{Player, PlayerInput, Round, RoundError, RoundResult};
pub use transcript::{Forfeit, Transcript};
pub use types::{Outcome, RoundId};
