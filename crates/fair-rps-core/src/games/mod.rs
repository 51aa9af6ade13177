//! Game definitions and logic.

mod help_table;
mod moves;
mod rps;
mod selector;
mod traits;

pub use help_table::HelpTable;
pub use moves::{MoveIndex, MoveSet, MoveSetError, MIN_MOVES};
pub use rps::determine;
pub use selector::{OsRngSelector, ThreadRngSelector};
pub use traits::MoveSelector;
