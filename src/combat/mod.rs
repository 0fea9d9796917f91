//! Turn-by-turn combat between the player and one monster.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
