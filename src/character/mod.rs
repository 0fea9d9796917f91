//! Player and the stat block it shares with monsters.

pub mod creature;
pub mod player;

pub use creature::{Combatant, Creature};
pub use player::Player;
