//! Slayer - turn-based monster fighting in the terminal.
//!
//! This module exposes the game logic for testing and the simulator.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod console;
pub mod core;
pub mod monster;
pub mod simulator;

pub use character::{Combatant, Creature, Player};
pub use combat::{Choice, CombatEvent, Encounter, EncounterOutcome};
pub use crate::core::constants::*;
pub use crate::core::game_loop::{Game, GameSummary, PlayerController};
pub use crate::core::rng::{Dice, GameRng};
pub use monster::{Monster, MonsterKind};
