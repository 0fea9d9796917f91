//! The player character.

use super::creature::{Combatant, Creature};
use crate::core::constants::*;

/// A creature with a level. Every kill is worth exactly one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    creature: Creature,
    level: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            creature: Creature::new(
                name,
                PLAYER_SYMBOL,
                PLAYER_START_HEALTH,
                PLAYER_START_DAMAGE,
                PLAYER_START_GOLD,
            ),
            level: PLAYER_START_LEVEL,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Raises level and damage by one each.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.creature.raise_damage(LEVEL_UP_DAMAGE_BONUS);
    }

    pub fn has_won(&self) -> bool {
        self.level >= WINNING_LEVEL
    }
}

impl Combatant for Player {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}
