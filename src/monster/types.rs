use crate::character::{Combatant, Creature};
use crate::core::constants::MONSTER_STATS;
use crate::core::rng::Dice;
use serde::Serialize;
use std::fmt;

/// The fixed monster archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterKind {
    Dragon,
    Orc,
    Slime,
}

/// Starting stats for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterData {
    pub name: &'static str,
    pub symbol: char,
    pub health: i32,
    pub damage: u32,
    pub gold: u32,
}

impl MonsterKind {
    /// Catalog order. Random selection indexes into this.
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Dragon, MonsterKind::Orc, MonsterKind::Slime];

    pub fn index(self) -> usize {
        match self {
            MonsterKind::Dragon => 0,
            MonsterKind::Orc => 1,
            MonsterKind::Slime => 2,
        }
    }

    pub fn data(self) -> MonsterData {
        let (name, symbol, health, damage, gold) = MONSTER_STATS[self.index()];
        MonsterData {
            name,
            symbol,
            health,
            damage,
            gold,
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// Picks an archetype with equal odds.
    pub fn random(dice: &mut impl Dice) -> Self {
        let count = Self::ALL.len() as i32;
        let roll = dice.roll(0, count - 1);
        Self::ALL[roll.rem_euclid(count) as usize]
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live monster. Lives for a single encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    creature: Creature,
    kind: MonsterKind,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        let data = kind.data();
        Self {
            creature: Creature::new(data.name, data.symbol, data.health, data.damage, data.gold),
            kind,
        }
    }

    pub fn random(dice: &mut impl Dice) -> Self {
        Self::new(MonsterKind::random(dice))
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }
}

impl Combatant for Monster {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}
