use crate::monster::MonsterKind;
use std::fmt;

/// What the player wants to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run,
    Fight,
}

impl Choice {
    /// Parses a single key, case-insensitive. Anything but r/f is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Choice::Run),
            'f' => Some(Choice::Fight),
            _ => None,
        }
    }
}

/// Everything that can happen during an encounter, in narration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Encountered { monster: String, symbol: char },
    PlayerHit { monster: String, damage: u32 },
    MonsterHit { monster: String, damage: u32 },
    Fled,
    MonsterKilled { monster: String },
    LevelUp { level: u32 },
    GoldFound { gold: u32 },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Encountered { monster, symbol } => {
                write!(f, "You have encountered a {} ({}).", monster, symbol)
            }
            CombatEvent::PlayerHit { monster, damage } => {
                write!(f, "You hit the {} for {} damage.", monster, damage)
            }
            CombatEvent::MonsterHit { monster, damage } => {
                write!(f, "The {} hit you for {} damage.", monster, damage)
            }
            CombatEvent::Fled => write!(f, "You successfully fled."),
            CombatEvent::MonsterKilled { monster } => write!(f, "You killed the {}.", monster),
            CombatEvent::LevelUp { level } => write!(f, "You are now level {}.", level),
            CombatEvent::GoldFound { gold } => write!(f, "You found {} gold.", gold),
        }
    }
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Fled { kind: MonsterKind },
    MonsterKilled { kind: MonsterKind, gold: u32 },
    PlayerKilled { kind: MonsterKind },
}

impl EncounterOutcome {
    pub fn kind(&self) -> MonsterKind {
        match *self {
            EncounterOutcome::Fled { kind }
            | EncounterOutcome::MonsterKilled { kind, .. }
            | EncounterOutcome::PlayerKilled { kind } => kind,
        }
    }
}

/// Where an encounter currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    /// Both sides alive, waiting for the player's choice
    AwaitingChoice,
    Fled,
    MonsterKilled,
    PlayerKilled,
}
