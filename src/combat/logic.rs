use super::types::{Choice, CombatEvent, EncounterOutcome, EncounterState};
use crate::character::{Combatant, Player};
use crate::core::constants::{FLEE_ROLL_MAX, FLEE_ROLL_MIN, FLEE_SUCCESS_ROLL};
use crate::core::rng::Dice;
use crate::monster::Monster;

/// Player strikes the monster.
pub fn attack_monster(player: &Player, monster: &mut Monster) -> CombatEvent {
    let damage = player.damage();
    monster.apply_damage(damage);
    CombatEvent::PlayerHit {
        monster: monster.name().to_string(),
        damage,
    }
}

/// Monster strikes the player.
pub fn attack_player(player: &mut Player, monster: &Monster) -> CombatEvent {
    let damage = monster.damage();
    player.apply_damage(damage);
    CombatEvent::MonsterHit {
        monster: monster.name().to_string(),
        damage,
    }
}

/// Rolls a flee attempt. True means the player got away.
pub fn roll_flee(dice: &mut impl Dice) -> bool {
    dice.roll(FLEE_ROLL_MIN, FLEE_ROLL_MAX) == FLEE_SUCCESS_ROLL
}

/// One fight between the player and a single monster.
///
/// The player always strikes first on a fight turn; the monster only
/// answers if it survived. A failed run gives the monster a free hit.
#[derive(Debug, Clone)]
pub struct Encounter {
    monster: Monster,
    state: EncounterState,
}

impl Encounter {
    pub fn new(monster: Monster) -> Self {
        Self {
            monster,
            state: EncounterState::AwaitingChoice,
        }
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != EncounterState::AwaitingChoice
    }

    pub fn announce(&self) -> CombatEvent {
        CombatEvent::Encountered {
            monster: self.monster.name().to_string(),
            symbol: self.monster.symbol(),
        }
    }

    /// Resolves one choice and returns what happened.
    ///
    /// Killing the monster also pays out: one level and the monster's gold.
    /// Does nothing once the encounter is over.
    pub fn take_turn(
        &mut self,
        player: &mut Player,
        choice: Choice,
        dice: &mut impl Dice,
    ) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        match choice {
            Choice::Run => {
                if roll_flee(dice) {
                    self.state = EncounterState::Fled;
                    events.push(CombatEvent::Fled);
                    return events;
                }
                events.push(attack_player(player, &self.monster));
            }
            Choice::Fight => {
                events.push(attack_monster(player, &mut self.monster));
                if !self.monster.is_dead() {
                    events.push(attack_player(player, &self.monster));
                }
            }
        }

        if self.monster.is_dead() {
            self.state = EncounterState::MonsterKilled;
            events.extend(self.claim_reward(player));
        } else if player.is_dead() {
            self.state = EncounterState::PlayerKilled;
        }

        events
    }

    fn claim_reward(&self, player: &mut Player) -> Vec<CombatEvent> {
        let gold = self.monster.gold();
        player.level_up();
        let events = vec![
            CombatEvent::MonsterKilled {
                monster: self.monster.name().to_string(),
            },
            CombatEvent::LevelUp {
                level: player.level(),
            },
            CombatEvent::GoldFound { gold },
        ];
        player.add_gold(gold);
        events
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        let kind = self.monster.kind();
        match self.state {
            EncounterState::AwaitingChoice => None,
            EncounterState::Fled => Some(EncounterOutcome::Fled { kind }),
            EncounterState::MonsterKilled => Some(EncounterOutcome::MonsterKilled {
                kind,
                gold: self.monster.gold(),
            }),
            EncounterState::PlayerKilled => Some(EncounterOutcome::PlayerKilled { kind }),
        }
    }
}
