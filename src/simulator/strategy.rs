//! Automatic players for the simulator.

use crate::character::{Combatant, Player};
use crate::combat::{Choice, CombatEvent};
use crate::core::game_loop::PlayerController;
use crate::monster::{Monster, MonsterKind};
use serde::Serialize;
use std::fmt;
use std::io;
use std::str::FromStr;

/// Decision rule for the automatic player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Never runs
    AlwaysFight,
    /// Runs from dragons, fights everything else
    AvoidDragons,
    /// Runs whenever the monster's next hit would be fatal
    Cautious,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::AlwaysFight,
        Strategy::AvoidDragons,
        Strategy::Cautious,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AlwaysFight => "always-fight",
            Strategy::AvoidDragons => "avoid-dragons",
            Strategy::Cautious => "cautious",
        }
    }

    pub fn decide(self, player: &Player, monster: &Monster) -> Choice {
        match self {
            Strategy::AlwaysFight => Choice::Fight,
            Strategy::AvoidDragons if monster.kind() == MonsterKind::Dragon => Choice::Run,
            Strategy::AvoidDragons => Choice::Fight,
            Strategy::Cautious => {
                // Fight anyway if this swing finishes the monster
                let kills_first = i64::from(monster.health()) <= i64::from(player.damage());
                let hit_is_fatal = i64::from(monster.damage()) >= i64::from(player.health());
                if hit_is_fatal && !kills_first {
                    Choice::Run
                } else {
                    Choice::Fight
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
                format!("unknown strategy '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Per-game counters gathered from narration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    pub flee_attempts: u64,
    pub flees: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

/// Controller that plays by a [`Strategy`] and counts what happens.
#[derive(Debug, Clone)]
pub struct AutoPilot {
    strategy: Strategy,
    tally: RunTally,
    verbose: bool,
}

impl AutoPilot {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tally: RunTally::default(),
            verbose: false,
        }
    }

    /// Echo every event to stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn tally(&self) -> &RunTally {
        &self.tally
    }
}

impl PlayerController for AutoPilot {
    fn choose(&mut self, player: &Player, monster: &Monster) -> io::Result<Choice> {
        let choice = self.strategy.decide(player, monster);
        if choice == Choice::Run {
            self.tally.flee_attempts += 1;
        }
        Ok(choice)
    }

    fn narrate(&mut self, event: &CombatEvent) -> io::Result<()> {
        match event {
            CombatEvent::PlayerHit { damage, .. } => self.tally.damage_dealt += u64::from(*damage),
            CombatEvent::MonsterHit { damage, .. } => self.tally.damage_taken += u64::from(*damage),
            CombatEvent::Fled => self.tally.flees += 1,
            _ => {}
        }
        if self.verbose {
            eprintln!("  {}", event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert!("berserk".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_always_fight_never_runs() {
        let player = Player::new("Sim");
        for kind in MonsterKind::ALL {
            assert_eq!(
                Strategy::AlwaysFight.decide(&player, &Monster::new(kind)),
                Choice::Fight
            );
        }
    }

    #[test]
    fn test_avoid_dragons_runs_only_from_dragons() {
        let player = Player::new("Sim");
        let strategy = Strategy::AvoidDragons;
        assert_eq!(
            strategy.decide(&player, &Monster::new(MonsterKind::Dragon)),
            Choice::Run
        );
        assert_eq!(
            strategy.decide(&player, &Monster::new(MonsterKind::Orc)),
            Choice::Fight
        );
    }

    #[test]
    fn test_cautious_runs_when_next_hit_is_fatal() {
        let mut player = Player::new("Sim");
        player.apply_damage(7); // 3 health left
        let dragon = Monster::new(MonsterKind::Dragon);
        assert_eq!(Strategy::Cautious.decide(&player, &dragon), Choice::Run);

        let orc = Monster::new(MonsterKind::Orc);
        assert_eq!(Strategy::Cautious.decide(&player, &orc), Choice::Fight);
    }

    #[test]
    fn test_cautious_fights_when_it_strikes_the_killing_blow() {
        let mut player = Player::new("Sim");
        player.apply_damage(9); // 1 health left
        let slime = Monster::new(MonsterKind::Slime);
        assert_eq!(Strategy::Cautious.decide(&player, &slime), Choice::Fight);
    }

    #[test]
    fn test_autopilot_tallies_events() {
        let mut pilot = AutoPilot::new(Strategy::AvoidDragons);
        let player = Player::new("Sim");
        pilot
            .choose(&player, &Monster::new(MonsterKind::Dragon))
            .unwrap();
        pilot
            .narrate(&CombatEvent::MonsterHit {
                monster: "dragon".into(),
                damage: 4,
            })
            .unwrap();
        pilot.narrate(&CombatEvent::Fled).unwrap();
        pilot
            .narrate(&CombatEvent::PlayerHit {
                monster: "orc".into(),
                damage: 1,
            })
            .unwrap();

        assert_eq!(
            pilot.tally(),
            &RunTally {
                flee_attempts: 1,
                flees: 1,
                damage_dealt: 1,
                damage_taken: 4,
            }
        );
    }
}
