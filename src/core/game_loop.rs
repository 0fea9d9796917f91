//! The outer game loop: encounter after encounter until the player wins or dies.
//!
//! I/O stays behind [`PlayerController`], so the interactive console and the
//! headless simulator drive exactly the same game.

use crate::character::{Combatant, Player};
use crate::combat::{Choice, CombatEvent, Encounter, EncounterOutcome};
use crate::core::rng::{Dice, GameRng};
use crate::monster::Monster;
use std::fmt;
use std::io;

/// Supplies the player's decisions and receives narration.
pub trait PlayerController {
    /// Asks for a run/fight decision against `monster`.
    fn choose(&mut self, player: &Player, monster: &Monster) -> io::Result<Choice>;

    /// Reports something that happened during an encounter.
    fn narrate(&mut self, event: &CombatEvent) -> io::Result<()>;
}

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSummary {
    Victory { gold: u32 },
    Defeat { level: u32, gold: u32 },
}

impl GameSummary {
    /// `None` while the game is still going.
    pub fn from_player(player: &Player) -> Option<Self> {
        if player.has_won() {
            Some(GameSummary::Victory {
                gold: player.gold(),
            })
        } else if player.is_dead() {
            Some(GameSummary::Defeat {
                level: player.level(),
                gold: player.gold(),
            })
        } else {
            None
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, GameSummary::Victory { .. })
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSummary::Victory { gold } => {
                writeln!(f, "You are victorious!")?;
                write!(
                    f,
                    "You now possess {} gold. Your wealth grows along with your legend!",
                    gold
                )
            }
            GameSummary::Defeat { level, gold } => {
                writeln!(f, "You died at level {} and with {} gold.", level, gold)?;
                write!(f, "Too bad you can't take it with you!")
            }
        }
    }
}

/// One playthrough: the player plus the dice that drive it.
#[derive(Debug)]
pub struct Game<D: Dice = GameRng> {
    player: Player,
    dice: D,
}

impl<D: Dice> Game<D> {
    pub fn new(player: Player, dice: D) -> Self {
        Self { player, dice }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_over(&self) -> bool {
        self.player.has_won() || self.player.is_dead()
    }

    pub fn summary(&self) -> Option<GameSummary> {
        GameSummary::from_player(&self.player)
    }

    /// Spawns a random monster and fights it to the end.
    pub fn play_encounter(
        &mut self,
        controller: &mut impl PlayerController,
    ) -> io::Result<EncounterOutcome> {
        let mut encounter = Encounter::new(Monster::random(&mut self.dice));
        controller.narrate(&encounter.announce())?;

        loop {
            if let Some(outcome) = encounter.outcome() {
                return Ok(outcome);
            }
            let choice = controller.choose(&self.player, encounter.monster())?;
            for event in encounter.take_turn(&mut self.player, choice, &mut self.dice) {
                controller.narrate(&event)?;
            }
        }
    }

    /// Plays encounters until the player has won or died.
    ///
    /// Always plays at least one encounter.
    pub fn run(&mut self, controller: &mut impl PlayerController) -> io::Result<GameSummary> {
        loop {
            self.play_encounter(controller)?;
            if let Some(summary) = self.summary() {
                return Ok(summary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterKind;

    struct AlwaysFight {
        narrated: Vec<String>,
    }

    impl PlayerController for AlwaysFight {
        fn choose(&mut self, _player: &Player, _monster: &Monster) -> io::Result<Choice> {
            Ok(Choice::Fight)
        }

        fn narrate(&mut self, event: &CombatEvent) -> io::Result<()> {
            self.narrated.push(event.to_string());
            Ok(())
        }
    }

    /// Always rolls the same value, clamped into range.
    struct FixedDice(i32);

    impl Dice for FixedDice {
        fn roll(&mut self, min: i32, max: i32) -> i32 {
            self.0.clamp(min, max)
        }
    }

    #[test]
    fn test_summary_none_while_playing() {
        assert_eq!(GameSummary::from_player(&Player::new("Hero")), None);
    }

    #[test]
    fn test_victory_text() {
        let summary = GameSummary::Victory { gold: 420 };
        assert!(summary.is_victory());
        assert_eq!(
            summary.to_string(),
            "You are victorious!\nYou now possess 420 gold. Your wealth grows along with your legend!"
        );
    }

    #[test]
    fn test_defeat_text() {
        let summary = GameSummary::Defeat { level: 3, gold: 35 };
        assert!(!summary.is_victory());
        assert_eq!(
            summary.to_string(),
            "You died at level 3 and with 35 gold.\nToo bad you can't take it with you!"
        );
    }

    #[test]
    fn test_play_encounter_announces_then_fights() {
        // Roll 2 picks the slime
        let mut game = Game::new(Player::new("Hero"), FixedDice(2));
        let mut controller = AlwaysFight {
            narrated: Vec::new(),
        };
        let outcome = game.play_encounter(&mut controller).unwrap();

        assert_eq!(
            outcome,
            EncounterOutcome::MonsterKilled {
                kind: MonsterKind::Slime,
                gold: 10
            }
        );
        assert_eq!(
            controller.narrated,
            vec![
                "You have encountered a slime (s).",
                "You hit the slime for 1 damage.",
                "You killed the slime.",
                "You are now level 2.",
                "You found 10 gold.",
            ]
        );
    }

    #[test]
    fn test_run_until_victory_against_slimes() {
        let mut game = Game::new(Player::new("Hero"), FixedDice(2));
        let mut controller = AlwaysFight {
            narrated: Vec::new(),
        };
        let summary = game.run(&mut controller).unwrap();

        assert_eq!(summary, GameSummary::Victory { gold: 190 });
        assert_eq!(game.player().level(), 20);
        assert_eq!(game.player().health(), 10);
    }

    #[test]
    fn test_run_until_death_against_dragons() {
        let mut game = Game::new(Player::new("Hero"), FixedDice(0));
        let mut controller = AlwaysFight {
            narrated: Vec::new(),
        };
        let summary = game.run(&mut controller).unwrap();

        assert_eq!(summary, GameSummary::Defeat { level: 1, gold: 0 });
        assert!(game.is_over());
    }
}
