//! Shared stat block for everything that can fight.

/// Name, glyph, and the three numbers combat cares about.
///
/// Health is signed: a hit larger than the remaining health leaves it
/// negative, and anything at or below zero counts as dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    symbol: char,
    health: i32,
    damage: u32,
    gold: u32,
}

impl Creature {
    pub fn new(name: impl Into<String>, symbol: char, health: i32, damage: u32, gold: u32) -> Self {
        Self {
            name: name.into(),
            symbol,
            health,
            damage,
            gold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Subtracts `amount` from health. No floor at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub(crate) fn raise_damage(&mut self, amount: u32) {
        self.damage = self.damage.saturating_add(amount);
    }
}

/// Capability set shared by the player and monsters.
///
/// Implementors only expose their stat block; the operations are provided.
pub trait Combatant {
    fn creature(&self) -> &Creature;
    fn creature_mut(&mut self) -> &mut Creature;

    fn name(&self) -> &str {
        self.creature().name()
    }

    fn symbol(&self) -> char {
        self.creature().symbol()
    }

    fn health(&self) -> i32 {
        self.creature().health()
    }

    fn damage(&self) -> u32 {
        self.creature().damage()
    }

    fn gold(&self) -> u32 {
        self.creature().gold()
    }

    fn apply_damage(&mut self, amount: u32) {
        self.creature_mut().apply_damage(amount);
    }

    fn is_dead(&self) -> bool {
        self.creature().is_dead()
    }

    fn add_gold(&mut self, amount: u32) {
        self.creature_mut().add_gold(amount);
    }
}
