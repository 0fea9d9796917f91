// Player starting stats
pub const PLAYER_SYMBOL: char = '@';
pub const PLAYER_START_HEALTH: i32 = 10;
pub const PLAYER_START_DAMAGE: u32 = 1;
pub const PLAYER_START_GOLD: u32 = 0;
pub const PLAYER_START_LEVEL: u32 = 1;

// Progression
pub const WINNING_LEVEL: u32 = 20;
pub const LEVEL_UP_DAMAGE_BONUS: u32 = 1;

// Run attempts roll 0..=1; this value means the player got away
pub const FLEE_ROLL_MIN: i32 = 0;
pub const FLEE_ROLL_MAX: i32 = 1;
pub const FLEE_SUCCESS_ROLL: i32 = 1;

// Monster archetype rows: (name, symbol, health, damage, gold)
// Index order matches MonsterKind::ALL
pub const MONSTER_STATS: [(&str, char, i32, u32, u32); 3] = [
    ("dragon", 'D', 20, 4, 100), // MonsterKind::Dragon
    ("orc", 'o', 4, 2, 25),      // MonsterKind::Orc
    ("slime", 's', 1, 1, 10),    // MonsterKind::Slime
];

// Simulator defaults
pub const SIM_DEFAULT_RUNS: u32 = 1000;
pub const SIM_DEFAULT_MAX_ENCOUNTERS: u64 = 10_000;
