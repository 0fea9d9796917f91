//! Monster archetypes and the monsters spawned from them.

mod types;

pub use types::{Monster, MonsterData, MonsterKind};
