//! Game loop, random source, and tuning constants.

#![allow(unused_imports)]

pub mod constants;
pub mod game_loop;
pub mod rng;

pub use constants::*;
pub use game_loop::*;
pub use rng::*;
