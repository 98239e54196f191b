//! Creature Arena - turn-based creature battles and an arithmetic dataset generator
//!
//! This module exposes the roster, battle engine, console and generator for
//! the binary and for testing.

pub mod battle;
pub mod build_info;
pub mod config;
pub mod console;
pub mod constants;
pub mod creature;
pub mod creature_store;
pub mod error;
pub mod problems;

pub use battle::{run_battle, run_battle_with, Battle, BattleEvent, BattlePhase, BattleReport, Contender};
pub use constants::*;
pub use creature::{Creature, CreaturePatch};
pub use creature_store::CreatureStore;
pub use error::{ArenaError, Result};
