//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod cleanup;
pub mod collision;
pub mod effects;
pub mod enemy_ai;
pub mod flight;
pub mod projectiles;
pub mod snapshot;
