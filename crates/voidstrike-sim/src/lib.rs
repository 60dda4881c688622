//! Headless simulation engine for VOIDSTRIKE.
//!
//! Owns the hecs ECS world, processes player commands, runs all per-tick
//! systems in a fixed order, and produces `GameSnapshot`s for the rendering
//! frontend. Deterministic given a seed.

pub mod engine;
pub mod status;
pub mod systems;
pub mod world_setup;

#[cfg(test)]
mod tests;
