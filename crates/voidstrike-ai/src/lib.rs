//! Enemy fighter decision logic for VOIDSTRIKE.
//!
//! Pure functions that compute steering and fire decisions for fighter
//! entities. No ECS dependency — operates on plain data, with the RNG
//! injected so every decision is reproducible under a seed.

pub mod steering;
