//! VOIDSTRIKE host application.
//!
//! Runs the simulation engine on a fixed-rate loop thread and hands
//! snapshots to whatever frontend binding is attached. The simulation
//! itself stays headless; presentation-only effects live in `postfx`.

pub mod game_loop;
pub mod postfx;
pub mod state;

pub use voidstrike_core as core;
