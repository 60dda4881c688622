//! Game state snapshot — the complete visible state sent to the rendering
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Attitude, Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    pub fighters: Vec<FighterView>,
    pub bolts: Vec<BoltView>,
    pub hazards: Vec<HazardView>,
    pub bursts: Vec<BurstView>,
    pub score: u32,
    pub kills: u32,
    pub objective: String,
    /// Set exactly once, on the Running→Over transition.
    pub outcome: Option<GameOutcome>,
    /// End-screen text for `outcome`, empty while running.
    pub outcome_message: String,
    pub dev_camera: bool,
    pub audio_events: Vec<AudioEvent>,
}

/// Player ship state for camera, mesh placement, and HUD gauges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub yaw: f64,
    /// Signed speed for the HUD gauge.
    pub current_speed: f64,
    pub health: i32,
    /// Drives the damage-flash shader.
    pub invulnerable: bool,
    /// Cosmetic barrel-roll angle (0 when not rolling).
    pub roll_angle: f64,
    /// Cosmetic pitch proportional to speed; never used for gameplay.
    pub visual_pitch: f64,
}

/// An enemy fighter for mesh placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterView {
    pub id: u32,
    pub position: Position,
    pub radius: f64,
    pub health: i32,
    pub attitude: Attitude,
}

/// A laser bolt in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltView {
    pub id: u32,
    pub position: Position,
    /// For beam orientation.
    pub velocity: Velocity,
    pub owner: BoltOwner,
}

/// A world hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub id: u32,
    pub kind: HazardKind,
    pub position: Position,
    pub radius: f64,
    /// Tumble orientation; only asteroids carry one.
    pub attitude: Option<Attitude>,
}

/// An explosion burst with derived opacity/size and world-space particles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstView {
    pub id: u32,
    pub position: Position,
    pub color: [f32; 3],
    pub opacity: f64,
    pub size: f64,
    pub particles: Vec<Position>,
}
