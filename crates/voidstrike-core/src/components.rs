//! ECS components for hecs entities.
//!
//! Components are plain data; game logic lives in systems. The world is the
//! single entity arena: the collision resolver, projectile hit-tests, and the
//! snapshot builder all *query* it, so there is no parallel "collidables"
//! list to fall out of sync.

use serde::{Deserialize, Serialize};

use crate::constants::SHOOT_COOLDOWN_SECS;
use crate::enums::{BoltOwner, HazardKind};
use crate::types::{Attitude, Position, Velocity};

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Barrel roll sub-state. A roll runs to its full 2π turn; nothing cancels
/// it early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum BarrelRoll {
    #[default]
    Inactive,
    Rolling {
        /// +1 = left roll, -1 = right roll.
        direction: i8,
        /// Accumulated roll angle in [0, 2π).
        progress: f64,
    },
}

impl BarrelRoll {
    pub fn is_rolling(&self) -> bool {
        matches!(self, BarrelRoll::Rolling { .. })
    }

    /// Signed visual roll angle (0 when inactive).
    pub fn roll_angle(&self) -> f64 {
        match self {
            BarrelRoll::Inactive => 0.0,
            BarrelRoll::Rolling {
                direction,
                progress,
            } => *direction as f64 * progress,
        }
    }
}

/// The player's authoritative flight state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    /// Signed speed along the forward vector (units/s), clamped to
    /// [MAX_REVERSE_SPEED, MAX_FORWARD_SPEED].
    pub current_speed: f64,
    /// Heading (radians).
    pub yaw: f64,
    /// Accumulated vertical velocity (units/s).
    pub vertical_velocity: f64,
    /// Hull points, clamped to [0, SHIP_MAX_HEALTH].
    pub health: i32,
    /// Post-hit grace clock (seconds remaining).
    pub grace_remaining_secs: f64,
    pub barrel_roll: BarrelRoll,
    /// Session time of the last shot, for the cooldown gate.
    pub last_shot_secs: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            current_speed: 0.0,
            yaw: 0.0,
            vertical_velocity: 0.0,
            health: crate::constants::SHIP_MAX_HEALTH,
            grace_remaining_secs: 0.0,
            barrel_roll: BarrelRoll::default(),
            // Allows an immediate first shot.
            last_shot_secs: -SHOOT_COOLDOWN_SECS,
        }
    }
}

impl FlightState {
    /// The ship ignores all damage sources while rolling or inside the
    /// post-hit grace window.
    pub fn invulnerable(&self) -> bool {
        self.barrel_roll.is_rolling() || self.grace_remaining_secs > 0.0
    }
}

/// An AI-controlled enemy fighter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fighter {
    pub health: i32,
}

/// Visual tumble: fixed per-axis rotation rates and the accumulated angles.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    /// Rotation rates (radians/s per axis).
    pub rate: Attitude,
    /// Accumulated orientation.
    pub attitude: Attitude,
}

/// A laser bolt in flight. Travelled distance is derived from the position
/// against `origin` and is monotonically non-decreasing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: Position,
    pub max_range: f64,
    pub damage: i32,
    pub owner: BoltOwner,
}

/// A world hazard (asteroid, planet, or the target structure).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
}

/// Collision sphere, on everything hit-testable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// One particle of an explosion burst, in burst-local space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BurstParticle {
    pub offset: Position,
    pub velocity: Velocity,
}

/// A transient explosion burst. Opacity and size are pure functions of
/// `age / lifetime`; the burst is removed exactly once when age exceeds
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub age: f64,
    pub lifetime: f64,
    pub base_size: f64,
    pub color: [f32; 3],
    pub particles: Vec<BurstParticle>,
}

impl Explosion {
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    pub fn size(&self) -> f64 {
        self.base_size * (1.0 - 0.5 * (self.age / self.lifetime).min(1.0))
    }
}
