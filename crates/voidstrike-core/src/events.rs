//! Events emitted by the simulation for audio and UI feedback.
//!
//! These are fire-and-forget triggers: the frontend plays the matching
//! asset if it is loaded and silently skips it otherwise.

use serde::{Deserialize, Serialize};

use crate::enums::{BoltOwner, GameOutcome};

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A laser bolt was fired.
    LaserFired { owner: BoltOwner },
    /// Impact spark (bolt hit without a kill).
    ExplosionSmall,
    /// Kill explosion (fighter or asteroid destroyed, or the ship lost).
    ExplosionLarge,
    /// The player ship took damage.
    ShipHit,
    /// Terminal transition, with the outcome for the end screen sting.
    GameOver { outcome: GameOutcome },
}
