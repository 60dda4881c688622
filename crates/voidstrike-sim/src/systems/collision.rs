//! Collision resolver: player ship against world hazards.
//!
//! At most one collision resolves per tick (the first found in stable
//! iteration order), and a match is terminal for the tick. The whole check
//! is a no-op while the ship is invulnerable.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Collider, FlightState, Hazard, PlayerShip};
use voidstrike_core::constants::{KILL_BURST_COLOR, LARGE_BURST_SIZE};
use voidstrike_core::enums::{GameOutcome, HazardKind};
use voidstrike_core::events::AudioEvent;
use voidstrike_core::types::Position;

use super::effects;
use crate::status::GameStatus;

/// Run the ship-vs-hazard check for this tick.
pub fn run(
    world: &mut World,
    status: &mut GameStatus,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
) {
    if status.outcome.is_some() {
        return;
    }

    let ship = world
        .query::<(&PlayerShip, &Position, &Collider, &FlightState)>()
        .iter()
        .next()
        .map(|(entity, (_ship, pos, collider, flight))| {
            (entity, *pos, collider.radius, flight.invulnerable())
        });
    let Some((ship_entity, ship_pos, ship_radius, invulnerable)) = ship else {
        return;
    };
    if invulnerable {
        return;
    }

    let mut hit_kind = None;
    {
        let mut query = world.query::<(&Hazard, &Position, &Collider)>();
        for (_entity, (hazard, pos, collider)) in query.iter() {
            if ship_pos.distance_to(pos) < ship_radius + collider.radius {
                hit_kind = Some(hazard.kind);
                break;
            }
        }
    }
    let Some(kind) = hit_kind else {
        return;
    };

    match kind {
        HazardKind::Asteroid => {
            destroy_ship(world, ship_entity);
            status.set_outcome(GameOutcome::AsteroidImpact);
        }
        HazardKind::Planet => {
            destroy_ship(world, ship_entity);
            status.set_outcome(GameOutcome::PlanetImpact);
        }
        // Reaching the structure is the win condition, not a crash.
        HazardKind::Structure => {
            status.set_outcome(GameOutcome::Victory);
        }
    }

    if !matches!(kind, HazardKind::Structure) {
        effects::spawn_burst(world, rng, ship_pos, LARGE_BURST_SIZE, KILL_BURST_COLOR);
        audio.push(AudioEvent::ExplosionLarge);
    }
}

fn destroy_ship(world: &mut World, ship_entity: hecs::Entity) {
    if let Ok(mut flight) = world.get::<&mut FlightState>(ship_entity) {
        flight.health = 0;
    }
}
