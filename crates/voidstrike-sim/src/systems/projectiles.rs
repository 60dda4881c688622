//! Projectile system: spawns, advances, range-limits, and hit-tests laser
//! bolts.
//!
//! Range expiry precedes hit resolution on the same tick, and each bolt
//! resolves at most one hit. Player bolts test fighters before asteroids in
//! stable iteration order; enemy bolts test only the player ship. All
//! removals are buffered and applied after the scan.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Collider, Fighter, FlightState, Hazard, PlayerShip, Projectile};
use voidstrike_core::constants::*;
use voidstrike_core::enums::{BoltOwner, GameOutcome, HazardKind};
use voidstrike_core::events::AudioEvent;
use voidstrike_core::types::{Position, Velocity};

use super::effects;
use crate::status::GameStatus;

/// Append a new bolt. The player-side cooldown gate lives in the flight
/// system; enemy fire is gated by the AI's probability roll.
pub fn fire(
    world: &mut World,
    origin: Position,
    direction: DVec3,
    speed: f64,
    range: f64,
    damage: i32,
    owner: BoltOwner,
) -> Entity {
    let dir = direction.try_normalize().unwrap_or(DVec3::Y);
    world.spawn((
        Projectile {
            origin,
            max_range: range,
            damage,
            owner,
        },
        origin,
        Velocity::from_dvec3(dir * speed),
    ))
}

/// Advance all bolts and resolve expiries and hits for this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    status: &mut GameStatus,
    despawn_buffer: &mut Vec<Entity>,
    audio: &mut Vec<AudioEvent>,
) {
    for (_entity, (_bolt, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;
    }

    // Snapshot this tick's hit-test targets; damage and despawns are applied
    // through the world after each match so later bolts see updated health.
    let bolts: Vec<(Entity, Projectile, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (bolt, pos))| (entity, *bolt, *pos))
        .collect();
    let fighters: Vec<(Entity, Position, f64)> = world
        .query::<(&Fighter, &Position, &Collider)>()
        .iter()
        .map(|(entity, (_fighter, pos, collider))| (entity, *pos, collider.radius))
        .collect();
    let asteroids: Vec<(Entity, Position, f64)> = world
        .query::<(&Hazard, &Position, &Collider)>()
        .iter()
        .filter(|(_entity, (hazard, _pos, _collider))| hazard.kind == HazardKind::Asteroid)
        .map(|(entity, (_hazard, pos, collider))| (entity, *pos, collider.radius))
        .collect();
    let ship: Option<(Entity, Position, f64)> = world
        .query::<(&PlayerShip, &Position, &Collider)>()
        .iter()
        .next()
        .map(|(entity, (_ship, pos, collider))| (entity, *pos, collider.radius));

    let mut dead_fighters: Vec<Entity> = Vec::new();
    let mut dead_asteroids: Vec<Entity> = Vec::new();
    let mut bursts: Vec<(Position, f64, [f32; 3])> = Vec::new();

    for (bolt_entity, bolt, bolt_pos) in bolts {
        let travelled = bolt.origin.distance_to(&bolt_pos);

        // Expiry wins the tie against a coincident target.
        if travelled >= bolt.max_range - RANGE_SLOP {
            despawn_buffer.push(bolt_entity);
            continue;
        }

        match bolt.owner {
            BoltOwner::Player => resolve_player_bolt(
                world,
                rng,
                status,
                audio,
                bolt_entity,
                &bolt,
                &bolt_pos,
                &fighters,
                &asteroids,
                &mut dead_fighters,
                &mut dead_asteroids,
                &mut bursts,
                despawn_buffer,
            ),
            BoltOwner::Enemy => resolve_enemy_bolt(
                world,
                status,
                audio,
                bolt_entity,
                &bolt,
                &bolt_pos,
                ship,
                &mut bursts,
                despawn_buffer,
            ),
        }
    }

    for (position, size, color) in bursts {
        effects::spawn_burst(world, rng, position, size, color);
    }

    despawn_buffer.extend(dead_fighters);
    despawn_buffer.extend(dead_asteroids);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Player bolts test fighters first, then asteroids. First match wins.
#[allow(clippy::too_many_arguments)]
fn resolve_player_bolt(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    status: &mut GameStatus,
    audio: &mut Vec<AudioEvent>,
    bolt_entity: Entity,
    bolt: &Projectile,
    bolt_pos: &Position,
    fighters: &[(Entity, Position, f64)],
    asteroids: &[(Entity, Position, f64)],
    dead_fighters: &mut Vec<Entity>,
    dead_asteroids: &mut Vec<Entity>,
    bursts: &mut Vec<(Position, f64, [f32; 3])>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (fighter_entity, fighter_pos, radius) in fighters {
        // Skip targets already destroyed earlier in this scan.
        if dead_fighters.contains(fighter_entity) {
            continue;
        }
        if bolt_pos.distance_to(fighter_pos) >= *radius {
            continue;
        }

        despawn_buffer.push(bolt_entity);
        if let Ok(mut fighter) = world.get::<&mut Fighter>(*fighter_entity) {
            fighter.health -= bolt.damage;
            if fighter.health <= 0 {
                dead_fighters.push(*fighter_entity);
                bursts.push((*fighter_pos, LARGE_BURST_SIZE, KILL_BURST_COLOR));
                status.score += SCORE_FIGHTER;
                status.kills += 1;
                audio.push(AudioEvent::ExplosionLarge);
            } else {
                bursts.push((*bolt_pos, SMALL_BURST_SIZE, IMPACT_BURST_COLOR));
                audio.push(AudioEvent::ExplosionSmall);
            }
        }
        return;
    }

    for (asteroid_entity, asteroid_pos, radius) in asteroids {
        if dead_asteroids.contains(asteroid_entity) {
            continue;
        }
        if bolt_pos.distance_to(asteroid_pos) >= *radius {
            continue;
        }

        despawn_buffer.push(bolt_entity);
        bursts.push((*bolt_pos, SMALL_BURST_SIZE, IMPACT_BURST_COLOR));
        audio.push(AudioEvent::ExplosionSmall);
        if rng.gen_bool(ASTEROID_DESTROY_CHANCE) {
            dead_asteroids.push(*asteroid_entity);
            bursts.push((*asteroid_pos, LARGE_BURST_SIZE, KILL_BURST_COLOR));
            status.score += SCORE_ASTEROID;
            audio.push(AudioEvent::ExplosionLarge);
        }
        return;
    }
}

/// Enemy bolts test only the player ship, and pass straight through while
/// the ship is invulnerable.
#[allow(clippy::too_many_arguments)]
fn resolve_enemy_bolt(
    world: &mut World,
    status: &mut GameStatus,
    audio: &mut Vec<AudioEvent>,
    bolt_entity: Entity,
    bolt: &Projectile,
    bolt_pos: &Position,
    ship: Option<(Entity, Position, f64)>,
    bursts: &mut Vec<(Position, f64, [f32; 3])>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let Some((ship_entity, ship_pos, ship_radius)) = ship else {
        return;
    };
    if bolt_pos.distance_to(&ship_pos) >= ship_radius {
        return;
    }

    // Re-read invulnerability at hit time so a grace window started earlier
    // in this same scan also suppresses the hit.
    if let Ok(mut flight) = world.get::<&mut FlightState>(ship_entity) {
        if flight.invulnerable() {
            return;
        }
        flight.health = (flight.health - bolt.damage).max(0);
        flight.grace_remaining_secs = HIT_GRACE_SECS;
        if flight.health == 0 {
            status.set_outcome(GameOutcome::ShotDown);
        }
    }

    despawn_buffer.push(bolt_entity);
    bursts.push((ship_pos, SMALL_BURST_SIZE, IMPACT_BURST_COLOR));
    audio.push(AudioEvent::ShipHit);
}
