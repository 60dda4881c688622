//! Snapshot system: queries the ECS world and builds a complete
//! `GameSnapshot`. This system is read-only — it never modifies the world.

use hecs::World;

use voidstrike_core::components::*;
use voidstrike_core::constants::{MAX_FORWARD_SPEED, VISUAL_PITCH_MAX};
use voidstrike_core::enums::GamePhase;
use voidstrike_core::events::AudioEvent;
use voidstrike_core::state::*;
use voidstrike_core::types::{Position, SimTime, Velocity};

use crate::status::GameStatus;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    status: &GameStatus,
    dev_camera: bool,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        fighters: build_fighters(world),
        bolts: build_bolts(world),
        hazards: build_hazards(world),
        bursts: build_bursts(world),
        score: status.score,
        kills: status.kills,
        objective: status.objective.clone(),
        outcome: status.outcome,
        outcome_message: status
            .outcome
            .map(|o| o.message().to_string())
            .unwrap_or_default(),
        dev_camera,
        audio_events,
    }
}

/// Build the ship view, including the cosmetic roll/pitch angles.
fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&PlayerShip, &Position, &FlightState)>()
        .iter()
        .next()
        .map(|(_entity, (_ship, pos, flight))| ShipView {
            position: *pos,
            yaw: flight.yaw,
            current_speed: flight.current_speed,
            health: flight.health,
            invulnerable: flight.invulnerable(),
            roll_angle: flight.barrel_roll.roll_angle(),
            visual_pitch: -(flight.current_speed / MAX_FORWARD_SPEED) * VISUAL_PITCH_MAX,
        })
        .unwrap_or_default()
}

fn build_fighters(world: &World) -> Vec<FighterView> {
    let mut fighters: Vec<FighterView> = world
        .query::<(&Fighter, &Position, &Collider, &Spin)>()
        .iter()
        .map(|(entity, (fighter, pos, collider, spin))| FighterView {
            id: entity.id(),
            position: *pos,
            radius: collider.radius,
            health: fighter.health,
            attitude: spin.attitude,
        })
        .collect();
    fighters.sort_by_key(|f| f.id);
    fighters
}

fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut bolts: Vec<BoltView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (bolt, pos, vel))| BoltView {
            id: entity.id(),
            position: *pos,
            velocity: *vel,
            owner: bolt.owner,
        })
        .collect();
    bolts.sort_by_key(|b| b.id);
    bolts
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    let mut hazards: Vec<HazardView> = world
        .query::<(&Hazard, &Position, &Collider, Option<&Spin>)>()
        .iter()
        .map(|(entity, (hazard, pos, collider, spin))| HazardView {
            id: entity.id(),
            kind: hazard.kind,
            position: *pos,
            radius: collider.radius,
            attitude: spin.map(|s| s.attitude),
        })
        .collect();
    hazards.sort_by_key(|h| h.id);
    hazards
}

fn build_bursts(world: &World) -> Vec<BurstView> {
    let mut bursts: Vec<BurstView> = world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(entity, (explosion, pos))| BurstView {
            id: entity.id(),
            position: *pos,
            color: explosion.color,
            opacity: explosion.opacity(),
            size: explosion.size(),
            particles: explosion
                .particles
                .iter()
                .map(|p| {
                    Position::new(
                        pos.x + p.offset.x,
                        pos.y + p.offset.y,
                        pos.z + p.offset.z,
                    )
                })
                .collect(),
        })
        .collect();
    bursts.sort_by_key(|b| b.id);
    bursts
}
