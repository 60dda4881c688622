//! Enemy fighter system — per-tick movement, steering, and fire decisions.
//!
//! The decision logic lives in voidstrike-ai as pure functions; this system
//! feeds it per-fighter context and applies the results to the ECS world.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Fighter, PlayerShip, Spin};
use voidstrike_core::constants::*;
use voidstrike_core::enums::BoltOwner;
use voidstrike_core::events::AudioEvent;
use voidstrike_core::types::{Position, Velocity};

use voidstrike_ai::steering::{self, SteerContext};

use super::projectiles;

/// Run the fighter AI: advance, steer, reflect at bounds, maybe fire.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    let ship_pos = world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_entity, (_ship, pos))| *pos);
    let Some(ship_pos) = ship_pos else {
        return;
    };

    let mut volleys: Vec<Position> = Vec::new();

    for (_entity, (_fighter, pos, vel, spin)) in
        world.query_mut::<(&Fighter, &mut Position, &mut Velocity, &mut Spin)>()
    {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;

        spin.attitude.pitch += spin.rate.pitch * DT;
        spin.attitude.yaw += spin.rate.yaw * DT;
        spin.attitude.roll += spin.rate.roll * DT;

        let range = pos.distance_to(&ship_pos);
        let ctx = SteerContext {
            position: *pos,
            velocity: *vel,
            ship_position: ship_pos,
            range_to_ship: range,
        };
        *vel = steering::steer(&ctx, rng);
        steering::reflect_at_bounds(pos, vel);

        if steering::wants_fire(range, rng) {
            volleys.push(*pos);
        }
    }

    // Aim is computed fresh at fire time from the ship's current position.
    for origin in volleys {
        let direction = steering::aim_at(&origin, &ship_pos);
        projectiles::fire(
            world,
            origin,
            direction,
            ENEMY_BOLT_SPEED,
            ENEMY_BOLT_RANGE,
            ENEMY_BOLT_DAMAGE,
            BoltOwner::Enemy,
        );
        audio.push(AudioEvent::LaserFired {
            owner: BoltOwner::Enemy,
        });
    }
}
