//! Ship flight integration system — the physics integrator.
//!
//! Reads the held-control set and advances the player's flight state:
//! thrust/drag on the signed speed, yaw turning (suppressed mid-roll), the
//! barrel roll sub-state machine, vertical thrust vs. gravity, and the
//! cooldown-gated fire trigger. Horizontal velocity is recomputed from yaw
//! and speed every tick, never accumulated.

use std::f64::consts::TAU;

use glam::DVec3;
use hecs::World;

use voidstrike_core::commands::InputState;
use voidstrike_core::components::{BarrelRoll, FlightState, PlayerShip};
use voidstrike_core::constants::*;
use voidstrike_core::enums::BoltOwner;
use voidstrike_core::events::AudioEvent;
use voidstrike_core::types::{Position, SimTime, Velocity};

use super::projectiles;

/// Run the flight integrator for the player ship.
pub fn run(world: &mut World, input: &InputState, time: &SimTime, audio: &mut Vec<AudioEvent>) {
    let mut fire_request: Option<(Position, DVec3)> = None;

    for (_entity, (_ship, flight, pos, vel)) in
        world.query_mut::<(&PlayerShip, &mut FlightState, &mut Position, &mut Velocity)>()
    {
        flight.grace_remaining_secs = (flight.grace_remaining_secs - DT).max(0.0);

        advance_barrel_roll(flight, input);
        let rolling = flight.barrel_roll.is_rolling();

        // Turning is suppressed for the duration of a roll.
        if !rolling {
            if input.turn_left {
                flight.yaw -= TURN_STEP;
            }
            if input.turn_right {
                flight.yaw += TURN_STEP;
            }
        }

        // Thrust, clamp, and drag-to-zero when coasting.
        if input.thrust_forward {
            flight.current_speed += THRUST_STEP;
        }
        if input.thrust_back {
            flight.current_speed -= THRUST_STEP;
        }
        flight.current_speed = flight.current_speed.clamp(MAX_REVERSE_SPEED, MAX_FORWARD_SPEED);
        if !input.thrust_forward && !input.thrust_back {
            flight.current_speed *= SPEED_DRAG;
            if flight.current_speed.abs() < SPEED_EPSILON {
                flight.current_speed = 0.0;
            }
        }

        // Vertical: thrust up against a constant pull, damped and clamped.
        if input.vertical_thrust {
            flight.vertical_velocity += VERTICAL_THRUST_STEP;
        } else {
            flight.vertical_velocity -= GRAVITY_STEP;
        }
        flight.vertical_velocity *= VERTICAL_DRAG;
        flight.vertical_velocity = flight
            .vertical_velocity
            .clamp(-VERTICAL_SPEED_LIMIT, VERTICAL_SPEED_LIMIT);

        // Horizontal motion is fully determined by yaw and speed.
        vel.x = flight.yaw.sin() * flight.current_speed;
        vel.y = flight.yaw.cos() * flight.current_speed;
        vel.z = flight.vertical_velocity;

        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;

        // Fire gate runs on the session clock, not tick count. A request
        // inside the cooldown window is dropped, not queued.
        if input.fire && time.elapsed_secs - flight.last_shot_secs >= SHOOT_COOLDOWN_SECS {
            flight.last_shot_secs = time.elapsed_secs;
            let forward = DVec3::new(flight.yaw.sin(), flight.yaw.cos(), 0.0);
            fire_request = Some((*pos, forward));
        }
    }

    if let Some((origin, direction)) = fire_request {
        projectiles::fire(
            world,
            origin,
            direction,
            PLAYER_BOLT_SPEED,
            PLAYER_BOLT_RANGE,
            PLAYER_BOLT_DAMAGE,
            BoltOwner::Player,
        );
        audio.push(AudioEvent::LaserFired {
            owner: BoltOwner::Player,
        });
    }
}

/// Barrel roll sub-state machine. A roll triggers only from Inactive, runs
/// a full 2π turn at ROLL_STEP per tick, and nothing cancels it early.
fn advance_barrel_roll(flight: &mut FlightState, input: &InputState) {
    match &mut flight.barrel_roll {
        BarrelRoll::Rolling { progress, .. } => {
            *progress += ROLL_STEP;
            if *progress >= TAU {
                flight.barrel_roll = BarrelRoll::Inactive;
            }
        }
        BarrelRoll::Inactive => {
            if input.roll_left {
                flight.barrel_roll = BarrelRoll::Rolling {
                    direction: 1,
                    progress: 0.0,
                };
            } else if input.roll_right {
                flight.barrel_roll = BarrelRoll::Rolling {
                    direction: -1,
                    progress: 0.0,
                };
            }
        }
    }
}
