//! Chase-or-wander steering and opportunistic fire decisions.

use glam::DVec3;
use rand::Rng;

use voidstrike_core::constants::*;
use voidstrike_core::types::{Position, Velocity};

/// Input to the steering evaluation for a single fighter.
pub struct SteerContext {
    pub position: Position,
    pub velocity: Velocity,
    pub ship_position: Position,
    pub range_to_ship: f64,
}

/// Compute the fighter's next velocity.
///
/// Inside ENGAGE_RADIUS the velocity is blended toward a pursuit vector
/// pointing at the ship, capped at FIGHTER_MAX_SPEED, with per-axis jitter;
/// outside, the fighter keeps its wander velocity. The speed ceiling is
/// enforced regardless of blending.
pub fn steer<R: Rng>(ctx: &SteerContext, rng: &mut R) -> Velocity {
    let mut vel = ctx.velocity.to_dvec3();

    if ctx.range_to_ship < ENGAGE_RADIUS {
        let to_ship = ctx.ship_position.to_dvec3() - ctx.position.to_dvec3();
        let pursuit = to_ship
            .try_normalize()
            .map(|dir| dir * FIGHTER_MAX_SPEED)
            .unwrap_or(DVec3::ZERO);
        vel = vel.lerp(pursuit, PURSUIT_BLEND);
        vel += DVec3::new(
            rng.gen_range(-PURSUIT_JITTER..PURSUIT_JITTER),
            rng.gen_range(-PURSUIT_JITTER..PURSUIT_JITTER),
            rng.gen_range(-PURSUIT_JITTER..PURSUIT_JITTER),
        );
    }

    Velocity::from_dvec3(vel.clamp_length_max(FIGHTER_MAX_SPEED))
}

/// Reflect the matching velocity component off the world bound.
///
/// Only flips a component that is still carrying the fighter outward, so a
/// fighter sitting past the bound is not trapped oscillating.
pub fn reflect_at_bounds(position: &Position, velocity: &mut Velocity) {
    if position.x.abs() > WORLD_BOUND && position.x.signum() == velocity.x.signum() {
        velocity.x = -velocity.x;
    }
    if position.y.abs() > WORLD_BOUND && position.y.signum() == velocity.y.signum() {
        velocity.y = -velocity.y;
    }
    if position.z.abs() > WORLD_BOUND && position.z.signum() == velocity.z.signum() {
        velocity.z = -velocity.z;
    }
}

/// Opportunistic fire roll: a low fixed per-tick probability while the
/// fighter is inside FIRE_RADIUS. The RNG is only consumed in range.
pub fn wants_fire<R: Rng>(range_to_ship: f64, rng: &mut R) -> bool {
    range_to_ship < FIRE_RADIUS && rng.gen_bool(ENEMY_FIRE_CHANCE)
}

/// Aim direction, computed fresh at fire time from the ship's current
/// position (no lead tracking).
pub fn aim_at(origin: &Position, ship_position: &Position) -> DVec3 {
    (ship_position.to_dvec3() - origin.to_dvec3())
        .try_normalize()
        .unwrap_or(DVec3::Y)
}
