//! Asteroid drift and field recycling.
//!
//! Only asteroids carry drift velocity and tumble; planets and the
//! structure are immutable for the session. An asteroid drifting past the
//! field bound is repositioned (respawn-by-reposition), never despawned.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Hazard, Spin};
use voidstrike_core::constants::{ASTEROID_FIELD_BOUND, DT};
use voidstrike_core::types::{Position, Velocity};

use crate::world_setup;

/// Advance asteroid drift and recycle strays back into the field.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    for (_entity, (_hazard, pos, vel, spin)) in
        world.query_mut::<(&Hazard, &mut Position, &mut Velocity, &mut Spin)>()
    {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;

        spin.attitude.pitch += spin.rate.pitch * DT;
        spin.attitude.yaw += spin.rate.yaw * DT;
        spin.attitude.roll += spin.rate.roll * DT;

        if pos.x.abs() > ASTEROID_FIELD_BOUND
            || pos.y.abs() > ASTEROID_FIELD_BOUND
            || pos.z.abs() > ASTEROID_FIELD_BOUND
        {
            *pos = world_setup::random_asteroid_position(rng);
        }
    }
}
