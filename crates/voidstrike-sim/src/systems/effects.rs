//! Explosion burst lifecycle: spawn, age, expire.
//!
//! Bursts are cosmetic (no physical interaction), but their creation and
//! removal timing signals damage and kill events to the player, so the
//! lifecycle is exact: removed once, at age > lifetime.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{BurstParticle, Explosion};
use voidstrike_core::constants::*;
use voidstrike_core::types::{Position, Velocity};

/// Spawn a particle burst at `position`.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    base_size: f64,
    base_color: [f32; 3],
) -> Entity {
    let mut particles = Vec::with_capacity(BURST_PARTICLES);
    for _ in 0..BURST_PARTICLES {
        let offset = Position::new(
            rng.gen_range(-0.5..0.5) * base_size,
            rng.gen_range(-0.5..0.5) * base_size,
            rng.gen_range(-0.5..0.5) * base_size,
        );
        let direction = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(DVec3::Z);
        let speed = rng.gen_range(BURST_SPEED_MIN..BURST_SPEED_MAX) * (base_size / SMALL_BURST_SIZE);
        particles.push(BurstParticle {
            offset,
            velocity: Velocity::from_dvec3(direction * speed),
        });
    }

    // Subtle per-burst color variance.
    let color =
        base_color.map(|channel| (channel as f64 * rng.gen_range(0.85..1.15)).clamp(0.0, 1.0) as f32);

    world.spawn((
        Explosion {
            age: 0.0,
            lifetime: BURST_LIFETIME_SECS,
            base_size,
            color,
            particles,
        },
        position,
    ))
}

/// Age all bursts; expire past lifetime, otherwise drift the particles.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.age += DT;
        if explosion.age > explosion.lifetime {
            despawn_buffer.push(entity);
            continue;
        }
        for particle in &mut explosion.particles {
            particle.offset.x += particle.velocity.x * DT;
            particle.offset.y += particle.velocity.y * DT;
            particle.offset.z += particle.velocity.z * DT;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
