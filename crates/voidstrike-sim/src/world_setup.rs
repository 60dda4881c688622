//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the enemy fighter patrol, the asteroid field,
//! the planets, and the target structure with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::*;
use voidstrike_core::constants::*;
use voidstrike_core::enums::HazardKind;
use voidstrike_core::types::{Attitude, Position, Velocity};

use crate::engine::SimConfig;

/// Fixed planet layout: (x, y, z, radius).
const PLANETS: [(f64, f64, f64, f64); 2] = [
    (-600.0, 900.0, -80.0, 120.0),
    (500.0, 1500.0, 60.0, 150.0),
];

/// Set up the initial level: ship at the origin, the structure ahead on the
/// flight axis, planets, fighters, and asteroids.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) {
    spawn_player_ship(world);
    spawn_structure(world);
    spawn_planets(world);
    spawn_fighter_patrol(world, rng, config.fighter_count);
    spawn_asteroid_field(world, rng, config.asteroid_count);
}

/// Spawn the player's ship at the origin with full health.
pub fn spawn_player_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerShip,
        Position::new(0.0, 0.0, 0.0),
        Velocity::new(0.0, 0.0, 0.0),
        FlightState::default(),
        Collider {
            radius: SHIP_COLLISION_RADIUS,
        },
    ))
}

/// Spawn the target structure ahead on the flight axis.
pub fn spawn_structure(world: &mut World) -> hecs::Entity {
    world.spawn((
        Hazard {
            kind: HazardKind::Structure,
        },
        Position::new(0.0, STRUCTURE_DISTANCE, 0.0),
        Collider {
            radius: STRUCTURE_RADIUS,
        },
    ))
}

/// Spawn the fixed planet set.
pub fn spawn_planets(world: &mut World) {
    for (x, y, z, radius) in PLANETS {
        world.spawn((
            Hazard {
                kind: HazardKind::Planet,
            },
            Position::new(x, y, z),
            Collider { radius },
        ));
    }
}

/// Spawn a batch of enemy fighters in the patrol volume between the ship
/// and the structure, with random drift velocities and tumble rates.
pub fn spawn_fighter_patrol(world: &mut World, rng: &mut ChaCha8Rng, count: usize) {
    for _ in 0..count {
        spawn_fighter(world, rng);
    }
}

/// Spawn a single fighter.
pub fn spawn_fighter(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(-400.0..400.0),
        rng.gen_range(300.0..1500.0),
        rng.gen_range(-150.0..150.0),
    );
    let velocity = Velocity::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    world.spawn((
        Fighter {
            health: FIGHTER_MAX_HEALTH,
        },
        position,
        velocity,
        random_spin(rng),
        Collider {
            radius: FIGHTER_RADIUS,
        },
    ))
}

/// Spawn the asteroid field.
pub fn spawn_asteroid_field(world: &mut World, rng: &mut ChaCha8Rng, count: usize) {
    for _ in 0..count {
        spawn_asteroid(world, rng);
    }
}

/// Spawn a single drifting asteroid.
pub fn spawn_asteroid(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let position = random_asteroid_position(rng);
    let velocity = Velocity::new(
        rng.gen_range(-ASTEROID_DRIFT_SPEED..ASTEROID_DRIFT_SPEED),
        rng.gen_range(-ASTEROID_DRIFT_SPEED..ASTEROID_DRIFT_SPEED),
        rng.gen_range(-ASTEROID_DRIFT_SPEED..ASTEROID_DRIFT_SPEED),
    );
    world.spawn((
        Hazard {
            kind: HazardKind::Asteroid,
        },
        position,
        velocity,
        random_spin(rng),
        Collider {
            radius: rng.gen_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS),
        },
    ))
}

/// Pick a fresh asteroid position in the field, keeping clear of the ship's
/// spawn point. Also used when recycling an asteroid that drifted out.
pub fn random_asteroid_position(rng: &mut ChaCha8Rng) -> Position {
    loop {
        let position = Position::new(
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-400.0..1800.0),
            rng.gen_range(-200.0..200.0),
        );
        if position.distance_to(&Position::default()) > 150.0 {
            return position;
        }
    }
}

fn random_spin(rng: &mut ChaCha8Rng) -> Spin {
    Spin {
        rate: Attitude {
            pitch: rng.gen_range(-1.0..1.0),
            yaw: rng.gen_range(-1.0..1.0),
            roll: rng.gen_range(-1.0..1.0),
        },
        attitude: Attitude::default(),
    }
}
