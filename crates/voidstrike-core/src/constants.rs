//! Simulation constants and tuning parameters.
//!
//! The tick rate is fixed, so per-tick steps (thrust, turn, roll, drag
//! factors) are well-defined alongside the per-second speeds that get
//! scaled by `DT` at integration time.

/// Simulation tick rate (Hz), aligned to the nominal display refresh.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ship flight ---

/// Maximum forward speed (units/s).
pub const MAX_FORWARD_SPEED: f64 = 120.0;

/// Maximum reverse speed (units/s, negative = backing up).
pub const MAX_REVERSE_SPEED: f64 = -40.0;

/// Speed change per tick while a thrust key is held (units/s per tick).
pub const THRUST_STEP: f64 = 2.0;

/// Multiplicative speed decay per tick with both thrust keys released.
pub const SPEED_DRAG: f64 = 0.98;

/// Below this magnitude the decaying speed snaps to exactly zero.
pub const SPEED_EPSILON: f64 = 0.05;

/// Yaw change per tick while a turn key is held (radians).
pub const TURN_STEP: f64 = 0.035;

/// Vertical acceleration per tick while vertical thrust is held (units/s).
pub const VERTICAL_THRUST_STEP: f64 = 0.35;

/// Constant downward pull per tick with vertical thrust released (units/s).
pub const GRAVITY_STEP: f64 = 0.2;

/// Multiplicative vertical velocity damping per tick.
pub const VERTICAL_DRAG: f64 = 0.95;

/// Vertical speed clamp (units/s).
pub const VERTICAL_SPEED_LIMIT: f64 = MAX_FORWARD_SPEED * 0.5;

/// Barrel roll progress per tick (radians of the full 2π turn).
pub const ROLL_STEP: f64 = 0.25;

/// Player ship hull points.
pub const SHIP_MAX_HEALTH: i32 = 100;

/// Player ship collision radius.
pub const SHIP_COLLISION_RADIUS: f64 = 4.0;

/// Post-hit invulnerability window (seconds).
pub const HIT_GRACE_SECS: f64 = 1.0;

/// Minimum session time between player shots (seconds).
pub const SHOOT_COOLDOWN_SECS: f64 = 0.25;

/// Maximum cosmetic pitch-forward angle at full speed (radians).
pub const VISUAL_PITCH_MAX: f64 = 0.3;

// --- Laser bolts ---

/// Player bolt speed (units/s).
pub const PLAYER_BOLT_SPEED: f64 = 500.0;

/// Player bolt maximum range (units).
pub const PLAYER_BOLT_RANGE: f64 = 600.0;

/// Player bolt damage per hit.
pub const PLAYER_BOLT_DAMAGE: i32 = 25;

/// Enemy bolt speed (units/s, slower than the player's).
pub const ENEMY_BOLT_SPEED: f64 = 300.0;

/// Enemy bolt maximum range (units).
pub const ENEMY_BOLT_RANGE: f64 = 400.0;

/// Enemy bolt damage per hit.
pub const ENEMY_BOLT_DAMAGE: i32 = 10;

/// Absorbs accumulated float error in the travelled-distance sum so a bolt
/// expires on the exact tick its nominal range is reached.
pub const RANGE_SLOP: f64 = 1e-6;

// --- Enemy fighters ---

/// Fighter hull points.
pub const FIGHTER_MAX_HEALTH: i32 = 50;

/// Fighter collision radius.
pub const FIGHTER_RADIUS: f64 = 6.0;

/// Distance at which a fighter starts pursuing the ship.
pub const ENGAGE_RADIUS: f64 = 250.0;

/// Distance inside which a fighter may take opportunistic shots.
pub const FIRE_RADIUS: f64 = 180.0;

/// Per-tick probability of a fighter firing while inside FIRE_RADIUS.
pub const ENEMY_FIRE_CHANCE: f64 = 0.005;

/// Fighter speed ceiling (units/s), enforced after steering.
pub const FIGHTER_MAX_SPEED: f64 = 60.0;

/// Lerp factor per tick blending fighter velocity toward the pursuit vector.
pub const PURSUIT_BLEND: f64 = 0.02;

/// Magnitude of the per-axis steering jitter (units/s).
pub const PURSUIT_JITTER: f64 = 4.0;

/// Fighters reflect off this per-axis world bound.
pub const WORLD_BOUND: f64 = 1000.0;

// --- Hazards ---

/// Probability a player bolt hit destroys an asteroid.
pub const ASTEROID_DESTROY_CHANCE: f64 = 0.25;

/// Asteroid radius range (units).
pub const ASTEROID_MIN_RADIUS: f64 = 2.0;
pub const ASTEROID_MAX_RADIUS: f64 = 8.0;

/// Asteroid drift speed ceiling per axis (units/s).
pub const ASTEROID_DRIFT_SPEED: f64 = 3.0;

/// Asteroids drifting past this per-axis bound are repositioned.
pub const ASTEROID_FIELD_BOUND: f64 = 2200.0;

/// Target structure radius and distance along the flight axis.
pub const STRUCTURE_RADIUS: f64 = 80.0;
pub const STRUCTURE_DISTANCE: f64 = 2000.0;

// --- Score ---

/// Points for destroying a fighter.
pub const SCORE_FIGHTER: u32 = 100;

/// Points for destroying an asteroid.
pub const SCORE_ASTEROID: u32 = 25;

// --- Explosion bursts ---

/// Particles per burst.
pub const BURST_PARTICLES: usize = 50;

/// Burst lifetime (seconds).
pub const BURST_LIFETIME_SECS: f64 = 1.0;

/// Particle outward speed range before size scaling (units/s).
pub const BURST_SPEED_MIN: f64 = 5.0;
pub const BURST_SPEED_MAX: f64 = 25.0;

/// Base sizes for impact sparks and kill explosions.
pub const SMALL_BURST_SIZE: f64 = 2.0;
pub const LARGE_BURST_SIZE: f64 = 6.0;

/// Base burst colors (RGB, 0..1), varied slightly per burst.
pub const IMPACT_BURST_COLOR: [f32; 3] = [1.0, 0.62, 0.16];
pub const KILL_BURST_COLOR: [f32; 3] = [1.0, 0.35, 0.05];

// --- World setup defaults ---

/// Default enemy fighter count at level start.
pub const DEFAULT_FIGHTER_COUNT: usize = 8;

/// Default asteroid count at level start.
pub const DEFAULT_ASTEROID_COUNT: usize = 24;
