//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::commands::{InputState, PlayerCommand};
use voidstrike_core::constants::{DEFAULT_ASTEROID_COUNT, DEFAULT_FIGHTER_COUNT};
use voidstrike_core::enums::{Control, GamePhase};
use voidstrike_core::events::AudioEvent;
use voidstrike_core::state::GameSnapshot;
use voidstrike_core::types::SimTime;

use crate::status::GameStatus;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Enemy fighters spawned at level start.
    pub fighter_count: usize,
    /// Asteroids spawned at level start.
    pub asteroid_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fighter_count: DEFAULT_FIGHTER_COUNT,
            asteroid_count: DEFAULT_ASTEROID_COUNT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    status: GameStatus,
    input: InputState,
    dev_camera: bool,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            status: GameStatus::default(),
            input: InputState::default(),
            dev_camera: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the phase is `Over`, no system runs again: the snapshot keeps
    /// reporting the frozen final state.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();

            if let Some(outcome) = self.status.outcome {
                self.phase = GamePhase::Over;
                self.audio_events.push(AudioEvent::GameOver { outcome });
            }
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.status,
            self.dev_camera,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Mutable world access for scenario setup in tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable RNG access for test spawns.
    #[cfg(test)]
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Simultaneous mutable world and RNG access for test spawns.
    #[cfg(test)]
    pub fn world_and_rng_mut(&mut self) -> (&mut World, &mut ChaCha8Rng) {
        (&mut self.world, &mut self.rng)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::ControlDown { control } => {
                if control == Control::ToggleDevCamera {
                    self.dev_camera = !self.dev_camera;
                } else {
                    self.input.set(control, true);
                }
            }
            PlayerCommand::ControlUp { control } => {
                self.input.set(control, false);
            }
        }
    }

    /// Full reinitialization: fresh world, reseeded RNG, zeroed session.
    fn start_session(&mut self) {
        self.world = World::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        world_setup::setup_world(&mut self.world, &mut self.rng, &self.config);
        self.status = GameStatus::default();
        self.input = InputState::default();
        self.time = SimTime::default();
        self.audio_events.clear();
        self.despawn_buffer.clear();
        self.phase = GamePhase::Running;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Ship flight integration + barrel roll + player fire trigger
        systems::flight::run(
            &mut self.world,
            &self.input,
            &self.time,
            &mut self.audio_events,
        );
        // 2. Ship vs hazards; a terminal hit ends the tick early
        systems::collision::run(
            &mut self.world,
            &mut self.status,
            &mut self.rng,
            &mut self.audio_events,
        );
        if self.status.outcome.is_some() {
            return;
        }
        // 3. Fighter steering, bounds reflection, opportunistic fire
        systems::enemy_ai::run(&mut self.world, &mut self.rng, &mut self.audio_events);
        // 4. Bolt advance, range expiry, hit resolution
        systems::projectiles::run(
            &mut self.world,
            &mut self.rng,
            &mut self.status,
            &mut self.despawn_buffer,
            &mut self.audio_events,
        );
        // 5. Explosion burst aging
        systems::effects::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Asteroid drift and field recycling
        systems::cleanup::run(&mut self.world, &mut self.rng);
    }
}
