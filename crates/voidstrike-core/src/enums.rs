//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall session phase. `Over` is terminal: no system runs past it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Running,
    Paused,
    Over,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Reached the target structure (the win condition).
    Victory,
    /// Hull reduced to zero by enemy fire.
    ShotDown,
    /// Flew into an asteroid.
    AsteroidImpact,
    /// Flew into a planet.
    PlanetImpact,
}

impl GameOutcome {
    /// End-screen message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::Victory => "Station core reached. Mission complete!",
            GameOutcome::ShotDown => "Your fighter was destroyed by enemy fire.",
            GameOutcome::AsteroidImpact => "You crashed into an asteroid.",
            GameOutcome::PlanetImpact => "You crashed into a planet.",
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, GameOutcome::Victory)
    }
}

/// World hazard category; dispatch is by this tag, never by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// Drifts, destructible by player bolts.
    Asteroid,
    /// Immutable, lethal on contact.
    Planet,
    /// The mission target; contact wins the game.
    Structure,
}

/// Who fired a bolt. Immutable for the bolt's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltOwner {
    Player,
    Enemy,
}

/// The typed control set. Raw key/touch events are mapped to these by the
/// frontend; anything unmapped never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    ThrustForward,
    ThrustBack,
    TurnLeft,
    TurnRight,
    RollLeft,
    RollRight,
    Fire,
    VerticalThrust,
    ToggleDevCamera,
}
