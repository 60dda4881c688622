//! Session status owned by the engine, outside the ECS world.

use voidstrike_core::enums::GameOutcome;

/// Score, kill count, objective text, and the terminal outcome.
///
/// Score increments are additive only; `outcome` is written at most once
/// per session (`set_outcome` keeps the first cause).
#[derive(Debug, Clone)]
pub struct GameStatus {
    pub score: u32,
    pub kills: u32,
    pub objective: String,
    pub outcome: Option<GameOutcome>,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self {
            score: 0,
            kills: 0,
            objective: "Fight through the patrol and reach the station core".to_string(),
            outcome: None,
        }
    }
}

impl GameStatus {
    /// Record the terminal outcome; later causes in the same tick lose.
    pub fn set_outcome(&mut self, outcome: GameOutcome) {
        self.outcome.get_or_insert(outcome);
    }
}
