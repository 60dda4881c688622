//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Control;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session from the main menu.
    StartGame,
    /// Tear down and rebuild the session (the only reset path).
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// A control key/touch went down.
    ControlDown { control: Control },
    /// A control key/touch was released.
    ControlUp { control: Control },
}

/// Held-control set, updated from ControlDown/ControlUp at tick boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub thrust_forward: bool,
    pub thrust_back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub fire: bool,
    pub vertical_thrust: bool,
}

impl InputState {
    /// Record a control going down or up. `ToggleDevCamera` is an edge
    /// action handled by the engine, not a held state.
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::ThrustForward => self.thrust_forward = held,
            Control::ThrustBack => self.thrust_back = held,
            Control::TurnLeft => self.turn_left = held,
            Control::TurnRight => self.turn_right = held,
            Control::RollLeft => self.roll_left = held,
            Control::RollRight => self.roll_right = held,
            Control::Fire => self.fire = held,
            Control::VerticalThrust => self.vertical_thrust = held,
            Control::ToggleDevCamera => {}
        }
    }
}
