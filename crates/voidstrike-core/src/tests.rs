#[cfg(test)]
mod tests {
    use crate::commands::{InputState, PlayerCommand};
    use crate::components::{BarrelRoll, Explosion, FlightState};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Running,
            GamePhase::Paused,
            GamePhase::Over,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_outcome_serde_and_messages() {
        let variants = vec![
            GameOutcome::Victory,
            GameOutcome::ShotDown,
            GameOutcome::AsteroidImpact,
            GameOutcome::PlanetImpact,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
            assert!(!v.message().is_empty());
        }
        assert!(GameOutcome::Victory.is_victory());
        assert!(!GameOutcome::ShotDown.is_victory());
    }

    #[test]
    fn test_hazard_kind_serde() {
        let variants = vec![
            HazardKind::Asteroid,
            HazardKind::Planet,
            HazardKind::Structure,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: HazardKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::ControlDown {
                control: Control::Fire,
            },
            PlayerCommand::ControlUp {
                control: Control::ThrustForward,
            },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let _back: PlayerCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_audio_event_serde_tagged() {
        let event = AudioEvent::LaserFired {
            owner: BoltOwner::Player,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\""));
        let _back: AudioEvent = serde_json::from_str(&json).unwrap();
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.horizontal_distance_to(&Position::new(3.0, 4.0, 100.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(2.0, 3.0, 6.0);
        assert!((v.speed() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_state_set() {
        let mut input = InputState::default();
        input.set(Control::Fire, true);
        input.set(Control::TurnLeft, true);
        assert!(input.fire);
        assert!(input.turn_left);
        input.set(Control::Fire, false);
        assert!(!input.fire);
        // Dev camera toggle is an engine edge action, not a held state.
        input.set(Control::ToggleDevCamera, true);
        assert_eq!(input, {
            let mut expect = InputState::default();
            expect.set(Control::TurnLeft, true);
            expect
        });
    }

    #[test]
    fn test_flight_state_invulnerability() {
        let mut flight = FlightState::default();
        assert!(!flight.invulnerable());

        flight.grace_remaining_secs = 0.5;
        assert!(flight.invulnerable());

        flight.grace_remaining_secs = 0.0;
        flight.barrel_roll = BarrelRoll::Rolling {
            direction: 1,
            progress: 1.0,
        };
        assert!(flight.invulnerable());
        assert!((flight.barrel_roll.roll_angle() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flight_state_allows_immediate_first_shot() {
        let flight = FlightState::default();
        // Session clock starts at zero; the default last-shot time must not
        // gate the first shot.
        assert!(0.0 - flight.last_shot_secs >= SHOOT_COOLDOWN_SECS);
    }

    #[test]
    fn test_explosion_derived_opacity_and_size() {
        let explosion = Explosion {
            age: 0.5,
            lifetime: 1.0,
            base_size: 4.0,
            color: IMPACT_BURST_COLOR,
            particles: Vec::new(),
        };
        assert!((explosion.opacity() - 0.5).abs() < 1e-12);
        assert!((explosion.size() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_default_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert_eq!(back.score, 0);
        assert!(back.outcome.is_none());
    }
}
