//! Headless demo driver.
//!
//! Spawns the game loop, flies straight at the station with the trigger
//! held, and prints a status line each second plus the audio cues as they
//! fire. Exits when the session ends or after one minute.

use std::sync::{mpsc, Arc, Mutex};

use anyhow::{Context, Result};

use voidstrike_app::game_loop;
use voidstrike_app::postfx::{CameraShake, FadeIn};
use voidstrike_app::state::GameLoopCommand;
use voidstrike_core::commands::PlayerCommand;
use voidstrike_core::constants::{DT, TICK_RATE};
use voidstrike_core::enums::{Control, GamePhase};
use voidstrike_core::events::AudioEvent;
use voidstrike_sim::engine::SimConfig;

fn main() -> Result<()> {
    let (snap_tx, snap_rx) = mpsc::channel();
    let latest = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(SimConfig::default(), snap_tx, Arc::clone(&latest));

    for command in [
        PlayerCommand::StartGame,
        PlayerCommand::ControlDown {
            control: Control::ThrustForward,
        },
        PlayerCommand::ControlDown {
            control: Control::Fire,
        },
    ] {
        cmd_tx
            .send(GameLoopCommand::Player(command))
            .context("game loop thread stopped before the demo started")?;
    }

    let mut fade = Some(FadeIn::new(0.5));
    let mut shake: Option<CameraShake> = None;

    for snapshot in snap_rx.iter().take(60 * TICK_RATE as usize) {
        for event in &snapshot.audio_events {
            eprintln!("audio: {event:?}");
            if matches!(event, AudioEvent::ShipHit) {
                shake = Some(CameraShake::new(0.4, 2.0));
            }
        }

        // Presentation effects run on frame time; headless, that is one tick.
        if let Some(f) = fade.as_mut() {
            f.advance(DT);
            if f.finished() {
                fade = None;
            }
        }
        if let Some(s) = shake.as_mut() {
            s.advance(DT);
            if s.finished() {
                shake = None;
            }
        }

        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            println!(
                "t={:.0}s score={} kills={} hull={} bolts={} fighters={}",
                snapshot.time.elapsed_secs,
                snapshot.score,
                snapshot.kills,
                snapshot.ship.health,
                snapshot.bolts.len(),
                snapshot.fighters.len(),
            );
        }

        if snapshot.phase == GamePhase::Over {
            println!("{}", snapshot.outcome_message);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            break;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    Ok(())
}
