//! Presentation-side effects driven by wall-clock frame time.
//!
//! These run on the render cadence, not the simulation tick, so a dropped
//! frame stretches them visually without touching game state. Each effect
//! owns its clock, completes on its own, and is dropped by the caller once
//! finished.

/// Fade from black after a session starts. Overlay alpha runs 1 → 0.
#[derive(Debug)]
pub struct FadeIn {
    elapsed_secs: f64,
    duration_secs: f64,
}

impl FadeIn {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            elapsed_secs: 0.0,
            duration_secs,
        }
    }

    /// Advance by one rendered frame.
    pub fn advance(&mut self, frame_secs: f64) {
        self.elapsed_secs += frame_secs.max(0.0);
    }

    /// Overlay alpha for the current frame.
    pub fn alpha(&self) -> f64 {
        (1.0 - self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}

/// Camera shake on ship hits. Amplitude decays linearly to zero over the
/// duration; the renderer samples `amplitude()` per frame for its jitter.
#[derive(Debug)]
pub struct CameraShake {
    elapsed_secs: f64,
    duration_secs: f64,
    magnitude: f64,
}

impl CameraShake {
    pub fn new(duration_secs: f64, magnitude: f64) -> Self {
        Self {
            elapsed_secs: 0.0,
            duration_secs,
            magnitude,
        }
    }

    /// Advance by one rendered frame.
    pub fn advance(&mut self, frame_secs: f64) {
        self.elapsed_secs += frame_secs.max(0.0);
    }

    /// Current shake amplitude in world units.
    pub fn amplitude(&self) -> f64 {
        let remaining = (1.0 - self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0);
        self.magnitude * remaining
    }

    pub fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}
