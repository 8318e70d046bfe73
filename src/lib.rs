//! Canvas Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `session`: Frame driver glue (fixed-step clock + render hand-off)
//! - `renderer`: WebGPU rendering of the playfield
//! - `platform`: Browser pointer mapping
//! - `config`: Data-driven playfield and speed settings

pub mod config;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Duration of one frame of the classic per-frame game loop.
    /// Speeds are expressed in pixels per reference frame.
    pub const REFERENCE_FRAME: f32 = 1.0 / 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = REFERENCE_FRAME;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted per frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const LEFT_PADDLE_SPEED: f32 = 7.0;
    pub const RIGHT_PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// Serve `dy` is drawn from [-SERVE_DY_RANGE, SERVE_DY_RANGE]
    pub const SERVE_DY_RANGE: f32 = 2.0;

    /// Maximum paddle deflection (45 degrees) for a hit at the paddle edge
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;
}

/// Scale factor applied to per-frame speeds for a step of `dt` seconds
#[inline]
pub fn step_scale(dt: f32) -> f32 {
    dt / consts::REFERENCE_FRAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_scale_reference_frame_is_one() {
        assert_eq!(step_scale(consts::SIM_DT), 1.0);
        assert!((step_scale(consts::REFERENCE_FRAME * 2.0) - 2.0).abs() < 1e-6);
    }
}
