//! Fixed-timestep accumulator
//!
//! Turns variable display-refresh deltas into a whole number of simulation
//! steps, so game speed does not depend on the monitor's frame rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    pub step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps,
        }
    }

    /// Add `dt` seconds of wall time and return how many steps to run.
    /// When the cap is hit, the remaining backlog is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(0.25, 8);
        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.125), 1);
    }

    #[test]
    fn test_high_refresh_rate_runs_fewer_steps_per_frame() {
        // 120 Hz display, 60 Hz sim: one step every other frame
        let mut clock = FixedStep::default();
        let total: u32 = (0..120).map(|_| clock.advance(1.0 / 120.0)).sum();
        assert!((59..=60).contains(&total));
    }

    #[test]
    fn test_caps_substeps_and_drops_backlog() {
        let mut clock = FixedStep::new(0.01, 4);
        assert_eq!(clock.advance(0.1), 4);
        // The 0.06s left over was discarded, not carried
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(0.005), 0);
    }

    #[test]
    fn test_ignores_negative_and_nan() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        // Nothing was banked, so one step needs a full step of time
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
        assert_eq!(clock.advance(SIM_DT * 0.5), 1);
    }
}
