//! Frame driver glue
//!
//! Owns the world, the serve RNG, the fixed-step clock, and the latest
//! pointer sample. The host calls `pointer_moved` from input events and
//! `frame` once per animation frame.

use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::renderer::RenderSink;
use crate::sim::rng::{ServeRandom, seeded};
use crate::sim::{FixedStep, TickEvents, TickInput, World, tick};

pub struct Session<R: ServeRandom = Pcg32> {
    pub world: World,
    rng: R,
    clock: FixedStep,
    input: TickInput,
}

impl Session<Pcg32> {
    /// Session with a PCG serve RNG; `fallback_seed` is used when the config has none
    pub fn seeded(config: &GameConfig, fallback_seed: u64) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        log::info!("Starting match with seed: {}", seed);
        Self::new(config, seeded(seed))
    }
}

impl<R: ServeRandom> Session<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let world = World::new(config, &mut rng);
        Self {
            world,
            rng,
            clock: FixedStep::default(),
            input: TickInput::default(),
        }
    }

    /// Record the latest pointer position (playfield pixels).
    /// Only the most recent sample before a step is used.
    pub fn pointer_moved(&mut self, y: f32) {
        self.input.pointer_y = Some(y);
    }

    /// Run the simulation steps owed for `dt` seconds of wall time
    pub fn update(&mut self, dt: f32) -> TickEvents {
        let steps = self.clock.advance(dt);
        let mut events = TickEvents::new();
        for _ in 0..steps {
            let input = std::mem::take(&mut self.input);
            events.extend(tick(&mut self.world, &input, &mut self.rng, self.clock.step));
        }
        events
    }

    /// Simulate then render one animation frame
    pub fn frame<S: RenderSink>(&mut self, dt: f32, sink: &mut S) -> Result<TickEvents, S::Error> {
        let events = self.update(dt);
        sink.draw(&self.world)?;
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{FixedRandom, Score};

    /// Records what it was asked to draw
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(u64, Score, f32)>,
    }

    impl RenderSink for RecordingSink {
        type Error = ();

        fn draw(&mut self, world: &World) -> Result<(), ()> {
            self.frames.push((world.time_ticks, world.score, world.left.y));
            Ok(())
        }
    }

    struct FailingSink;

    impl RenderSink for FailingSink {
        type Error = &'static str;

        fn draw(&mut self, _world: &World) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }

    #[test]
    fn test_frame_steps_then_draws() {
        let mut session = Session::new(&GameConfig::default(), FixedRandom(0.5));
        let mut sink = RecordingSink::default();

        session.frame(SIM_DT * 1.5, &mut sink).unwrap();
        session.frame(SIM_DT, &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].0, 1);
        assert_eq!(sink.frames[1].0, 2);
    }

    #[test]
    fn test_latest_pointer_wins() {
        let mut session = Session::new(&GameConfig::default(), FixedRandom(0.5));
        let mut sink = RecordingSink::default();

        session.pointer_moved(100.0);
        session.pointer_moved(300.0);
        session.frame(SIM_DT, &mut sink).unwrap();

        assert_eq!(sink.frames[0].2, 260.0);
    }

    #[test]
    fn test_pointer_waits_for_a_step() {
        let mut session = Session::new(&GameConfig::default(), FixedRandom(0.5));
        session.pointer_moved(100.0);

        // Not enough time for a step: paddle untouched
        session.update(0.0);
        assert_eq!(session.world.left.y, 210.0);

        session.update(SIM_DT);
        assert_eq!(session.world.left.y, 60.0);
    }

    #[test]
    fn test_render_error_is_returned() {
        let mut session = Session::new(&GameConfig::default(), FixedRandom(0.5));
        assert_eq!(session.frame(SIM_DT, &mut FailingSink), Err("surface lost"));
        // Simulation still advanced
        assert_eq!(session.world.time_ticks, 1);
    }

    #[test]
    fn test_seed_from_config_is_reproducible() {
        let config = GameConfig {
            seed: Some(7),
            ..Default::default()
        };
        let mut a = Session::seeded(&config, 1);
        let mut b = Session::seeded(&config, 2);
        for _ in 0..600 {
            a.update(SIM_DT);
            b.update(SIM_DT);
        }
        assert_eq!(a.world.ball, b.world.ball);
        assert_eq!(a.world.score, b.world.score);
    }
}
