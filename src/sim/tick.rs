//! Simulation step
//!
//! Advances the world by one step of explicit duration. Speeds are per
//! reference frame, so a step of `SIM_DT` moves everything exactly one
//! classic frame's worth.

use super::collision::{reflect_off_walls, resolve_paddle_hit};
use super::rng::ServeRandom;
use super::state::{Ball, Paddle, Side, World};
use crate::step_scale;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer `y` in surface pixels, if the pointer moved
    pub pointer_y: Option<f32>,
}

/// Something noteworthy that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    /// The given side won a point
    Scored(Side),
}

/// Events raised by one step, in order
pub type TickEvents = Vec<GameEvent>;

/// Move the AI paddle one step toward the ball, then clamp.
///
/// The paddle holds still while its centre is within the ball's vertical
/// extent. There is no overshoot correction.
pub fn advance_ai(paddle: &mut Paddle, ball: &Ball, surface_height: f32, scale: f32) {
    let center = paddle.center_y();
    if center < ball.pos.y {
        paddle.y += paddle.speed * scale;
    } else if center > ball.pos.y + ball.size {
        paddle.y -= paddle.speed * scale;
    }
    paddle.clamp(surface_height);
}

/// Move the ball, bounce it off walls and paddles, and handle scoring
pub fn advance_ball<R: ServeRandom + ?Sized>(
    world: &mut World,
    rng: &mut R,
    scale: f32,
    events: &mut TickEvents,
) {
    let ball = &mut world.ball;
    ball.pos += ball.vel * scale;

    if reflect_off_walls(ball, world.surface.y) {
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &world.left,
            Side::Right => &world.right,
        };
        if let Some(offset) = resolve_paddle_hit(ball, paddle, side) {
            log::trace!("{:?} paddle hit at offset {:.3}", side, offset);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    // Exiting on the left is a point for the right, and the serve goes right
    if world.ball.pos.x < 0.0 {
        award_point(world, Side::Right, rng, events);
    }
    if world.ball.pos.x + world.ball.size > world.surface.x {
        award_point(world, Side::Left, rng, events);
    }
}

fn award_point<R: ServeRandom + ?Sized>(
    world: &mut World,
    scorer: Side,
    rng: &mut R,
    events: &mut TickEvents,
) {
    world.score.award(scorer);
    world.reset_ball(scorer.serve_direction(), rng);
    log::debug!(
        "{:?} scores ({} - {})",
        scorer,
        world.score.left,
        world.score.right
    );
    if log::log_enabled!(log::Level::Debug) {
        match world.snapshot_json() {
            Ok(json) => log::debug!("World after point: {}", json),
            Err(e) => log::warn!("Could not snapshot world: {}", e),
        }
    }
    events.push(GameEvent::Scored(scorer));
}

/// Advance the world by one step of `dt` seconds
pub fn tick<R: ServeRandom + ?Sized>(
    world: &mut World,
    input: &TickInput,
    rng: &mut R,
    dt: f32,
) -> TickEvents {
    let mut events = TickEvents::new();
    let scale = step_scale(dt);

    if let Some(y) = input.pointer_y {
        world.apply_pointer(y);
    }

    advance_ai(&mut world.right, &world.ball, world.surface.y, scale);
    advance_ball(world, rng, scale, &mut events);

    world.time_ticks += 1;
    events
}
