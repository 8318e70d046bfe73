//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `World`; there is no ambient state.

use glam::Vec2;
use serde::Serialize;

use super::collision::Aabb;
use super::rng::{ServeRandom, coin_flip, serve_dy};
use crate::config::GameConfig;

/// Which half of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Pointer-controlled
    Left,
    /// AI-controlled
    Right,
}

impl Side {
    /// Horizontal sign of a ball leaving this side's paddle
    pub fn bounce_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Horizontal sign of the serve after this side wins a point
    pub fn serve_direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A paddle. `x` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per reference frame
    pub speed: f32,
}

impl Paddle {
    /// Vertically centred paddle for `side`
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_margin,
            Side::Right => config.surface_width - config.paddle_margin - config.paddle_width,
        };
        let speed = match side {
            Side::Left => config.left_paddle_speed,
            Side::Right => config.right_paddle_speed,
        };
        Self {
            x,
            y: config.surface_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            speed,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully on the surface
    pub fn clamp(&mut self, surface_height: f32) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + self.height > surface_height {
            self.y = surface_height - self.height;
        }
    }

    /// Centre the paddle on `target_y`, then clamp
    pub fn center_on(&mut self, target_y: f32, surface_height: f32) {
        self.y = target_y - self.height / 2.0;
        self.clamp(surface_height);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// The ball. Position is the top-left corner of its square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per reference frame (`dx`, `dy`)
    pub vel: Vec2,
    pub size: f32,
    /// Scalar speed used for serves and deflections
    pub speed: f32,
}

impl Ball {
    /// Centred ball with zero velocity
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            pos: Self::center_pos(config.surface_width, config.surface_height, config.ball_size),
            vel: Vec2::ZERO,
            size: config.ball_size,
            speed: config.ball_speed,
        }
    }

    fn center_pos(width: f32, height: f32, size: f32) -> Vec2 {
        Vec2::new(width / 2.0 - size / 2.0, height / 2.0 - size / 2.0)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// Re-centre and serve horizontally in `direction` (+1 right, -1 left)
    pub fn reset<R: ServeRandom + ?Sized>(
        &mut self,
        surface: Vec2,
        direction: f32,
        serve_range: f32,
        rng: &mut R,
    ) {
        self.pos = Self::center_pos(surface.x, surface.y, self.size);
        self.vel = Vec2::new(self.speed * direction, serve_dy(rng, serve_range));
    }
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.left + self.right
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Playfield size in pixels
    pub surface: Vec2,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Serve `dy` range
    pub serve_dy_range: f32,
    /// Simulation steps taken
    pub time_ticks: u64,
}

impl World {
    /// Fresh match: centred paddles, ball served in a random direction
    pub fn new<R: ServeRandom + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut ball = Ball::centered(config);
        let direction = coin_flip(rng);
        ball.vel = Vec2::new(ball.speed * direction, serve_dy(rng, config.serve_dy_range));

        Self {
            surface: Vec2::new(config.surface_width, config.surface_height),
            left: Paddle::new(Side::Left, config),
            right: Paddle::new(Side::Right, config),
            ball,
            score: Score::default(),
            serve_dy_range: config.serve_dy_range,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.surface.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.surface.y
    }

    /// Centre the left paddle on a pointer `y` (surface pixels)
    pub fn apply_pointer(&mut self, pointer_y: f32) {
        self.left.center_on(pointer_y, self.surface.y);
    }

    /// Serve a new ball toward `direction`
    pub fn reset_ball<R: ServeRandom + ?Sized>(&mut self, direction: f32, rng: &mut R) {
        self.ball
            .reset(self.surface, direction, self.serve_dy_range, rng);
    }

    /// JSON dump for debug logging
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
