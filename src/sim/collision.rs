//! Collision detection and response for axis-aligned boxes
//!
//! The ball and both paddles are rectangles. A paddle hit throws away the
//! incoming velocity and re-aims the ball by where it struck the paddle face.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_DEFLECTION;

/// Axis-aligned box (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict vertical overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max().y > other.min.y && self.min.y < other.max().y
    }
}

/// Clamp the ball to the top/bottom walls and invert `dy` on contact.
/// Returns true when a wall was touched.
pub fn reflect_off_walls(ball: &mut Ball, surface_height: f32) -> bool {
    let mut hit = false;
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y + ball.size > surface_height {
        ball.pos.y = surface_height - ball.size;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

/// Does the ball overlap the striking face of `side`'s paddle?
///
/// Only the ball's leading edge is tested against the paddle's horizontal
/// extent, so a ball that moves further than a paddle width in one step can
/// pass straight through.
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let paddle_box = paddle.bounds();
    let ball_box = ball.bounds();

    let in_x = match side {
        Side::Left => ball_box.min.x < paddle_box.max().x && ball_box.min.x > paddle_box.min.x,
        Side::Right => ball_box.max().x > paddle_box.min.x && ball_box.max().x < paddle_box.max().x,
    };

    in_x && ball_box.overlaps_y(&paddle_box)
}

/// Relative hit position: 0 at the paddle centre, ±1 at its ends.
/// Not clamped; a ball clipping the paddle corner can exceed ±1.
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0)
}

/// Velocity after a paddle hit at `offset`, leaving in `direction`
pub fn deflect_velocity(speed: f32, offset: f32, direction: f32) -> Vec2 {
    let angle = offset * MAX_DEFLECTION;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}

/// Resolve a paddle hit: snap the ball flush to the face and re-aim it.
/// Returns the hit offset when a collision happened.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side) -> Option<f32> {
    if !paddle_overlap(ball, paddle, side) {
        return None;
    }

    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width,
        Side::Right => paddle.x - ball.size,
    };

    let offset = hit_offset(ball, paddle);
    ball.vel = deflect_velocity(ball.speed, offset, side.bounce_direction());
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::f32::consts::FRAC_1_SQRT_2;

    fn paddle(side: Side) -> Paddle {
        Paddle::new(side, &GameConfig::default())
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            size: 14.0,
            speed: 5.0,
        }
    }

    #[test]
    fn test_wall_reflection_top() {
        let mut ball = ball_at(100.0, -3.0, Vec2::new(5.0, -2.0));
        assert!(reflect_off_walls(&mut ball, 500.0));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_wall_reflection_bottom() {
        let mut ball = ball_at(100.0, 490.0, Vec2::new(5.0, 2.0));
        assert!(reflect_off_walls(&mut ball, 500.0));
        assert_eq!(ball.pos.y, 486.0);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_no_wall_contact() {
        let mut ball = ball_at(100.0, 486.0, Vec2::new(5.0, 2.0));
        assert!(!reflect_off_walls(&mut ball, 500.0));
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_left_center_hit_goes_straight() {
        let p = paddle(Side::Left);
        // Ball centre aligned with paddle centre (250), leading edge inside the paddle
        let mut ball = ball_at(p.x + 4.0, 250.0 - 7.0, Vec2::new(-5.0, 1.0));

        let offset = resolve_paddle_hit(&mut ball, &p, Side::Left).unwrap();
        assert_eq!(offset, 0.0);
        assert_eq!(ball.pos.x, p.x + p.width);
        assert!(ball.vel.x > 0.0);
        assert!((ball.vel.x - 5.0).abs() < 1e-6);
        assert!(ball.vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_right_top_edge_hit_deflects_up_45() {
        let p = paddle(Side::Right);
        // offset = -1: ball centre at paddle top
        let mut ball = ball_at(p.x - 14.0 + 4.0, p.y - 7.0, Vec2::new(5.0, 0.0));

        let offset = resolve_paddle_hit(&mut ball, &p, Side::Right).unwrap();
        assert!((offset + 1.0).abs() < 1e-6);
        assert_eq!(ball.pos.x, p.x - 14.0);
        assert!((ball.vel.x + 5.0 * FRAC_1_SQRT_2).abs() < 1e-5);
        assert!((ball.vel.y + 5.0 * FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_corner_clip_exceeds_45_degrees() {
        // Ball barely overlapping the paddle bottom: offset > 1 is kept as-is
        let p = paddle(Side::Left);
        let mut ball = ball_at(p.x + 4.0, p.y + p.height - 1.0, Vec2::new(-5.0, 0.0));

        let offset = resolve_paddle_hit(&mut ball, &p, Side::Left).unwrap();
        assert!(offset > 1.0);
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!(angle > MAX_DEFLECTION);
        // Speed is preserved regardless
        assert!((ball.vel.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_when_vertically_clear() {
        let p = paddle(Side::Left);
        let mut ball = ball_at(p.x + 4.0, p.y - 14.0, Vec2::new(-5.0, 0.0));
        assert!(resolve_paddle_hit(&mut ball, &p, Side::Left).is_none());
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_miss_when_leading_edge_past_paddle() {
        // Leading edge already behind the paddle's back face
        let p = paddle(Side::Left);
        let mut ball = ball_at(p.x - 1.0, 243.0, Vec2::new(-5.0, 0.0));
        assert!(!paddle_overlap(&ball, &p, Side::Left));
        assert!(resolve_paddle_hit(&mut ball, &p, Side::Left).is_none());
    }

    #[test]
    fn test_deflect_velocity_preserves_speed() {
        for offset in [-1.0, -0.5, 0.0, 0.3, 1.0] {
            let v = deflect_velocity(5.0, offset, 1.0);
            assert!((v.length() - 5.0).abs() < 1e-5);
            assert!(v.x > 0.0);
        }
    }
}
