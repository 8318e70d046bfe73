//! Scene assembly: world snapshot -> triangle list
//!
//! Draw order matches the classic screen: net, scores, paddles, ball.

use glam::Vec2;

use super::shapes::{dashed_line, number, push_rect};
use super::vertex::{Vertex, colors};
use crate::sim::{Paddle, World};

pub const NET_DASH: f32 = 16.0;
pub const NET_PERIOD: f32 = 24.0;
pub const NET_THICKNESS: f32 = 2.0;

/// Score glyph height (matches a 32px font)
pub const SCORE_HEIGHT: f32 = 32.0;
/// Baseline of the score numerals
pub const SCORE_BASELINE: f32 = 40.0;
/// Left score starts this far left of centre; right score this far right
pub const LEFT_SCORE_OFFSET: f32 = 60.0;
pub const RIGHT_SCORE_OFFSET: f32 = 40.0;

/// Build every vertex needed to draw `world`
pub fn build_scene(world: &World) -> Vec<Vertex> {
    let mid = world.width() / 2.0;

    let mut vertices = dashed_line(
        mid,
        world.height(),
        NET_DASH,
        NET_PERIOD,
        NET_THICKNESS,
        colors::NET,
    );

    let top = SCORE_BASELINE - SCORE_HEIGHT;
    number(
        &mut vertices,
        world.score.left,
        Vec2::new(mid - LEFT_SCORE_OFFSET, top),
        SCORE_HEIGHT,
        colors::SCORE,
    );
    number(
        &mut vertices,
        world.score.right,
        Vec2::new(mid + RIGHT_SCORE_OFFSET, top),
        SCORE_HEIGHT,
        colors::SCORE,
    );

    push_paddle(&mut vertices, &world.left);
    push_paddle(&mut vertices, &world.right);

    let ball = &world.ball;
    push_rect(&mut vertices, ball.pos, Vec2::splat(ball.size), colors::BALL);

    vertices
}

fn push_paddle(out: &mut Vec<Vertex>, paddle: &Paddle) {
    push_rect(
        out,
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::FixedRandom;

    #[test]
    fn test_scene_ends_with_paddles_and_ball() {
        let world = World::new(&GameConfig::default(), &mut FixedRandom(0.5));
        let vertices = build_scene(&world);

        // Last quad is the ball
        let ball = &vertices[vertices.len() - 6..];
        assert!(ball.iter().all(|v| v.color == colors::BALL));
        assert_eq!(ball[0].position, [world.ball.pos.x, world.ball.pos.y]);

        // The two before it are the paddles
        let right = &vertices[vertices.len() - 12..vertices.len() - 6];
        assert_eq!(right[0].position, [world.right.x, world.right.y]);
        let left = &vertices[vertices.len() - 18..vertices.len() - 12];
        assert_eq!(left[0].position, [world.left.x, world.left.y]);
    }

    #[test]
    fn test_scene_starts_with_net() {
        let world = World::new(&GameConfig::default(), &mut FixedRandom(0.5));
        let vertices = build_scene(&world);
        assert_eq!(vertices[0].color, colors::NET);
        assert_eq!(vertices[0].position, [399.0, 0.0]);
    }

    #[test]
    fn test_scores_grow_vertex_count() {
        let mut world = World::new(&GameConfig::default(), &mut FixedRandom(0.5));
        let zero_zero = build_scene(&world).len();

        // "0" has 6 segments, "1" has 2, "10" has 8
        world.score.left = 10;
        assert_eq!(build_scene(&world).len(), zero_zero + 2 * 6);
    }
}
