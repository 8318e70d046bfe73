//! WebGPU rendering module
//!
//! The playfield is flat colored quads: net, score digits, paddles, ball.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;

use crate::sim::World;

/// Anything that can present a world snapshot
pub trait RenderSink {
    type Error;

    fn draw(&mut self, world: &World) -> Result<(), Self::Error>;
}
