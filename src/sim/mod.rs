//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit step duration only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::{Aabb, deflect_velocity, hit_offset, paddle_overlap};
pub use rng::{FixedRandom, ServeRandom};
pub use state::{Ball, Paddle, Score, Side, World};
pub use tick::{GameEvent, TickEvents, TickInput, advance_ai, advance_ball, tick};
